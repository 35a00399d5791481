//! Add mode: clicks on empty canvas create points.

use super::{EditContext, Effect, Mode, ModeTool, toggle_target};
use crate::point::PointId;

#[derive(Debug, Default)]
pub struct AddTool;

impl ModeTool for AddTool {
    fn mode(&self) -> Mode {
        Mode::Add
    }

    fn on_click(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point, target: Option<PointId>) -> Effect {
        if target.is_some() {
            return toggle_target(ctx, target);
        }
        let point = ctx.points.add_point(position.x, position.y);
        log::debug!("add: point {} at ({:.3}, {:.3})", point.id, point.x, point.y);
        Effect::POINTS
    }
}
