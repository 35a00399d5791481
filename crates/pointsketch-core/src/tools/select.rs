//! Select mode: click to toggle, drag on empty canvas to brush-select.

use super::{EditContext, Effect, Mode, ModeTool, toggle_target};
use crate::point::PointId;
use crate::selection::Brush;

/// Brush-selection tool.
///
/// The brush overlay lives exactly as long as this tool: it is created when
/// Select mode is entered and dropped when the controller switches away.
#[derive(Debug, Default)]
pub struct SelectTool {
    /// Last brush drawn; stays visible after release like a marquee.
    brush: Option<Brush>,
    /// Whether the brush is following the pointer.
    brushing: bool,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_brushing(&self) -> bool {
        self.brushing
    }

    fn track(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point) -> Effect {
        if !self.brushing {
            return Effect::NONE;
        }
        let Some(brush) = self.brush.as_mut() else {
            return Effect::NONE;
        };
        brush.update(position);
        if ctx.selection.apply_brush(ctx.points, brush.extent()) {
            Effect::SELECTION | Effect::OVERLAY
        } else {
            log::trace!("select: empty brush extent, selection kept");
            Effect::OVERLAY
        }
    }
}

impl ModeTool for SelectTool {
    fn mode(&self) -> Mode {
        Mode::Select
    }

    fn on_click(&mut self, ctx: &mut EditContext<'_>, _position: kurbo::Point, target: Option<PointId>) -> Effect {
        match target {
            Some(_) => toggle_target(ctx, target),
            None => {
                // A click is an empty brush: hide the overlay, keep the selection.
                if self.brush.take().is_some() {
                    Effect::OVERLAY
                } else {
                    Effect::NONE
                }
            }
        }
    }

    fn on_drag_start(&mut self, _ctx: &mut EditContext<'_>, origin: kurbo::Point, target: Option<PointId>) -> Effect {
        if target.is_some() {
            return Effect::NONE;
        }
        self.brush = Some(Brush::new(origin));
        self.brushing = true;
        Effect::OVERLAY
    }

    fn on_drag(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point) -> Effect {
        self.track(ctx, position)
    }

    fn on_drag_end(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point) -> Effect {
        let effect = self.track(ctx, position);
        if self.brushing {
            log::debug!("select: brush closed with {} point(s) selected", ctx.selection.len());
        }
        self.brushing = false;
        effect
    }

    fn on_cancel(&mut self) -> Effect {
        self.brushing = false;
        Effect::NONE
    }

    fn brush(&self) -> Option<&Brush> {
        self.brush.as_ref()
    }
}
