//! Delete mode: clicking a point removes it, or the whole selection.

use super::{EditContext, Effect, Mode, ModeTool};
use crate::point::PointId;

#[derive(Debug, Default)]
pub struct DeleteTool;

impl ModeTool for DeleteTool {
    fn mode(&self) -> Mode {
        Mode::Delete
    }

    fn on_click(&mut self, ctx: &mut EditContext<'_>, _position: kurbo::Point, target: Option<PointId>) -> Effect {
        let Some(id) = target else {
            return Effect::NONE;
        };

        let removed = ctx
            .operand(id)
            .into_iter()
            .filter(|&id| ctx.points.remove_point(id).is_some())
            .count();
        if removed == 0 {
            return Effect::NONE;
        }

        log::debug!("delete: removed {} point(s), {} left", removed, ctx.points.len());
        // Membership changed; never keep ids of removed points.
        ctx.selection.clear();
        Effect::POINTS | Effect::SELECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::fixture;

    #[test]
    fn test_click_removes_single_point() {
        let (mut points, mut selection) = fixture();
        let mut ctx = EditContext::new(&mut points, &mut selection);
        let effect = DeleteTool.on_click(&mut ctx, kurbo::Point::new(5.0, 5.0), Some(PointId(2)));

        assert!(effect.points);
        assert_eq!(points.ids().collect::<Vec<_>>(), vec![PointId(1)]);
        assert!(points.is_consistent());
    }

    #[test]
    fn test_click_selected_removes_group() {
        let (mut points, mut selection) = fixture();
        points.add_point(-5.0, -5.0);
        selection.select(PointId(1));
        selection.select(PointId(2));

        let mut ctx = EditContext::new(&mut points, &mut selection);
        DeleteTool.on_click(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));

        assert_eq!(points.ids().collect::<Vec<_>>(), vec![PointId(3)]);
        assert!(selection.is_empty());
        assert!(points.is_consistent());
    }

    #[test]
    fn test_click_unselected_point_clears_selection() {
        let (mut points, mut selection) = fixture();
        selection.select(PointId(2));

        let mut ctx = EditContext::new(&mut points, &mut selection);
        DeleteTool.on_click(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));

        assert_eq!(points.ids().collect::<Vec<_>>(), vec![PointId(2)]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_click_empty_or_unknown_is_noop() {
        let (mut points, mut selection) = fixture();
        selection.select(PointId(1));
        let mut ctx = EditContext::new(&mut points, &mut selection);

        assert_eq!(DeleteTool.on_click(&mut ctx, kurbo::Point::ZERO, None), Effect::NONE);
        assert_eq!(DeleteTool.on_click(&mut ctx, kurbo::Point::ZERO, Some(PointId(9))), Effect::NONE);
        assert_eq!(points.len(), 2);
        assert!(selection.contains(PointId(1)));
    }
}
