//! Move mode: drag a point, or the whole selection, and commit on release.

use super::{EditContext, Effect, Mode, ModeTool, toggle_target};
use crate::point::{Point, PointId};
use kurbo::Vec2;

/// Transient state of a drag in progress.
///
/// The collection is not touched until the drag ends; the view draws
/// [`DragPreview::positions`] in the meantime.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    /// Where the drag started.
    pub origin: kurbo::Point,
    /// Where the pointer is now.
    pub current: kurbo::Point,
    /// Dragged points as they were when the drag started.
    originals: Vec<Point>,
}

impl DragPreview {
    pub fn new(origin: kurbo::Point, originals: Vec<Point>) -> Self {
        Self {
            origin,
            current: origin,
            originals,
        }
    }

    /// The common translation applied to every dragged point.
    pub fn translation(&self) -> Vec2 {
        self.current - self.origin
    }

    /// Ids of the dragged points.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.originals.iter().map(|p| p.id)
    }

    /// Dragged points at their current preview positions.
    pub fn positions(&self) -> Vec<Point> {
        let delta = self.translation();
        self.originals.iter().map(|p| p.translated(delta)).collect()
    }
}

/// Drag-to-move tool.
#[derive(Debug, Default)]
pub struct MoveTool {
    drag: Option<DragPreview>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl ModeTool for MoveTool {
    fn mode(&self) -> Mode {
        Mode::Move
    }

    fn on_click(&mut self, ctx: &mut EditContext<'_>, _position: kurbo::Point, target: Option<PointId>) -> Effect {
        toggle_target(ctx, target)
    }

    fn on_drag_start(&mut self, ctx: &mut EditContext<'_>, origin: kurbo::Point, target: Option<PointId>) -> Effect {
        let Some(id) = target else {
            return Effect::NONE;
        };
        let originals: Vec<Point> = ctx
            .operand(id)
            .into_iter()
            .filter_map(|id| ctx.points.get(id).copied())
            .collect();
        if originals.is_empty() {
            return Effect::NONE;
        }
        log::debug!("move: dragging {} point(s)", originals.len());
        self.drag = Some(DragPreview::new(origin, originals));
        Effect::OVERLAY
    }

    fn on_drag(&mut self, _ctx: &mut EditContext<'_>, position: kurbo::Point) -> Effect {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.current = position;
                Effect::OVERLAY
            }
            None => Effect::NONE,
        }
    }

    fn on_drag_end(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point) -> Effect {
        let Some(mut drag) = self.drag.take() else {
            return Effect::NONE;
        };
        drag.current = position;

        // Resolve by id: the collection holds the authoritative record.
        let mut moved = 0;
        for target in drag.positions() {
            if ctx.points.move_point(target.id, target.x, target.y) {
                moved += 1;
            }
        }
        let delta = drag.translation();
        log::debug!("move: committed {} point(s) by ({:.3}, {:.3})", moved, delta.x, delta.y);
        Effect::POINTS | Effect::OVERLAY
    }

    fn on_cancel(&mut self) -> Effect {
        if self.drag.take().is_some() {
            log::debug!("move: drag cancelled, nothing committed");
            Effect::OVERLAY
        } else {
            Effect::NONE
        }
    }

    fn drag_preview(&self) -> Option<&DragPreview> {
        self.drag.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::fixture;

    fn position(points: &crate::collection::PointCollection, id: u64) -> (f64, f64) {
        let p = points.get(PointId(id)).unwrap();
        (p.x, p.y)
    }

    #[test]
    fn test_drag_single_point_commits_on_release() {
        let (mut points, mut selection) = fixture();
        let mut ctx = EditContext::new(&mut points, &mut selection);
        let mut tool = MoveTool::new();

        tool.on_drag_start(&mut ctx, kurbo::Point::new(0.0, 0.0), Some(PointId(1)));
        tool.on_drag(&mut ctx, kurbo::Point::new(1.0, 0.5));

        // Only the preview moves while dragging.
        assert_eq!(ctx.points.get(PointId(1)).map(|p| (p.x, p.y)), Some((0.0, 0.0)));
        let preview = tool.drag_preview().unwrap().positions();
        assert_eq!(preview, vec![Point::new(PointId(1), 1.0, 0.5)]);

        let effect = tool.on_drag_end(&mut ctx, kurbo::Point::new(2.0, 1.0));
        assert!(effect.points);
        assert!(!tool.is_dragging());
        assert_eq!(position(&points, 1), (2.0, 1.0));
        assert_eq!(position(&points, 2), (5.0, 5.0));
    }

    #[test]
    fn test_drag_selected_moves_group_by_common_vector() {
        let (mut points, mut selection) = fixture();
        points.add_point(-5.0, -5.0);
        selection.select(PointId(1));
        selection.select(PointId(2));

        let mut ctx = EditContext::new(&mut points, &mut selection);
        let mut tool = MoveTool::new();
        tool.on_drag_start(&mut ctx, kurbo::Point::new(5.0, 5.0), Some(PointId(2)));
        tool.on_drag_end(&mut ctx, kurbo::Point::new(4.0, 3.0));

        assert_eq!(position(&points, 1), (-1.0, -2.0));
        assert_eq!(position(&points, 2), (4.0, 3.0));
        assert_eq!(position(&points, 3), (-5.0, -5.0));
        assert_eq!(selection.len(), 2);
        assert!(points.is_consistent());
    }

    #[test]
    fn test_drag_unselected_moves_only_it() {
        let (mut points, mut selection) = fixture();
        selection.select(PointId(2));

        let mut ctx = EditContext::new(&mut points, &mut selection);
        let mut tool = MoveTool::new();
        tool.on_drag_start(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));
        tool.on_drag_end(&mut ctx, kurbo::Point::new(-2.0, 0.0));

        assert_eq!(position(&points, 1), (-2.0, 0.0));
        assert_eq!(position(&points, 2), (5.0, 5.0));
    }

    #[test]
    fn test_cancel_discards_drag() {
        let (mut points, mut selection) = fixture();
        let mut ctx = EditContext::new(&mut points, &mut selection);
        let mut tool = MoveTool::new();

        tool.on_drag_start(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));
        tool.on_drag(&mut ctx, kurbo::Point::new(3.0, 3.0));
        assert_eq!(tool.on_cancel(), Effect::OVERLAY);
        assert_eq!(tool.on_drag_end(&mut ctx, kurbo::Point::new(3.0, 3.0)), Effect::NONE);
        assert_eq!(position(&points, 1), (0.0, 0.0));
    }

    #[test]
    fn test_drag_on_empty_canvas_is_ignored() {
        let (mut points, mut selection) = fixture();
        let mut ctx = EditContext::new(&mut points, &mut selection);
        let mut tool = MoveTool::new();

        assert_eq!(tool.on_drag_start(&mut ctx, kurbo::Point::new(3.0, 3.0), None), Effect::NONE);
        assert!(tool.drag_preview().is_none());
    }

    #[test]
    fn test_click_toggles_unselected_point() {
        let (mut points, mut selection) = fixture();
        selection.select(PointId(2));
        let mut ctx = EditContext::new(&mut points, &mut selection);

        MoveTool::new().on_click(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));
        assert_eq!(selection.ids(), vec![PointId(1), PointId(2)]);
    }

    #[test]
    fn test_click_selected_toggles_group() {
        let (mut points, mut selection) = fixture();
        selection.select(PointId(1));
        selection.select(PointId(2));
        let mut ctx = EditContext::new(&mut points, &mut selection);

        let effect = MoveTool::new().on_click(&mut ctx, kurbo::Point::ZERO, Some(PointId(1)));
        assert_eq!(effect, Effect::SELECTION);
        assert!(selection.is_empty());
        assert_eq!(points.get(PointId(1)).map(|p| (p.x, p.y)), Some((0.0, 0.0)));
    }
}
