//! Editing modes and the gesture strategy each one applies.
//!
//! | Mode   | Click empty canvas | Click point             | Drag                         |
//! |--------|--------------------|-------------------------|------------------------------|
//! | Add    | add a point        | toggle point, or group  | ignored                      |
//! | Select | hide brush         | toggle point, or group  | brush on empty canvas        |
//! | Delete | ignored            | remove point, or group  | ignored                      |
//! | Move   | ignored            | toggle point, or group  | move point, or group         |
//!
//! "Or group" applies when the clicked or dragged point is already selected:
//! the whole selection is the operand.

mod add;
mod delete;
mod move_points;
mod select;

pub use add::AddTool;
pub use delete::DeleteTool;
pub use move_points::{DragPreview, MoveTool};
pub use select::SelectTool;

use crate::collection::PointCollection;
use crate::point::PointId;
use crate::selection::{Brush, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Available editing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Add,
    Select,
    Delete,
    Move,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Add, Mode::Select, Mode::Delete, Mode::Move];

    /// Build the strategy that interprets gestures for this mode.
    pub fn tool(self) -> Box<dyn ModeTool> {
        match self {
            Mode::Add => Box::new(AddTool),
            Mode::Select => Box::new(SelectTool::new()),
            Mode::Delete => Box::new(DeleteTool),
            Mode::Move => Box::new(MoveTool::new()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Add => "add",
            Mode::Select => "select",
            Mode::Delete => "delete",
            Mode::Move => "move",
        };
        f.write_str(name)
    }
}

/// The state a gesture may act on, lent to the active tool per call.
#[derive(Debug)]
pub struct EditContext<'a> {
    pub points: &'a mut PointCollection,
    pub selection: &'a mut Selection,
}

impl<'a> EditContext<'a> {
    pub fn new(points: &'a mut PointCollection, selection: &'a mut Selection) -> Self {
        Self { points, selection }
    }

    /// The operand group for a gesture on `id`: the whole selection when
    /// `id` is selected, otherwise just `id`.
    pub fn operand(&self, id: PointId) -> Vec<PointId> {
        if self.selection.contains(id) {
            self.selection.ids()
        } else {
            vec![id]
        }
    }
}

/// What a gesture changed, so the caller knows what to redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effect {
    /// Points were added, removed or moved.
    pub points: bool,
    /// Selection membership changed.
    pub selection: bool,
    /// Only transient overlay state (brush, drag preview) changed.
    pub overlay: bool,
}

impl Effect {
    pub const NONE: Effect = Effect {
        points: false,
        selection: false,
        overlay: false,
    };
    pub const POINTS: Effect = Effect {
        points: true,
        ..Effect::NONE
    };
    pub const SELECTION: Effect = Effect {
        selection: true,
        ..Effect::NONE
    };
    pub const OVERLAY: Effect = Effect {
        overlay: true,
        ..Effect::NONE
    };

    /// Check if anything visible changed.
    pub fn needs_redraw(&self) -> bool {
        self.points || self.selection || self.overlay
    }
}

impl BitOr for Effect {
    type Output = Effect;

    fn bitor(self, rhs: Effect) -> Effect {
        Effect {
            points: self.points || rhs.points,
            selection: self.selection || rhs.selection,
            overlay: self.overlay || rhs.overlay,
        }
    }
}

/// Gesture strategy for one mode.
///
/// The controller turns raw pointer events into these calls. Positions are
/// in domain coordinates; `target` is the point under the pointer at press
/// time.
pub trait ModeTool: fmt::Debug {
    fn mode(&self) -> Mode;

    /// Press and release without movement.
    fn on_click(&mut self, ctx: &mut EditContext<'_>, position: kurbo::Point, target: Option<PointId>) -> Effect;

    /// Pointer moved past the drag threshold while pressed.
    fn on_drag_start(&mut self, _ctx: &mut EditContext<'_>, _origin: kurbo::Point, _target: Option<PointId>) -> Effect {
        Effect::NONE
    }

    fn on_drag(&mut self, _ctx: &mut EditContext<'_>, _position: kurbo::Point) -> Effect {
        Effect::NONE
    }

    fn on_drag_end(&mut self, _ctx: &mut EditContext<'_>, _position: kurbo::Point) -> Effect {
        Effect::NONE
    }

    /// Abandon an open drag without committing it.
    fn on_cancel(&mut self) -> Effect {
        Effect::NONE
    }

    /// Brush overlay to draw, if this mode has one.
    fn brush(&self) -> Option<&Brush> {
        None
    }

    /// Points being dragged and where to draw them.
    fn drag_preview(&self) -> Option<&DragPreview> {
        None
    }
}

/// Toggle the clicked point, or the whole selection when the point is
/// already part of it. Clicks on empty canvas do nothing.
pub(crate) fn toggle_target(ctx: &mut EditContext<'_>, target: Option<PointId>) -> Effect {
    match target {
        Some(id) if ctx.points.contains(id) => {
            let group = ctx.operand(id);
            ctx.selection.toggle_group(&group);
            Effect::SELECTION
        }
        _ => Effect::NONE,
    }
}
