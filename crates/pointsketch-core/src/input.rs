//! Pointer events as delivered by the view layer.
//!
//! The view maps pixels to domain coordinates and resolves whether the
//! pointer is over a point before forwarding an event here.

use crate::point::PointId;
use serde::{Deserialize, Serialize};

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Button pressed.
    Down,
    /// Pointer moved (with or without a button held).
    Move,
    /// Button released.
    Up,
    /// Pointer left the drawing surface.
    Leave,
}

/// A pointer event in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// The point under the pointer, if any.
    #[serde(default)]
    pub target: Option<PointId>,
}

impl GestureEvent {
    pub fn new(kind: GestureKind, position: kurbo::Point, target: Option<PointId>) -> Self {
        Self {
            kind,
            x: position.x,
            y: position.y,
            target,
        }
    }

    /// Press on empty canvas.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(GestureKind::Down, kurbo::Point::new(x, y), None)
    }

    /// Press on a point.
    pub fn down_on(id: PointId, x: f64, y: f64) -> Self {
        Self::new(GestureKind::Down, kurbo::Point::new(x, y), Some(id))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(GestureKind::Move, kurbo::Point::new(x, y), None)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(GestureKind::Up, kurbo::Point::new(x, y), None)
    }

    pub fn leave() -> Self {
        Self::new(GestureKind::Leave, kurbo::Point::ZERO, None)
    }

    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// An open press, tracked until release to tell clicks from drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Press {
    pub origin: kurbo::Point,
    pub target: Option<PointId>,
    pub dragging: bool,
}

impl Press {
    pub fn new(origin: kurbo::Point, target: Option<PointId>) -> Self {
        Self {
            origin,
            target,
            dragging: false,
        }
    }

    /// Check whether `position` is far enough from the origin to start a drag.
    pub fn exceeds(&self, position: kurbo::Point, threshold: f64) -> bool {
        self.origin.distance(position) > threshold
    }
}
