//! Point records and the coordinate domain they live in.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a point, unique within its owning collection.
///
/// Ids are positive; `0` is never allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl PointId {
    /// The first id handed out by an empty collection.
    pub const FIRST: PointId = PointId(1);

    /// The id directly after this one.
    pub fn next(self) -> PointId {
        PointId(self.0 + 1)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled 2D point.
///
/// Points are plain value records: selection and drag state are kept
/// elsewhere so a point can be cloned into presets without carrying UI state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Position in domain coordinates.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    /// This point shifted by `delta`, keeping its id.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.id, self.x + delta.x, self.y + delta.y)
    }

    /// Text drawn next to the point.
    pub fn label(&self) -> String {
        self.id.to_string()
    }
}

/// Loosely-typed point input, as received from scripts or JSON fixtures.
///
/// Missing coordinates default to `0`. A missing or zero id asks the
/// collection to allocate one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointInput {
    pub id: Option<PointId>,
    pub x: f64,
    pub y: f64,
}

impl PointInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self { id: None, x, y }
    }
}

impl From<Point> for PointInput {
    fn from(point: Point) -> Self {
        Self {
            id: Some(point.id),
            x: point.x,
            y: point.y,
        }
    }
}

/// The logical coordinate rectangle of a collection.
///
/// Stored as `[min, max]` ranges per axis, matching the JSON shape
/// `{ "x": [min, max], "y": [min, max] }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            x: [-1.0, 1.0],
            y: [-1.0, 1.0],
        }
    }
}

impl Domain {
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self { x, y }
    }

    /// Extent along the x axis.
    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    /// Extent along the y axis.
    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    /// Both ranges are finite and strictly increasing.
    pub fn is_valid(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(|v| v.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }

    /// Check if a position falls inside the domain (inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x[0] && x <= self.x[1] && y >= self.y[0] && y <= self.y[1]
    }

    /// Draw a position uniformly from the domain.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> (f64, f64) {
        (
            rng.f64() * self.width() + self.x[0],
            rng.f64() * self.height() + self.y[0],
        )
    }
}
