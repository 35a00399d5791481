//! Linear mapping between domain coordinates and view pixels.

use crate::collection::PointCollection;
use crate::input::{GestureEvent, GestureKind};
use crate::point::{Domain, PointId};
use kurbo::{Affine, Size};

/// Radius of a drawn point in pixels, also used as the hit tolerance.
pub const POINT_RADIUS: f64 = 8.0;

/// Maps a domain onto a pixel viewport.
///
/// `pixel = (value - min) / (max - min) * size` on each axis, so the domain
/// minimum lands on pixel 0 and the maximum on the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMapping {
    pub domain: Domain,
    pub size: Size,
}

impl ViewMapping {
    pub fn new(domain: Domain, size: Size) -> Self {
        Self { domain, size }
    }

    /// Transform from domain coordinates to pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale_non_uniform(
            self.size.width / self.domain.width(),
            self.size.height / self.domain.height(),
        ) * Affine::translate((-self.domain.x[0], -self.domain.y[0]))
    }

    /// Transform from pixels back to domain coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::translate((self.domain.x[0], self.domain.y[0]))
            * Affine::scale_non_uniform(
                self.domain.width() / self.size.width,
                self.domain.height() / self.size.height,
            )
    }

    /// Convert a domain position to pixels.
    pub fn to_pixel(&self, domain_point: kurbo::Point) -> kurbo::Point {
        self.transform() * domain_point
    }

    /// Convert a pixel position to domain coordinates.
    pub fn to_domain(&self, pixel: kurbo::Point) -> kurbo::Point {
        self.inverse_transform() * pixel
    }

    /// Topmost point drawn within `tolerance` pixels of `pixel`.
    ///
    /// Later points are drawn over earlier ones, so the search runs backwards.
    pub fn hit_test(&self, points: &PointCollection, pixel: kurbo::Point, tolerance: f64) -> Option<PointId> {
        let transform = self.transform();
        points
            .iter()
            .rev()
            .find(|p| (transform * p.position()).distance(pixel) <= tolerance)
            .map(|p| p.id)
    }

    /// Build a gesture event from a pixel-space pointer event.
    pub fn gesture(&self, kind: GestureKind, pixel: kurbo::Point, target: Option<PointId>) -> GestureEvent {
        GestureEvent::new(kind, self.to_domain(pixel), target)
    }
}
