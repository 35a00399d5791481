//! Selection state and rectangular brush selection.

use crate::collection::PointCollection;
use crate::point::PointId;
use kurbo::Rect;
use std::collections::HashSet;

/// The set of selected point ids for one collection.
///
/// Kept apart from the points themselves so point records stay plain values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: HashSet<PointId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<PointId> {
        let mut ids: Vec<PointId> = self.ids.iter().copied().collect();
        ids.sort();
        ids
    }

    pub fn select(&mut self, id: PointId) {
        self.ids.insert(id);
    }

    /// Flip membership of one id. Returns the new membership.
    pub fn toggle(&mut self, id: PointId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Flip a group of ids as one unit.
    ///
    /// A fully selected group is deselected as a whole; otherwise every
    /// member becomes selected. Returns the new membership of the group.
    pub fn toggle_group(&mut self, ids: &[PointId]) -> bool {
        let select = !ids.iter().all(|id| self.ids.contains(id));
        for &id in ids {
            if select {
                self.ids.insert(id);
            } else {
                self.ids.remove(&id);
            }
        }
        select
    }

    /// Replace the whole selection.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = PointId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Make the selection exactly the points inside `extent`.
    ///
    /// A zero-area extent leaves the selection unchanged and returns false.
    pub fn apply_brush(&mut self, points: &PointCollection, extent: Rect) -> bool {
        if is_degenerate(extent) {
            return false;
        }
        self.replace(points.points_in_rect(extent));
        true
    }
}

fn is_degenerate(extent: Rect) -> bool {
    extent.width() <= 0.0 || extent.height() <= 0.0
}

/// A rectangular selection region dragged out in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Where the press started.
    pub anchor: kurbo::Point,
    /// Where the pointer is now.
    pub current: kurbo::Point,
}

impl Brush {
    /// Start a brush at a single position (empty extent).
    pub fn new(anchor: kurbo::Point) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    pub fn update(&mut self, current: kurbo::Point) {
        self.current = current;
    }

    /// The normalized extent `[[x_min, y_min], [x_max, y_max]]`.
    pub fn extent(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }

    /// True when the extent has no area.
    pub fn is_empty(&self) -> bool {
        is_degenerate(self.extent())
    }
}
