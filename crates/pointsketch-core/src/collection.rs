//! The editable point collection.

use crate::point::{Domain, Point, PointId, PointInput};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Length of generated collection names.
pub const DEFAULT_NAME_LENGTH: usize = 4;

const VOWELS: &[u8] = b"aeiouy";
const CONSONANTS: &[u8] = b"zrtpsdfghjklmwxcvbn";

/// Generate a short pronounceable name, alternating consonants and vowels.
pub fn random_name(len: usize, rng: &mut fastrand::Rng) -> String {
    let mut consonant = rng.bool();
    let mut name = String::with_capacity(len);
    for _ in 0..len {
        let letters = if consonant { CONSONANTS } else { VOWELS };
        name.push(letters[rng.usize(..letters.len())] as char);
        consonant = !consonant;
    }
    name
}

/// An ordered, id-addressable collection of points within a domain.
///
/// `values` keeps display order; `index` maps every id to its position in
/// `values`. Every mutating method leaves the two in sync before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CollectionData")]
pub struct PointCollection {
    name: String,
    domain: Domain,
    values: Vec<Point>,
    #[serde(skip)]
    index: HashMap<PointId, usize>,
}

/// Wire shape accepted when deserializing a collection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionData {
    name: Option<String>,
    domain: Domain,
    values: Vec<PointInput>,
}

impl From<CollectionData> for PointCollection {
    fn from(data: CollectionData) -> Self {
        let mut collection = match data.name {
            Some(name) if !name.is_empty() => Self::new(name, data.domain),
            _ => Self::unnamed(data.domain),
        };
        for input in data.values {
            collection.insert(input);
        }
        collection
    }
}

impl Default for PointCollection {
    fn default() -> Self {
        Self::unnamed(Domain::default())
    }
}

impl PointCollection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            name: name.into(),
            domain,
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty collection with a generated name.
    pub fn unnamed(domain: Domain) -> Self {
        let mut rng = fastrand::Rng::new();
        Self::new(random_name(DEFAULT_NAME_LENGTH, &mut rng), domain)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Points in display order.
    pub fn values(&self) -> &[Point] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.values.iter()
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.values.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a point in display order.
    pub fn position_of(&self, id: PointId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.position_of(id).and_then(|pos| self.values.get(pos))
    }

    /// The id the next `add_point` would receive.
    ///
    /// Starts one past the id of the last point in display order (or at 1 for
    /// an empty collection) and probes upward past ids already in use.
    pub fn next_id(&self) -> PointId {
        let mut id = self
            .values
            .last()
            .map(|p| p.id.next())
            .unwrap_or(PointId::FIRST);
        while self.index.contains_key(&id) {
            id = id.next();
        }
        id
    }

    /// Append a point at the given coordinates with a freshly allocated id.
    pub fn add_point(&mut self, x: f64, y: f64) -> Point {
        let point = Point::new(self.next_id(), x, y);
        self.push(point);
        point
    }

    /// Append a point from loose input, keeping its id when it is free.
    pub fn insert(&mut self, input: PointInput) -> Point {
        let id = match input.id {
            Some(id) if id.0 > 0 && !self.contains(id) => id,
            _ => self.next_id(),
        };
        let point = Point::new(id, input.x, input.y);
        self.push(point);
        point
    }

    fn push(&mut self, point: Point) {
        self.index.insert(point.id, self.values.len());
        self.values.push(point);
    }

    /// Add `count` points drawn uniformly from this collection's domain.
    pub fn add_random(&mut self, count: usize) -> Vec<PointId> {
        let domain = self.domain;
        let mut rng = fastrand::Rng::new();
        self.add_random_in(count, &domain, &mut rng)
    }

    /// Add `count` points drawn uniformly from `domain` using `rng`.
    pub fn add_random_in(&mut self, count: usize, domain: &Domain, rng: &mut fastrand::Rng) -> Vec<PointId> {
        (0..count)
            .map(|_| {
                let (x, y) = domain.sample(rng);
                self.add_point(x, y).id
            })
            .collect()
    }

    /// Remove a point by id.
    ///
    /// Every point after the removed one shifts down by one position, so
    /// their index entries are rewritten. Returns `None` for an unknown id.
    pub fn remove_point(&mut self, id: PointId) -> Option<Point> {
        let pos = self.index.remove(&id)?;
        let removed = self.values.remove(pos);
        for (offset, point) in self.values[pos..].iter().enumerate() {
            self.index.insert(point.id, pos + offset);
        }
        Some(removed)
    }

    /// Move a point in place. Returns false for an unknown id.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> bool {
        match self.index.get(&id).copied() {
            Some(pos) => {
                let point = &mut self.values[pos];
                point.x = x;
                point.y = y;
                true
            }
            None => false,
        }
    }

    /// Replace domain and points with a deep copy of `other`'s.
    ///
    /// The name is kept; callers that want `other`'s name rename afterwards.
    pub fn clone_contents_from(&mut self, other: &PointCollection) {
        self.domain = other.domain;
        self.values = other.values.clone();
        self.index = other.index.clone();
    }

    /// Ids of the points inside `rect`, bounds inclusive, in display order.
    pub fn points_in_rect(&self, rect: Rect) -> Vec<PointId> {
        self.values
            .iter()
            .filter(|p| p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1)
            .map(|p| p.id)
            .collect()
    }

    /// Check that the id index matches display order and ids are distinct.
    pub fn is_consistent(&self) -> bool {
        self.index.len() == self.values.len()
            && self
                .values
                .iter()
                .enumerate()
                .all(|(pos, p)| self.index.get(&p.id) == Some(&pos))
    }

    /// Serialize the collection to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a collection from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(collection: &PointCollection) -> Vec<u64> {
        collection.ids().map(|id| id.0).collect()
    }

    #[test]
    fn test_add_point_allocates_sequential_ids() {
        let mut c = PointCollection::new("test", Domain::default());
        assert_eq!(c.add_point(0.0, 0.0).id, PointId(1));
        assert_eq!(c.add_point(0.5, 0.5).id, PointId(2));
        assert_eq!(c.add_point(-0.5, 0.5).id, PointId(3));
        assert_eq!(ids(&c), vec![1, 2, 3]);
        assert_eq!(c.position_of(PointId(3)), Some(2));
        assert!(c.is_consistent());
    }

    #[test]
    fn test_next_id_follows_last_point_not_count() {
        let mut c = PointCollection::new("test", Domain::default());
        c.add_point(0.0, 0.0);
        c.add_point(1.0, 1.0);
        c.remove_point(PointId(2));
        assert_eq!(ids(&c), vec![1]);
        assert_eq!(c.add_point(0.2, 0.2).id, PointId(2));
    }

    #[test]
    fn test_next_id_probes_past_used_ids() {
        let mut c = PointCollection::new("test", Domain::default());
        for _ in 0..3 {
            c.add_point(0.0, 0.0);
        }
        // Re-append id 1 so display order becomes [2, 3, 1].
        let first = c.remove_point(PointId(1)).unwrap();
        c.insert(first.into());
        assert_eq!(ids(&c), vec![2, 3, 1]);

        // Last is 1: 2 and 3 are taken, so 4 is the first free id.
        assert_eq!(c.next_id(), PointId(4));
        assert_eq!(c.add_point(0.0, 0.0).id, PointId(4));
        assert!(c.is_consistent());
    }

    #[test]
    fn test_insert_reassigns_taken_or_zero_ids() {
        let mut c = PointCollection::new("test", Domain::default());
        c.add_point(0.0, 0.0);
        assert_eq!(c.insert(PointInput { id: Some(PointId(1)), x: 1.0, y: 1.0 }).id, PointId(2));
        assert_eq!(c.insert(PointInput { id: Some(PointId(0)), x: 1.0, y: 1.0 }).id, PointId(3));
        assert_eq!(c.insert(PointInput::at(2.0, 2.0)).id, PointId(4));
    }

    #[test]
    fn test_remove_point_reindexes_tail() {
        let mut c = PointCollection::new("test", Domain::default());
        for i in 0..6 {
            c.add_point(i as f64, 0.0);
        }
        let removed = c.remove_point(PointId(2)).unwrap();
        assert_eq!(removed.id, PointId(2));
        assert!(c.is_consistent());
        assert_eq!(c.position_of(PointId(3)), Some(1));
        assert_eq!(c.position_of(PointId(6)), Some(4));
        assert_eq!(c.get(PointId(6)).map(|p| p.x), Some(5.0));
        assert!(c.get(PointId(2)).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut c = PointCollection::new("test", Domain::default());
        c.add_point(0.0, 0.0);
        assert!(c.remove_point(PointId(9)).is_none());
        assert_eq!(c.len(), 1);
        assert!(c.is_consistent());
    }

    #[test]
    fn test_ids_stay_unique_under_mixed_operations() {
        let mut c = PointCollection::new("test", Domain::new([-10.0, 10.0], [-5.0, 5.0]));
        let mut rng = fastrand::Rng::with_seed(42);
        let domain = *c.domain();
        for step in 0..300 {
            match rng.u8(..3) {
                0 => {
                    c.add_point(0.0, 0.0);
                }
                1 => {
                    c.add_random_in(rng.usize(..4), &domain, &mut rng);
                }
                _ => {
                    if !c.is_empty() {
                        let pos = rng.usize(..c.len());
                        let id = c.values()[pos].id;
                        c.remove_point(id);
                    }
                }
            }
            let mut seen: Vec<_> = c.ids().collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), c.len(), "duplicate id after step {step}");
            assert!(c.is_consistent(), "index out of sync after step {step}");
        }
    }

    #[test]
    fn test_move_point() {
        let mut c = PointCollection::new("test", Domain::default());
        let p = c.add_point(0.0, 0.0);
        assert!(c.move_point(p.id, 0.25, -0.75));
        assert_eq!(c.get(p.id), Some(&Point::new(p.id, 0.25, -0.75)));
        assert_eq!(c.position_of(p.id), Some(0));
        assert!(!c.move_point(PointId(99), 1.0, 1.0));
    }

    #[test]
    fn test_add_random_within_domain() {
        let domain = Domain::new([-10.0, 10.0], [-5.0, 5.0]);
        let mut c = PointCollection::new("random", domain);
        let added = c.add_random(25);
        assert_eq!(added.len(), 25);
        assert_eq!(c.len(), 25);
        assert!(c.iter().all(|p| domain.contains(p.x, p.y)));
        assert!(c.add_random(0).is_empty());
        assert_eq!(c.len(), 25);
    }

    #[test]
    fn test_clone_contents_keeps_name() {
        let mut source = PointCollection::new("source", Domain::new([0.0, 4.0], [0.0, 2.0]));
        source.add_point(1.0, 1.0);
        source.add_point(2.0, 1.0);

        let mut target = PointCollection::new("target", Domain::default());
        target.add_point(0.0, 0.0);
        target.clone_contents_from(&source);

        assert_eq!(target.name(), "target");
        assert_eq!(target.domain(), source.domain());
        assert_eq!(target.values(), source.values());
        assert!(target.is_consistent());

        // Deep copy: later edits don't leak back.
        target.move_point(PointId(1), 3.0, 0.0);
        assert_eq!(source.get(PointId(1)).map(|p| p.x), Some(1.0));
    }

    #[test]
    fn test_points_in_rect_inclusive() {
        let mut c = PointCollection::new("test", Domain::new([-10.0, 10.0], [-5.0, 5.0]));
        let a = c.add_point(0.0, 0.0);
        let b = c.add_point(5.0, 5.0);
        let edge = c.add_point(1.0, -1.0);
        let hits = c.points_in_rect(Rect::new(-1.0, -1.0, 1.0, 1.0));
        assert_eq!(hits, vec![a.id, edge.id]);
        assert!(!hits.contains(&b.id));
    }

    #[test]
    fn test_random_name_alternates() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..20 {
            let name = random_name(DEFAULT_NAME_LENGTH, &mut rng);
            assert_eq!(name.len(), DEFAULT_NAME_LENGTH);
            let kinds: Vec<bool> = name.bytes().map(|b| VOWELS.contains(&b)).collect();
            assert!(kinds.windows(2).all(|w| w[0] != w[1]), "{name}");
        }
    }

    #[test]
    fn test_json_roundtrip_rebuilds_index() {
        let mut c = PointCollection::new("saved", Domain::new([-10.0, 10.0], [-5.0, 5.0]));
        c.add_point(1.0, 2.0);
        c.add_point(3.0, 4.0);
        c.remove_point(PointId(1));

        let loaded = PointCollection::from_json(&c.to_json().unwrap()).unwrap();
        assert_eq!(loaded.name(), "saved");
        assert_eq!(loaded.values(), c.values());
        assert!(loaded.is_consistent());
    }

    #[test]
    fn test_json_defaults_missing_coordinates() {
        let json = r#"{ "name": "sparse", "values": [ { "x": 1.5 }, { "id": 7, "y": -2 } ] }"#;
        let c = PointCollection::from_json(json).unwrap();
        assert_eq!(c.domain(), &Domain::default());
        assert_eq!(c.values(), &[
            Point::new(PointId(1), 1.5, 0.0),
            Point::new(PointId(7), 0.0, -2.0),
        ]);
    }
}
