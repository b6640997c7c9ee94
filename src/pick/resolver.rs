//! Which star is under the cursor
//!
//! Physics colliders don't know about stars. `PickTable` is the explicit
//! side-table from collider to star; anything not in it (jar walls, the
//! base) can never be picked, even when it's the first thing a ray hits.

use std::collections::HashMap;
use std::hash::Hash;

use crate::star::StarId;

/// One ray intersection, nearest-first order not required
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The star this collider belongs to, `None` for scenery
    pub target: Option<StarId>,
    pub distance: f32,
}

/// The closest hit that belongs to a star
pub fn nearest_star(hits: &[Hit]) -> Option<StarId> {
    hits.iter()
        .filter_map(|hit| hit.target.map(|id| (id, hit.distance)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Collider → star lookup, generic over the collider handle type
#[derive(Debug, Clone)]
pub struct PickTable<K> {
    owners: HashMap<K, StarId>,
}

impl<K: Copy + Eq + Hash> PickTable<K> {
    pub fn new() -> Self {
        Self { owners: HashMap::new() }
    }

    pub fn register(&mut self, key: K, star: StarId) {
        self.owners.insert(key, star);
    }

    pub fn unregister(&mut self, key: K) -> Option<StarId> {
        self.owners.remove(&key)
    }

    pub fn owner(&self, key: K) -> Option<StarId> {
        self.owners.get(&key).copied()
    }

    /// Tag a raw intersection with its owner
    pub fn hit(&self, key: K, distance: f32) -> Hit {
        Hit {
            target: self.owner(key),
            distance,
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn clear(&mut self) {
        self.owners.clear();
    }
}

impl<K: Copy + Eq + Hash> Default for PickTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_star_skips_scenery() {
        let hits = [
            Hit { target: None, distance: 1.0 },
            Hit { target: Some(7), distance: 4.0 },
            Hit { target: Some(3), distance: 2.5 },
        ];
        assert_eq!(nearest_star(&hits), Some(3));
    }

    #[test]
    fn test_no_star_hit() {
        assert_eq!(nearest_star(&[]), None);
        assert_eq!(nearest_star(&[Hit { target: None, distance: 0.5 }]), None);
    }

    #[test]
    fn test_table_tags_hits() {
        let mut table: PickTable<u32> = PickTable::new();
        table.register(10, 1_700_000_000_000);

        assert_eq!(table.hit(10, 2.0).target, Some(1_700_000_000_000));
        assert_eq!(table.hit(11, 1.0).target, None);

        assert_eq!(table.unregister(10), Some(1_700_000_000_000));
        assert!(table.is_empty());
    }
}
