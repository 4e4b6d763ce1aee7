//! Breadth-first distance tiers.
//!
//! Level 0 holds the direct dependencies of the start, level 1 their
//! dependencies not already seen, and so on. A name lives on the level where
//! it was first discovered and nowhere deeper, even if a longer route also
//! reaches it.

use crate::engine::{TraversalEngine, TypeGroups};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Level → names in discovery order.
pub type Levels = BTreeMap<usize, Vec<String>>;

/// Level → type → names in discovery order.
pub type TypedLevels = BTreeMap<usize, TypeGroups>;

impl TraversalEngine {
    pub fn levels(&self, start: &str) -> Levels {
        let mut levels = Levels::new();
        for (level, name) in self.discover_levels(start) {
            levels.entry(level).or_default().push(name.to_string());
        }
        levels
    }

    /// Like [`levels`](Self::levels), with each tier split by entity type.
    pub fn typed_levels(&self, start: &str) -> TypedLevels {
        let mut levels = TypedLevels::new();
        for (level, name) in self.discover_levels(start) {
            levels
                .entry(level)
                .or_default()
                .entry(self.type_of(name).as_str().to_string())
                .or_default()
                .push(name.to_string());
        }
        levels
    }

    /// `(level, name)` pairs in queue-pop discovery order.
    fn discover_levels<'a>(&'a self, start: &'a str) -> Vec<(usize, &'a str)> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start);

        // Each entry carries the level its undiscovered successors will get.
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        queue.push_back((start, 0));

        let mut discovered = Vec::new();
        while let Some((current, child_level)) = queue.pop_front() {
            for next in self.index().successors_of(current) {
                if visited.insert(next.as_str()) {
                    discovered.push((child_level, next.as_str()));
                    queue.push_back((next.as_str(), child_level + 1));
                }
            }
        }
        discovered
    }
}
