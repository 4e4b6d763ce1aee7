//! Transitive dependency and dependent closures.

use crate::engine::{TraversalEngine, TypeGroups, TypeSets};
use std::collections::{HashSet, VecDeque};

impl TraversalEngine {
    /// Everything `start` depends on, directly or transitively.
    ///
    /// Depth-first pre-order over edges in stored order: each name is emitted
    /// the first time it is reached and its own dependencies are walked before
    /// the next sibling. `start` is not pre-marked, so it shows up only when a
    /// cycle leads back to it (`a -> b -> a` yields `[b, a]`).
    pub fn descendants(&self, start: &str) -> Vec<String> {
        self.descendant_refs(start)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// [`descendants`](Self::descendants) partitioned by entity type.
    pub fn dependencies_by_type(&self, start: &str) -> TypeGroups {
        self.group_by_type(self.descendant_refs(start))
    }

    /// Dependencies of `start` whose type is `kind`, in discovery order.
    ///
    /// Names without an entity record have type `unknown` and can be selected
    /// with that tag.
    pub fn dependencies_of_type(&self, start: &str, kind: &str) -> Vec<String> {
        self.descendant_refs(start)
            .into_iter()
            .filter(|name| self.type_of(name).as_str() == kind)
            .map(str::to_string)
            .collect()
    }

    /// Everything that depends on `target`, nearest first.
    ///
    /// Breadth-first over the reverse index; `target` is never part of the
    /// result.
    pub fn ancestors(&self, target: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(target);

        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(target);

        let mut result = Vec::new();
        while let Some(current) = queue.pop_front() {
            for parent in self.index().predecessors_of(current) {
                if visited.insert(parent.as_str()) {
                    result.push(parent.clone());
                    queue.push_back(parent.as_str());
                }
            }
        }
        result
    }

    /// [`ancestors`](Self::ancestors) partitioned by entity type.
    pub fn dependents_by_type(&self, target: &str) -> TypeGroups {
        let ancestors = self.ancestors(target);
        self.group_by_type(ancestors.iter().map(String::as_str))
    }

    /// Names both `a` and `b` depend on, grouped by type.
    pub fn common_descendants(&self, a: &str, b: &str) -> TypeSets {
        let left: HashSet<&str> = self.descendant_refs(a).into_iter().collect();
        let mut common = TypeSets::new();
        for name in self.descendant_refs(b) {
            if left.contains(name) {
                common
                    .entry(self.type_of(name).as_str().to_string())
                    .or_default()
                    .insert(name.to_string());
            }
        }
        common
    }

    /// Pre-order DFS with an explicit stack of successor cursors.
    fn descendant_refs(&self, start: &str) -> Vec<&str> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![self.index().successors_of(start).iter()];

        while let Some(cursor) = stack.last_mut() {
            match cursor.next() {
                Some(next) => {
                    if visited.insert(next.as_str()) {
                        order.push(next.as_str());
                        stack.push(self.index().successors_of(next).iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        order
    }
}
