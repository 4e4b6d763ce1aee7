//! Single-pair reachability.

use crate::engine::TraversalEngine;
use std::collections::HashSet;

impl TraversalEngine {
    /// Does `source` depend on `target`, directly or transitively?
    ///
    /// Every name reaches itself, edges or not. The search stops at the first
    /// edge into `target` and never builds the full closure.
    pub fn is_reachable(&self, source: &str, target: &str) -> bool {
        if source == target {
            return true;
        }

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(source);
        let mut stack = vec![source];

        while let Some(current) = stack.pop() {
            for next in self.index().successors_of(current) {
                if next == target {
                    return true;
                }
                if visited.insert(next.as_str()) {
                    stack.push(next.as_str());
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::TraversalEngine;
    use nxq_core::graph::{DepGraph, Dependency, Entity};

    fn engine(pairs: &[(&str, &str)]) -> TraversalEngine {
        TraversalEngine::new(DepGraph::new(
            vec![Entity::new("lonely", "lib")],
            pairs.iter().map(|(s, t)| Dependency::new(*s, *t)).collect(),
        ))
    }

    #[test]
    fn test_reflexive_without_edges() {
        let engine = engine(&[]);
        assert!(engine.is_reachable("lonely", "lonely"));
        assert!(engine.is_reachable("not-in-graph", "not-in-graph"));
    }

    #[test]
    fn test_transitive() {
        let engine = engine(&[("a", "b"), ("b", "c"), ("c", "d")]);
        assert!(engine.is_reachable("a", "d"));
        assert!(engine.is_reachable("b", "d"));
        assert!(!engine.is_reachable("d", "a"));
    }

    #[test]
    fn test_terminates_on_cycle() {
        let engine = engine(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(engine.is_reachable("a", "c"));
        assert!(!engine.is_reachable("a", "z"));
    }

    #[test]
    fn test_case_sensitive() {
        let engine = engine(&[("App", "Lib")]);
        assert!(engine.is_reachable("App", "Lib"));
        assert!(!engine.is_reachable("app", "lib"));
        assert!(!engine.is_reachable("App", "lib"));
    }

    #[test]
    fn test_unknown_source() {
        let engine = engine(&[("a", "b")]);
        assert!(!engine.is_reachable("ghost", "b"));
    }
}
