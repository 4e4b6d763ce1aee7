//! Exhaustive simple-path enumeration.
//!
//! The number of simple paths grows exponentially with branching factor and
//! path length. [`TraversalEngine::all_simple_paths`] has no limit of its
//! own; callers facing large graphs should use
//! [`TraversalEngine::simple_paths_within`] with a [`PathBudget`].

use crate::engine::TraversalEngine;
use serde::Serialize;
use std::collections::HashSet;

/// Entity names from source to target, inclusive.
pub type SimplePath = Vec<String>;

/// Limits for a bounded path search. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathBudget {
    pub max_paths: Option<usize>,
    /// Longest accepted path, counted in edges.
    pub max_depth: Option<usize>,
}

impl PathBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Build from config-style limits where 0 means unlimited.
    pub fn from_limits(max_paths: usize, max_depth: usize) -> Self {
        Self {
            max_paths: (max_paths > 0).then_some(max_paths),
            max_depth: (max_depth > 0).then_some(max_depth),
        }
    }
}

/// Outcome of a bounded path search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathSearch {
    pub paths: Vec<SimplePath>,
    /// More paths exist beyond `max_paths`.
    pub truncated: bool,
}

impl TraversalEngine {
    /// Every simple path from `source` to `target`, in DFS order.
    ///
    /// A node is excluded only while it is on the current branch, so separate
    /// branches may pass through the same node. Duplicate edges yield
    /// duplicate paths. `source == target` gives the single path `[source]`;
    /// no route gives an empty list.
    pub fn all_simple_paths(&self, source: &str, target: &str) -> Vec<SimplePath> {
        self.simple_paths_within(source, target, PathBudget::unlimited())
            .paths
    }

    /// [`all_simple_paths`](Self::all_simple_paths) under a budget.
    ///
    /// Enumeration order is unchanged; paths longer than `max_depth` edges are
    /// not explored, and the search stops once it finds a path past
    /// `max_paths`, reporting `truncated`.
    pub fn simple_paths_within(&self, source: &str, target: &str, budget: PathBudget) -> PathSearch {
        let mut search = PathSearch::default();
        let max_paths = budget.max_paths.unwrap_or(usize::MAX);

        if source == target {
            if max_paths == 0 {
                search.truncated = true;
            } else {
                search.paths.push(vec![source.to_string()]);
            }
            return search;
        }

        let mut path: Vec<&str> = vec![source];
        let mut on_path: HashSet<&str> = HashSet::new();
        on_path.insert(source);
        let mut stack = vec![self.index().successors_of(source).iter()];

        while let Some(cursor) = stack.last_mut() {
            let Some(next) = cursor.next() else {
                stack.pop();
                if let Some(left) = path.pop() {
                    on_path.remove(left);
                }
                continue;
            };
            let next = next.as_str();

            if on_path.contains(next) {
                continue;
            }
            // Extending the current path by `next` gives `path.len()` edges.
            if budget.max_depth.is_some_and(|limit| path.len() > limit) {
                continue;
            }

            if next == target {
                if search.paths.len() == max_paths {
                    search.truncated = true;
                    break;
                }
                let mut found: SimplePath = path.iter().map(|s| s.to_string()).collect();
                found.push(next.to_string());
                search.paths.push(found);
                continue;
            }

            path.push(next);
            on_path.insert(next);
            stack.push(self.index().successors_of(next).iter());
        }

        if search.truncated {
            tracing::warn!(
                source,
                target,
                max_paths,
                "simple path search stopped at path limit"
            );
        }
        search
    }
}
