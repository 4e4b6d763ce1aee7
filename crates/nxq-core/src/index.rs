//! Lookup indexes derived from a [`DepGraph`].
//!
//! Built once after loading. The forward and reverse adjacency lists keep
//! edge iteration order and keep duplicate edges, so walking
//! `successors_of(x)` visits exactly what a scan of `graph.edges` filtered by
//! `source == x` would.

use crate::graph::DepGraph;
use std::collections::HashMap;
use std::fmt;

/// Type tag reported for names with no entity record.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Result of a type lookup. Names that only appear on edges are `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType<'a> {
    Known(&'a str),
    Unknown,
}

impl<'a> EntityType<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            EntityType::Known(kind) => kind,
            EntityType::Unknown => UNKNOWN_TYPE,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, EntityType::Known(_))
    }
}

impl fmt::Display for EntityType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name → type map plus forward and reverse adjacency.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    types: HashMap<String, String>,
    successors: HashMap<String, Vec<String>>,
    predecessors: HashMap<String, Vec<String>>,
}

impl GraphIndex {
    /// Build all indexes in one pass over entities and one over edges.
    pub fn build(graph: &DepGraph) -> Self {
        let mut types = HashMap::with_capacity(graph.entities.len());
        for entity in &graph.entities {
            // Later duplicates overwrite earlier ones.
            types.insert(entity.name.clone(), entity.kind.clone());
        }

        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        let mut predecessors: HashMap<String, Vec<String>> = HashMap::new();
        for dep in &graph.edges {
            successors
                .entry(dep.source.clone())
                .or_default()
                .push(dep.target.clone());
            predecessors
                .entry(dep.target.clone())
                .or_default()
                .push(dep.source.clone());
        }

        tracing::debug!(
            entities = types.len(),
            edges = graph.edges.len(),
            sources = successors.len(),
            targets = predecessors.len(),
            "built graph index"
        );

        Self {
            types,
            successors,
            predecessors,
        }
    }

    pub fn type_of(&self, name: &str) -> EntityType<'_> {
        self.types
            .get(name)
            .map_or(EntityType::Unknown, |kind| EntityType::Known(kind.as_str()))
    }

    /// Direct dependencies of `name`, in edge order.
    pub fn successors_of(&self, name: &str) -> &[String] {
        self.successors.get(name).map_or(&[], Vec::as_slice)
    }

    /// Direct dependents of `name`, in edge order.
    pub fn predecessors_of(&self, name: &str) -> &[String] {
        self.predecessors.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn contains_entity(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Dependency, Entity};

    #[test]
    fn test_type_of_last_duplicate_wins() {
        let graph = DepGraph::new(
            vec![Entity::new("core", "lib"), Entity::new("core", "app")],
            Vec::new(),
        );
        let index = GraphIndex::build(&graph);
        assert_eq!(index.type_of("core"), EntityType::Known("app"));
    }

    #[test]
    fn test_type_of_missing_name_is_unknown() {
        let index = GraphIndex::build(&DepGraph::default());
        let kind = index.type_of("ghost");
        assert_eq!(kind, EntityType::Unknown);
        assert_eq!(kind.as_str(), "unknown");
        assert!(!kind.is_known());
        assert!(!index.contains_entity("ghost"));
    }

    #[test]
    fn test_adjacency_keeps_order_and_duplicates() {
        let graph = DepGraph::new(
            vec![Entity::new("a", "app")],
            vec![
                Dependency::new("a", "c"),
                Dependency::new("b", "c"),
                Dependency::new("a", "c"),
                Dependency::new("a", "b"),
            ],
        );
        let index = GraphIndex::build(&graph);
        assert_eq!(index.successors_of("a"), ["c", "c", "b"]);
        assert_eq!(index.predecessors_of("c"), ["a", "b", "a"]);
        assert_eq!(index.predecessors_of("b"), ["a"]);
    }

    #[test]
    fn test_lookups_are_total() {
        let index = GraphIndex::build(&DepGraph::default());
        assert!(index.successors_of("nothing").is_empty());
        assert!(index.predecessors_of("nothing").is_empty());
    }

    #[test]
    fn test_display_uses_sentinel() {
        assert_eq!(EntityType::Unknown.to_string(), "unknown");
        assert_eq!(EntityType::Known("lib").to_string(), "lib");
    }
}
