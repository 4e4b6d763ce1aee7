//! The engine value shared by all query modules.

use nxq_core::graph::DepGraph;
use nxq_core::index::{EntityType, GraphIndex};
use std::collections::{BTreeMap, BTreeSet};

/// Names grouped by entity type, discovery order kept within each group.
pub type TypeGroups = BTreeMap<String, Vec<String>>;

/// Names grouped by entity type with set semantics.
pub type TypeSets = BTreeMap<String, BTreeSet<String>>;

/// Read-only query surface over one loaded graph.
#[derive(Debug, Clone, Default)]
pub struct TraversalEngine {
    graph: DepGraph,
    index: GraphIndex,
}

impl TraversalEngine {
    /// Take ownership of a loaded graph and build its indexes.
    pub fn new(graph: DepGraph) -> Self {
        let index = GraphIndex::build(&graph);
        Self { graph, index }
    }

    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    pub fn type_of(&self, name: &str) -> EntityType<'_> {
        self.index.type_of(name)
    }

    /// Every entity grouped by type, in load order.
    pub fn list_entities(&self) -> TypeGroups {
        self.graph.entities_by_type()
    }

    /// Partition names by type without reordering them.
    pub(crate) fn group_by_type<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> TypeGroups {
        let mut grouped = TypeGroups::new();
        for name in names {
            grouped
                .entry(self.type_of(name).as_str().to_string())
                .or_default()
                .push(name.to_string());
        }
        grouped
    }
}

impl From<DepGraph> for TraversalEngine {
    fn from(graph: DepGraph) -> Self {
        Self::new(graph)
    }
}
