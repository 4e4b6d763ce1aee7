//! Graph data model for an Nx project graph.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A project in the monorepo: an application, library, e2e suite, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Open-ended category tag as reported by Nx (`app`, `lib`, `e2e`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A directed edge: `source` imports or otherwise uses `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub source: String,
    pub target: String,
}

impl Dependency {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The loaded dependency graph: entities and edges in snapshot order.
///
/// Nothing here deduplicates. Repeated entity names and repeated edges are
/// kept as loaded; edges may name projects that have no entity record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepGraph {
    pub entities: Vec<Entity>,
    pub edges: Vec<Dependency>,
}

/// Aggregate counts for a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub entities: usize,
    pub edges: usize,
    pub entity_types: usize,
    /// Edge endpoints that have no entity record.
    pub dangling_names: usize,
}

impl DepGraph {
    pub fn new(entities: Vec<Entity>, edges: Vec<Dependency>) -> Self {
        Self { entities, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.edges.is_empty()
    }

    /// All entity names grouped by type, in the order entities were loaded.
    pub fn entities_by_type(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entity in &self.entities {
            grouped
                .entry(entity.kind.clone())
                .or_default()
                .push(entity.name.clone());
        }
        grouped
    }

    pub fn stats(&self) -> GraphStats {
        let known: BTreeSet<&str> = self.entities.iter().map(|e| e.name.as_str()).collect();
        let types: BTreeSet<&str> = self.entities.iter().map(|e| e.kind.as_str()).collect();
        let dangling: BTreeSet<&str> = self
            .edges
            .iter()
            .flat_map(|d| [d.source.as_str(), d.target.as_str()])
            .filter(|name| !known.contains(name))
            .collect();

        GraphStats {
            entities: self.entities.len(),
            edges: self.edges.len(),
            entity_types: types.len(),
            dangling_names: dangling.len(),
        }
    }
}
