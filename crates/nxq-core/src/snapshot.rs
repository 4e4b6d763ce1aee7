//! Read Nx project-graph snapshots (`nx graph --file=nx-output.json`).
//!
//! The snapshot is a root object with a `graph` field holding a `nodes` map
//! keyed by project name and a `dependencies` map from project name to a list
//! of `{source, target}` records. Fields beyond those are ignored. Map order
//! in the file becomes entity and edge order in the [`DepGraph`].

use crate::graph::{DepGraph, Dependency, Entity};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Default snapshot file name produced by `nx graph --file`.
pub const DEFAULT_SNAPSHOT_FILE: &str = "nx-output.json";

/// Errors from reading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("graph file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("invalid JSON in graph file '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read graph file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(serde::Deserialize)]
struct RawSnapshot {
    graph: RawGraph,
}

#[derive(serde::Deserialize)]
struct RawGraph {
    nodes: OrderedMap<Entity>,
    dependencies: OrderedMap<Vec<Dependency>>,
}

/// JSON object decoded as a list of entries in document order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parse a snapshot from a JSON string.
pub fn from_json(json: &str) -> serde_json::Result<DepGraph> {
    let raw: RawSnapshot = serde_json::from_str(json)?;

    let entities = raw
        .graph
        .nodes
        .0
        .into_iter()
        .map(|(_, entity)| entity)
        .collect();
    let edges = raw
        .graph
        .dependencies
        .0
        .into_iter()
        .flat_map(|(_, deps)| deps)
        .collect();

    Ok(DepGraph::new(entities, edges))
}

/// Serialize a graph back into snapshot form.
///
/// Edges are grouped under their source name in first-seen order, so a graph
/// whose edges were not already grouped by source comes back grouped.
pub fn to_json(graph: &DepGraph) -> serde_json::Result<String> {
    #[derive(serde::Serialize)]
    struct OutSnapshot<'a> {
        graph: OutGraph<'a>,
    }
    #[derive(serde::Serialize)]
    struct OutGraph<'a> {
        nodes: OrderedMap<&'a Entity>,
        dependencies: OrderedMap<Vec<&'a Dependency>>,
    }

    let nodes = graph
        .entities
        .iter()
        .map(|entity| (entity.name.clone(), entity))
        .collect();

    let mut dependencies: Vec<(String, Vec<&Dependency>)> = Vec::new();
    for dep in &graph.edges {
        match dependencies
            .iter_mut()
            .find(|(source, _)| *source == dep.source)
        {
            Some((_, deps)) => deps.push(dep),
            None => dependencies.push((dep.source.clone(), vec![dep])),
        }
    }

    serde_json::to_string_pretty(&OutSnapshot {
        graph: OutGraph {
            nodes: OrderedMap(nodes),
            dependencies: OrderedMap(dependencies),
        },
    })
}

/// Load a snapshot from disk.
pub fn load(path: &Path) -> Result<DepGraph, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SnapshotError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let graph = from_json(&json).map_err(|source| SnapshotError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        entities = graph.entities.len(),
        edges = graph.edges.len(),
        "loaded graph snapshot"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "graph": {
            "nodes": {
                "zeta": {"name": "zeta", "type": "app", "data": {"root": "apps/zeta"}},
                "alpha": {"name": "alpha", "type": "lib"}
            },
            "dependencies": {
                "zeta": [
                    {"source": "zeta", "target": "alpha", "type": "static"},
                    {"source": "zeta", "target": "npm:lodash", "type": "static"}
                ],
                "alpha": []
            }
        }
    }"#;

    #[test]
    fn test_from_json_preserves_document_order() {
        let graph = from_json(SNAPSHOT).unwrap();
        let names: Vec<&str> = graph.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(
            graph.edges,
            vec![
                Dependency::new("zeta", "alpha"),
                Dependency::new("zeta", "npm:lodash"),
            ]
        );
    }

    #[test]
    fn test_from_json_missing_graph_field() {
        assert!(from_json(r#"{"nodes": {}}"#).is_err());
    }

    #[test]
    fn test_from_json_missing_entity_type() {
        let json = r#"{"graph": {"nodes": {"a": {"name": "a"}}, "dependencies": {}}}"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn test_to_json_groups_edges_by_source() {
        let graph = DepGraph::new(
            vec![Entity::new("a", "app"), Entity::new("b", "lib")],
            vec![
                Dependency::new("a", "b"),
                Dependency::new("b", "c"),
                Dependency::new("a", "c"),
            ],
        );
        let reparsed = from_json(&to_json(&graph).unwrap()).unwrap();
        assert_eq!(reparsed.entities, graph.entities);
        assert_eq!(
            reparsed.edges,
            vec![
                Dependency::new("a", "b"),
                Dependency::new("a", "c"),
                Dependency::new("b", "c"),
            ]
        );
    }

    #[test]
    fn test_not_found_error_message() {
        let err = load(Path::new("/nonexistent/nx-output.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "graph file '/nonexistent/nx-output.json' not found"
        );
    }
}
