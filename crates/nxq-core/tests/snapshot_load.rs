use nxq_core::graph::{DepGraph, Dependency, Entity};
use nxq_core::index::{EntityType, GraphIndex};
use nxq_core::snapshot::{self, SnapshotError};
use tempfile::TempDir;

const NX_OUTPUT: &str = r#"{
  "graph": {
    "nodes": {
      "storefront": {"name": "storefront", "type": "app", "data": {"root": "apps/storefront", "tags": []}},
      "storefront-e2e": {"name": "storefront-e2e", "type": "e2e", "data": {"root": "apps/storefront-e2e"}},
      "ui-kit": {"name": "ui-kit", "type": "lib", "data": {"root": "libs/ui-kit"}},
      "data-access": {"name": "data-access", "type": "lib", "data": {"root": "libs/data-access"}}
    },
    "dependencies": {
      "storefront": [
        {"source": "storefront", "target": "ui-kit", "type": "static"},
        {"source": "storefront", "target": "data-access", "type": "static"}
      ],
      "storefront-e2e": [
        {"source": "storefront-e2e", "target": "storefront", "type": "implicit"}
      ],
      "ui-kit": [
        {"source": "ui-kit", "target": "npm:react", "type": "static"}
      ],
      "data-access": []
    }
  }
}"#;

fn write_snapshot(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_nx_output() {
    let tmp = TempDir::new().unwrap();
    let path = write_snapshot(&tmp, "nx-output.json", NX_OUTPUT);

    let graph = snapshot::load(&path).unwrap();
    assert_eq!(graph.entities.len(), 4);
    assert_eq!(graph.edges.len(), 4);
    assert_eq!(graph.entities[0], Entity::new("storefront", "app"));
    assert_eq!(graph.edges[3], Dependency::new("ui-kit", "npm:react"));
}

#[test]
fn test_loaded_graph_indexes_external_names_as_unknown() {
    let tmp = TempDir::new().unwrap();
    let path = write_snapshot(&tmp, "nx-output.json", NX_OUTPUT);

    let graph = snapshot::load(&path).unwrap();
    let index = GraphIndex::build(&graph);
    assert_eq!(index.type_of("ui-kit"), EntityType::Known("lib"));
    assert_eq!(index.type_of("npm:react"), EntityType::Unknown);
    assert_eq!(index.predecessors_of("npm:react"), ["ui-kit"]);
    assert_eq!(index.successors_of("storefront"), ["ui-kit", "data-access"]);
}

#[test]
fn test_load_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = snapshot::load(&tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::NotFound { .. }));
}

#[test]
fn test_load_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_snapshot(&tmp, "broken.json", "{\"graph\": {\"nodes\": ");

    let err = snapshot::load(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed { .. }));
    assert!(err.to_string().starts_with("invalid JSON in graph file"));
}

#[test]
fn test_load_wrong_shape_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let path = write_snapshot(&tmp, "shape.json", r#"{"graph": {"nodes": [], "dependencies": {}}}"#);

    let err = snapshot::load(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed { .. }));
}

#[test]
fn test_directory_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = snapshot::load(tmp.path()).unwrap_err();
    assert!(!matches!(err, SnapshotError::Malformed { .. }));
}

#[test]
fn test_write_and_reload() {
    let tmp = TempDir::new().unwrap();
    let graph = DepGraph::new(
        vec![Entity::new("api", "app"), Entity::new("auth", "lib")],
        vec![Dependency::new("api", "auth"), Dependency::new("api", "auth")],
    );
    let path = write_snapshot(&tmp, "graph.json", &snapshot::to_json(&graph).unwrap());

    let loaded = snapshot::load(&path).unwrap();
    assert_eq!(loaded, graph);
}

#[test]
fn test_empty_snapshot() {
    let tmp = TempDir::new().unwrap();
    let path = write_snapshot(&tmp, "empty.json", r#"{"graph": {"nodes": {}, "dependencies": {}}}"#);

    let graph = snapshot::load(&path).unwrap();
    assert!(graph.is_empty());
}
