use std::path::PathBuf;

use graphscan::{Graph, LoadError, Report, load, load_file, report};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load_fixture(name: &str) -> Graph {
    load_file(fixture(name)).expect("fixture should load")
}

#[test]
fn test_triangle_plus_isolated_vertex() {
    let graph = load_fixture("triangle_plus_isolated.txt");
    assert_eq!(graph.name(), Some("G1"));
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.component_count(), 2);
    assert!(!graph.is_bipartite());
    // B -- C is cheaper through A (1 + 1) than directly (5).
    assert_eq!(graph.component_diameters(), vec![0, 2]);
    assert!(graph.cut_vertices().is_empty());
    assert!(graph.cut_edges().is_empty());

    let graph = Some(&graph);
    assert_eq!(report::diameters(graph), "0 2");
    assert_eq!(report::cut_vertices(graph), "");
    assert_eq!(report::cut_edges(graph), "");
}

#[test]
fn test_two_blocks() {
    let graph = load_fixture("two_blocks.txt");
    assert_eq!(
        Report::new(Some(&graph)),
        Report {
            name: Some("Two blocks".to_string()),
            vertex_count: 8,
            edge_count: 9,
            component_count: 1,
            is_bipartite: false,
            diameters: "16".to_string(),
            cut_vertices: "c d g".to_string(),
            cut_edges: "c d g tail".to_string(),
        }
    );
}

#[test]
fn test_messy_input() {
    let graph = load_fixture("malformed.txt");
    assert_eq!(graph.name(), Some("messy graph name"));
    assert_eq!(
        graph.vertex_names().collect::<Vec<_>>(),
        vec!["x", "y", "z", "solo"]
    );
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.component_count(), 2);
    assert!(!graph.is_bipartite());
    assert_eq!(graph.component_diameters(), vec![0, 4]);
    assert!(graph.cut_edges().is_empty());
}

#[test]
fn test_path_and_cycle() {
    let path = Graph::parse("path\nA -- B\nB -- C\nC -- D");
    assert!(path.is_bipartite());
    assert_eq!(path.component_diameters(), vec![3]);
    assert_eq!(path.cut_vertices(), vec!["B", "C"]);
    assert_eq!(path.cut_edges(), vec![("A", "B"), ("B", "C"), ("C", "D")]);

    let cycle = Graph::parse("cycle\nA -- B\nB -- C\nC -- D\nD -- E\nE -- A");
    assert!(!cycle.is_bipartite());
    assert_eq!(cycle.component_diameters(), vec![2]);
    assert!(cycle.cut_vertices().is_empty());
    assert!(cycle.cut_edges().is_empty());
}

#[test]
fn test_load_from_reader() {
    let data = std::fs::read(fixture("two_blocks.txt")).unwrap();
    let graph = load(data.as_slice()).unwrap();
    assert_eq!(graph, load_fixture("two_blocks.txt"));
}

#[test]
fn test_missing_file() {
    let err = load_file(fixture("no_such_graph.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert!(err.to_string().starts_with("failed to read graph description"));
}

#[test]
fn test_release() {
    let graph = load_fixture("triangle_plus_isolated.txt");
    assert!(report::release(Some(graph)));
    assert!(!report::release(None));
}
