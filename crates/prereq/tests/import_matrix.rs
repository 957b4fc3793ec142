//! Integration tests for importing adjacency-matrix files from disk.

use prereq::config::ImportConfig;
use prereq::domain::Vertex;
use prereq::error::ImportError;
use prereq::graph::Graph;
use prereq::import::load_matrix_file;
use tempfile::TempDir;

mod common;
use common::write_matrix;

fn vertex_labels(graph: &Graph) -> Vec<&str> {
    graph.list_vertices().map(Vertex::label).collect()
}

#[test]
fn test_load_course_matrix() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_matrix(
        temp_dir.path(),
        "courses.txt",
        "0, 1, 1, 0\n0, 0, 0, 1\n0, 0, 0, 1\n0, 0, 0, 0\n",
    );

    let mut graph = Graph::new();
    let summary = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap();

    assert_eq!(summary.rows, 4);
    assert_eq!(summary.edges, 4);
    assert_eq!(vertex_labels(&graph), ["Item 1", "Item 2", "Item 3", "Item 4"]);
    assert!(!graph.has_cycle());

    let levels = graph.group_by_level().unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[&2].len(), 2);
}

#[test]
fn test_windows_line_endings() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_matrix(temp_dir.path(), "crlf.txt", "0,1\r\n0,0\r\n");

    let mut graph = Graph::new();
    let summary = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_malformed_file_commits_earlier_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_matrix(temp_dir.path(), "broken.txt", "0,1,0\n0,0,1\n1.5,0,0\n0,0,0\n");

    let mut graph = Graph::new();
    let err = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap_err();

    match err {
        ImportError::Malformed {
            line_number,
            column,
            token,
        } => {
            assert_eq!(line_number, 3);
            assert_eq!(column, 1);
            assert_eq!(token, "1.5");
        }
        other => panic!("Expected Malformed, got {other:?}"),
    }

    assert_eq!(vertex_labels(&graph), ["Item 1", "Item 2", "Item 3"]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_unavailable_file_leaves_graph_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let mut graph = Graph::new();
    graph.add_vertex("Existing");
    let err = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap_err();

    assert!(matches!(err, ImportError::Unavailable { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert_eq!(vertex_labels(&graph), ["Existing"]);
}

#[test]
fn test_directory_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();

    let mut graph = Graph::new();
    let err = load_matrix_file(&mut graph, temp_dir.path(), &ImportConfig::default()).unwrap_err();

    assert!(matches!(err, ImportError::Unavailable { .. }));
    assert!(graph.is_empty());
}

#[test]
fn test_custom_label_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_matrix(temp_dir.path(), "m.txt", "0,1\n0,0\n");
    let config = ImportConfig {
        label_prefix: "Module".to_string(),
        edge_weight: 3.0,
    };

    let mut graph = Graph::new();
    load_matrix_file(&mut graph, &path, &config).unwrap();

    assert_eq!(vertex_labels(&graph), ["Module 1", "Module 2"]);
    let edges = graph.outgoing("Module 1");
    assert!((edges[0].weight - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_utf8_file_is_malformed_not_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin1.txt");
    std::fs::write(&path, b"0,1\n\xff,0\n").unwrap();

    let mut graph = Graph::new();
    let err = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap_err();

    assert!(
        matches!(err, ImportError::Malformed { line_number: 2, column: 1, .. }),
        "got {err:?}"
    );
    assert_eq!(vertex_labels(&graph), ["Item 1", "Item 2"]);
}

#[test]
fn test_summary_counts_items_beyond_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_matrix(temp_dir.path(), "wide.txt", "0,0,0,1\n0,0,0,0\n");

    let mut graph = Graph::new();
    let summary = load_matrix_file(&mut graph, &path, &ImportConfig::default()).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.items, 3);
    assert_eq!(summary.items, graph.size());
}
