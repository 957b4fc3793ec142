//! Property tests checking the engine against petgraph's reference algorithms.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use prereq::domain::Vertex;
use prereq::graph::Graph;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Vertex count and edges between those vertices.
fn graph_shape() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (0usize..12).prop_flat_map(|n| {
        let edges = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec((0..n, 0..n), 0..30).boxed()
        };
        (Just(n), edges)
    })
}

fn label(i: usize) -> String {
    format!("v{i}")
}

fn build(n: usize, edges: &[(usize, usize)]) -> (Graph, DiGraph<(), ()>) {
    let mut graph = Graph::new();
    let mut reference = DiGraph::new();
    for i in 0..n {
        graph.add_vertex(&label(i));
        reference.add_node(());
    }
    for &(from, to) in edges {
        graph.add_edge(&label(from), &label(to), 1.0);
        reference.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    (graph, reference)
}

fn positions(order: &[Vertex]) -> HashMap<&str, usize> {
    order
        .iter()
        .enumerate()
        .map(|(pos, vertex)| (vertex.label(), pos))
        .collect()
}

proptest! {
    #[test]
    fn cycle_detection_matches_petgraph((n, edges) in graph_shape()) {
        let (graph, reference) = build(n, &edges);
        prop_assert_eq!(graph.has_cycle(), is_cyclic_directed(&reference));
        prop_assert_eq!(graph.topological_order().is_none(), graph.has_cycle());
        prop_assert_eq!(graph.group_by_level().is_none(), graph.has_cycle());
    }

    #[test]
    fn topological_order_respects_every_edge((n, edges) in graph_shape()) {
        let (graph, _) = build(n, &edges);
        if let Some(order) = graph.topological_order() {
            prop_assert_eq!(order.len(), n);
            let pos = positions(&order);
            prop_assert_eq!(pos.len(), n);
            for (from, to) in &edges {
                prop_assert!(pos[label(*from).as_str()] < pos[label(*to).as_str()]);
            }
        }
    }

    #[test]
    fn levels_are_longest_chain_lengths((n, edges) in graph_shape()) {
        let (graph, _) = build(n, &edges);
        if let Some(levels) = graph.group_by_level() {
            let mut level_of = HashMap::new();
            for (level, vertices) in &levels {
                prop_assert!(*level >= 1);
                prop_assert!(!vertices.is_empty());
                for vertex in vertices {
                    prop_assert!(level_of.insert(vertex.label().to_string(), *level).is_none());
                }
            }
            prop_assert_eq!(level_of.len(), n);

            for (from, to) in &edges {
                prop_assert!(level_of[&label(*to)] > level_of[&label(*from)]);
            }

            // Every vertex above level 1 has a prerequisite exactly one level below
            for i in 0..n {
                let level = level_of[&label(i)];
                if level > 1 {
                    let has_parent = edges
                        .iter()
                        .any(|(from, to)| *to == i && level_of[&label(*from)] == level - 1);
                    prop_assert!(has_parent);
                }
            }
        }
    }

    #[test]
    fn bfs_visits_reachable_set_once((n, edges) in graph_shape()) {
        let (graph, reference) = build(n, &edges);
        let trace = graph.bfs_trace_from_first();

        let mut expected = HashSet::new();
        if n > 0 {
            let mut bfs = Bfs::new(&reference, NodeIndex::new(0));
            while let Some(node) = bfs.next(&reference) {
                expected.insert(label(node.index()));
            }
        }

        let visited: HashSet<String> = trace.iter().map(|v| v.label().to_string()).collect();
        prop_assert_eq!(visited.len(), trace.len());
        prop_assert_eq!(visited, expected);
        if n > 0 {
            prop_assert_eq!(trace[0].label(), "v0");
        }
    }

    #[test]
    fn registration_is_idempotent((n, edges) in graph_shape()) {
        let (mut graph, _) = build(n, &edges);
        let before: Vec<Vertex> = graph.list_vertices().cloned().collect();

        for i in 0..n {
            graph.add_vertex(&label(i));
        }

        let after: Vec<Vertex> = graph.list_vertices().cloned().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(graph.edge_count(), edges.len());
    }
}
