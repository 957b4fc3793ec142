//! Level grouping (longest-path leveling).
//!
//! A vertex's level is the length of the longest prerequisite chain ending at
//! it, counted from 1: vertices without prerequisites sit on level 1, and any
//! other vertex sits one level above its deepest prerequisite.

use super::neighbors::Adjacency;
use super::store::PrereqGraph;
use crate::domain::Vertex;
use petgraph::graph::NodeIndex;
use std::collections::BTreeMap;

/// Vertices grouped by level, ascending.
///
/// Within a level, vertices keep their creation order. Levels with no
/// vertices are absent.
pub type LevelMap = BTreeMap<usize, Vec<Vertex>>;

/// Internal implementation of level grouping.
///
/// `order` must be a topological order of `graph`. Relaxing edges in that
/// order settles every vertex's level before any of its successors is read.
pub(super) fn group_by_level_impl(
    graph: &PrereqGraph,
    adjacency: &Adjacency,
    order: &[NodeIndex],
) -> LevelMap {
    let mut level = vec![1_usize; graph.node_count()];

    for &node in order {
        let next_level = level[node.index()] + 1;
        for &successor in adjacency.successors(node) {
            let slot = &mut level[successor.index()];
            *slot = (*slot).max(next_level);
        }
    }

    let mut grouped = LevelMap::new();
    for node in graph.node_indices() {
        grouped
            .entry(level[node.index()])
            .or_default()
            .push(graph[node].clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::super::topo::topological_order_impl;
    use super::*;

    fn levels(labels: &[&str], edges: &[(usize, usize)]) -> Vec<(usize, Vec<String>)> {
        let mut graph = PrereqGraph::new();
        let nodes: Vec<_> = labels
            .iter()
            .map(|label| graph.add_node(Vertex::new(*label)))
            .collect();
        for &(from, to) in edges {
            graph.add_edge(nodes[from], nodes[to], 1.0);
        }
        let adjacency = Adjacency::build(&graph);
        let order = topological_order_impl(&graph, &adjacency).unwrap();
        group_by_level_impl(&graph, &adjacency, &order)
            .into_iter()
            .map(|(level, vertices)| {
                (
                    level,
                    vertices.iter().map(|v| v.label().to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_chain_levels() {
        let result = levels(&["A", "B", "C"], &[(0, 1), (1, 2)]);
        assert_eq!(
            result,
            vec![
                (1, vec!["A".to_string()]),
                (2, vec!["B".to_string()]),
                (3, vec!["C".to_string()]),
            ]
        );
    }

    #[test]
    fn test_longest_path_wins() {
        // A -> D directly and A -> B -> C -> D: D sits on level 4, not 2
        let result = levels(&["A", "B", "C", "D"], &[(0, 3), (0, 1), (1, 2), (2, 3)]);
        assert_eq!(result.last().unwrap(), &(4, vec!["D".to_string()]));
    }

    #[test]
    fn test_level_members_keep_creation_order() {
        // DFS would finish C before B; the grouping still lists B first
        let result = levels(&["A", "B", "C", "D"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(result[1], (2, vec!["B".to_string(), "C".to_string()]));
    }

    #[test]
    fn test_isolated_vertices_share_level_one() {
        let result = levels(&["A", "B"], &[]);
        assert_eq!(result, vec![(1, vec!["A".to_string(), "B".to_string()])]);
    }

    #[test]
    fn test_empty_graph_has_no_levels() {
        assert!(levels(&[], &[]).is_empty());
    }
}
