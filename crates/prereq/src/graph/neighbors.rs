//! Neighbor resolution.
//!
//! petgraph keeps each node's outgoing edges in a linked list that yields the
//! newest edge first. Traversals here need edge insertion order, so both
//! helpers re-establish it from edge indices.

use super::store::PrereqGraph;
use crate::domain::Edge;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// Successor lists for every vertex, built once per query.
///
/// `successors(v)` holds one entry per outgoing edge of `v` (parallel edges
/// repeat the target) in edge insertion order.
pub(super) struct Adjacency {
    successors: Vec<Vec<NodeIndex>>,
}

impl Adjacency {
    /// Build successor lists in a single pass over the edge arena.
    pub(super) fn build(graph: &PrereqGraph) -> Self {
        let mut successors = vec![Vec::new(); graph.node_count()];
        // edge_references() walks the arena in index order, i.e. insertion order
        for edge in graph.edge_references() {
            successors[edge.source().index()].push(edge.target());
        }
        Self { successors }
    }

    pub(super) fn successors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.successors[node.index()]
    }
}

/// Outgoing edges of `node` as domain values, in insertion order.
pub(super) fn outgoing_impl(graph: &PrereqGraph, node: NodeIndex) -> Vec<Edge> {
    let mut edges: Vec<_> = graph.edges(node).collect();
    edges.sort_by_key(|edge| edge.id());

    edges
        .into_iter()
        .map(|edge| {
            Edge::new(
                graph[edge.source()].clone(),
                graph[edge.target()].clone(),
                *edge.weight(),
            )
        })
        .collect()
}
