//! Breadth-first diagnostic trace.

use super::neighbors::Adjacency;
use super::store::PrereqGraph;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;
use tracing::trace;

/// Internal implementation of the BFS trace.
///
/// Starts at the first inserted vertex and follows outgoing edges only.
/// Vertices are marked when enqueued, so each appears once. Vertices not
/// reachable from the start are never visited.
pub(super) fn bfs_trace_impl(graph: &PrereqGraph, adjacency: &Adjacency) -> Vec<NodeIndex> {
    let Some(start) = graph.node_indices().next() else {
        return Vec::new();
    };

    let mut marked = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    let mut trace = Vec::new();
    marked[start.index()] = true;

    while let Some(node) = queue.pop_front() {
        trace!(vertex = %graph[node], "Visiting");
        trace.push(node);

        for &successor in adjacency.successors(node) {
            if !marked[successor.index()] {
                marked[successor.index()] = true;
                queue.push_back(successor);
            }
        }
    }

    trace
}
