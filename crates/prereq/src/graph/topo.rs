//! Topological ordering by DFS postorder.

use super::cycle::has_cycle_impl;
use super::neighbors::Adjacency;
use super::store::PrereqGraph;
use petgraph::graph::NodeIndex;

/// Internal implementation of topological sorting.
///
/// Returns `None` when the graph has a cycle.
///
/// # Algorithm
///
/// 1. Refuse cyclic graphs up front
/// 2. For each unvisited root (insertion order), walk unvisited successors
///    depth-first (edge insertion order)
/// 3. Emit a vertex only after all of its successors are finished
/// 4. Reverse the emission order
///
/// A prerequisite is emitted after everything that depends on it, so after
/// the reversal it precedes all of its dependents.
pub(super) fn topological_order_impl(
    graph: &PrereqGraph,
    adjacency: &Adjacency,
) -> Option<Vec<NodeIndex>> {
    if has_cycle_impl(graph, adjacency) {
        return None;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut finished = Vec::with_capacity(graph.node_count());
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();

    for root in graph.node_indices() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        stack.push((root, 0));

        while let Some((node, next)) = stack.last_mut() {
            match adjacency.successors(*node).get(*next) {
                Some(&successor) => {
                    *next += 1;
                    if !visited[successor.index()] {
                        visited[successor.index()] = true;
                        stack.push((successor, 0));
                    }
                }
                None => {
                    finished.push(*node);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    Some(finished)
}
