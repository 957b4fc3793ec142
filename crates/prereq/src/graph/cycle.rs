//! Cycle detection.
//!
//! Three-color depth-first search:
//! - `White`: never visited
//! - `Gray`: on the active DFS path
//! - `Black`: fully explored
//!
//! Reaching a `Gray` vertex again closes a cycle. The search restarts from
//! every still-white vertex in insertion order and stops at the first cycle.
//! It answers *whether* a cycle exists; it does not report its members.

use super::neighbors::Adjacency;
use super::store::PrereqGraph;
use petgraph::graph::NodeIndex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Internal implementation of cycle detection.
///
/// Uses an explicit stack of `(vertex, next successor position)` frames, so
/// deep prerequisite chains never hit the call-stack limit. A self-loop is a
/// cycle: the vertex is `Gray` when its own edge is examined.
pub(super) fn has_cycle_impl(graph: &PrereqGraph, adjacency: &Adjacency) -> bool {
    let mut color = vec![Color::White; graph.node_count()];
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();

    for root in graph.node_indices() {
        if color[root.index()] != Color::White {
            continue;
        }

        color[root.index()] = Color::Gray;
        stack.push((root, 0));

        while let Some((node, next)) = stack.last_mut() {
            let Some(&successor) = adjacency.successors(*node).get(*next) else {
                color[node.index()] = Color::Black;
                stack.pop();
                continue;
            };
            *next += 1;

            match color[successor.index()] {
                Color::Gray => {
                    debug!(
                        from = %graph[*node],
                        to = %graph[successor],
                        "Cycle detected"
                    );
                    return true;
                }
                Color::Black => {}
                Color::White => {
                    color[successor.index()] = Color::Gray;
                    stack.push((successor, 0));
                }
            }
        }
    }

    false
}
