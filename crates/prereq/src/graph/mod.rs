//! Prerequisite graph engine.
//!
//! This module provides the [`Graph`] store and the read-only algorithms that
//! run over it:
//! - Neighbor resolution (outgoing edges in insertion order)
//! - Cycle detection (three-color DFS)
//! - Topological ordering (DFS postorder)
//! - Level grouping (longest prerequisite chain)
//! - Breadth-first diagnostic trace
//!
//! # Architecture
//!
//! The store uses:
//! - `petgraph::DiGraph<Vertex, f64>` for vertices and edges. Node and edge
//!   indices are handed out sequentially and nothing is ever removed, so index
//!   order is insertion order.
//! - `HashMap<Vertex, NodeIndex>` for O(1) lookup by label.
//!
//! ## Edge Direction Convention
//!
//! Edges point from **prerequisite -> dependent**: `A -> B` means A must be
//! consumed before B. Parallel edges are kept; each one shows up separately in
//! neighbor lookups.
//!
//! ## Determinism
//!
//! Every traversal visits roots in vertex insertion order and neighbors in
//! edge insertion order, so a fixed sequence of insertions always produces
//! the same order, levels and trace.
//!
//! # Example
//!
//! ```
//! use prereq::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 1.0);
//!
//! assert!(!graph.has_cycle());
//! let order: Vec<_> = graph
//!     .topological_order()
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.label().to_string())
//!     .collect();
//! assert_eq!(order, ["A", "B", "C"]);
//! ```

mod bfs;
mod cycle;
mod levels;
mod neighbors;
mod store;
mod topo;

pub use levels::LevelMap;
pub use store::Graph;
