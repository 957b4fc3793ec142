//! Vertex and edge storage.

use super::levels::{self, LevelMap};
use super::neighbors::{self, Adjacency};
use super::{bfs, cycle, topo};
use crate::domain::{Edge, Vertex};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Backing petgraph type: vertices as node weights, edge weights as `f64`.
pub(super) type PrereqGraph = DiGraph<Vertex, f64>;

/// An insertion-ordered prerequisite graph.
///
/// Vertices are created explicitly with [`Graph::add_vertex`] or implicitly by
/// [`Graph::add_edge`]. Nothing is ever removed.
///
/// The graph is single-owner: mutation needs `&mut Graph`, and every query
/// algorithm borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex and edge arenas.
    ///
    /// Node indices follow vertex creation order and edge indices follow edge
    /// insertion order.
    graph: PrereqGraph,

    /// Label index.
    ///
    /// Every vertex in `graph` has exactly one entry here.
    node_map: HashMap<Vertex, NodeIndex>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a registered vertex by label.
    pub fn lookup(&self, label: &str) -> Option<&Vertex> {
        self.node_map.get(label).map(|&idx| &self.graph[idx])
    }

    /// Whether a vertex with this label is registered
    pub fn contains(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    /// Return the registered vertex for `label`, or a fresh vertex value that
    /// is **not** inserted into the graph.
    ///
    /// Use this to probe without mutating. A vertex obtained here for a new
    /// label is unknown to the graph until it is registered through
    /// [`Graph::get_or_create_registered`] or [`Graph::add_edge`].
    pub fn get_or_create_transient(&self, label: &str) -> Vertex {
        self.lookup(label)
            .cloned()
            .unwrap_or_else(|| Vertex::new(label))
    }

    /// Return the registered vertex for `label`, inserting it first if it is
    /// not present yet.
    ///
    /// Creation is idempotent: registering the same label twice yields one
    /// vertex, in the position of its first registration.
    pub fn get_or_create_registered(&mut self, label: &str) -> &Vertex {
        let idx = self.register(label);
        &self.graph[idx]
    }

    /// Add a vertex. Alias of [`Graph::get_or_create_registered`].
    pub fn add_vertex(&mut self, label: &str) -> &Vertex {
        self.get_or_create_registered(label)
    }

    /// Add a directed edge `origin -> destination`.
    ///
    /// Missing endpoints are registered first. Duplicate edges are appended,
    /// not merged.
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: f64) {
        let from = self.register(origin);
        let to = self.register(destination);
        self.graph.add_edge(from, to, weight);
        trace!(origin, destination, weight, "Added edge");
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertices in creation order
    pub fn list_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All edges in insertion order
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|edge| {
                Edge::new(
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    *edge.weight(),
                )
            })
            .collect()
    }

    /// Outgoing edges of `label` in insertion order.
    ///
    /// Returns an empty sequence for unknown labels.
    pub fn outgoing(&self, label: &str) -> Vec<Edge> {
        self.node_map
            .get(label)
            .map(|&idx| neighbors::outgoing_impl(&self.graph, idx))
            .unwrap_or_default()
    }

    /// Whether any directed cycle (self-loops included) exists.
    pub fn has_cycle(&self) -> bool {
        cycle::has_cycle_impl(&self.graph, &self.adjacency())
    }

    /// Vertices ordered so that every prerequisite precedes its dependents.
    ///
    /// Returns `None` if the graph has a cycle. An empty graph yields an empty
    /// order.
    pub fn topological_order(&self) -> Option<Vec<Vertex>> {
        let adjacency = self.adjacency();
        topo::topological_order_impl(&self.graph, &adjacency)
            .map(|order| self.vertices_at(&order))
    }

    /// Group vertices by longest-prerequisite-chain level (1-based).
    ///
    /// Returns `None` if the graph has a cycle.
    pub fn group_by_level(&self) -> Option<LevelMap> {
        let adjacency = self.adjacency();
        let order = topo::topological_order_impl(&self.graph, &adjacency)?;
        Some(levels::group_by_level_impl(&self.graph, &adjacency, &order))
    }

    /// Breadth-first visit trace starting at the first inserted vertex.
    ///
    /// Only vertices reachable through outgoing edges appear. An empty graph
    /// yields an empty trace.
    pub fn bfs_trace_from_first(&self) -> Vec<Vertex> {
        let trace = bfs::bfs_trace_impl(&self.graph, &self.adjacency());
        self.vertices_at(&trace)
    }

    fn adjacency(&self) -> Adjacency {
        Adjacency::build(&self.graph)
    }

    fn vertices_at(&self, indices: &[NodeIndex]) -> Vec<Vertex> {
        indices.iter().map(|&idx| self.graph[idx].clone()).collect()
    }

    fn register(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(label) {
            return idx;
        }

        let vertex = Vertex::new(label);
        let idx = self.graph.add_node(vertex.clone());
        self.node_map.insert(vertex, idx);
        debug!(label, position = idx.index(), "Registered vertex");
        idx
    }
}
