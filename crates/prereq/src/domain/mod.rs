//! Domain types for the prerequisite graph.
//!
//! A [`Vertex`] is a labeled item (a course, a task, a build step); an [`Edge`]
//! records that its origin is a prerequisite of its destination.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Weight recorded on edges when the caller has no better value.
///
/// Weights are carried for completeness; no algorithm reads them.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// A labeled item in the dependency graph.
///
/// Identity is the label value: two vertices with equal labels are the same
/// logical vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    /// Create a vertex with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The vertex label
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// Lets label-keyed maps be queried with a plain `&str`.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A directed prerequisite relation: `origin` must come before `destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The prerequisite
    pub origin: Vertex,

    /// The item that depends on `origin`
    pub destination: Vertex,

    /// Edge weight (no algorithmic effect)
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(origin: Vertex, destination: Vertex, weight: f64) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_identity_is_label_value() {
        let a = Vertex::new("Calculus I");
        let b = Vertex::from("Calculus I".to_string());
        assert_eq!(a, b);
        assert_eq!(a.label(), "Calculus I");
    }

    #[test]
    fn test_vertex_serializes_as_plain_string() {
        let json = serde_json::to_string(&Vertex::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("A".into(), "B".into(), DEFAULT_EDGE_WEIGHT);
        assert_eq!(edge.to_string(), "A -> B");
    }
}
