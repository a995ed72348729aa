//! Static directed graph traversed by BFS.
//!
//! Nodes keep insertion order (`IndexMap`) so drawing order and any
//! iteration over the graph are deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Node identifier.
pub type NodeId = String;

/// Default BFS start node of the example graph.
pub const DEFAULT_START: &str = "A";

/// Default click radius around a node centre.
pub const DEFAULT_HIT_RADIUS: f64 = 25.0;

/// 2D display position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `(x, y)`.
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GraphNode {
    position: Position,
    neighbors: Vec<NodeId>,
}

/// Adjacency-list graph with display positions. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    nodes: IndexMap<NodeId, GraphNode>,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::example()
    }
}

impl GraphModel {
    /// Build and validate a graph from `(id, position, neighbors)` triples.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Config` on an empty graph or duplicate id, and
    /// `VizError::DanglingEdge` if a neighbor is not a node.
    pub fn new<I>(nodes: I) -> VizResult<Self>
    where
        I: IntoIterator<Item = (NodeId, Position, Vec<NodeId>)>,
    {
        let mut map = IndexMap::new();
        for (id, position, neighbors) in nodes {
            if map.contains_key(&id) {
                return Err(VizError::config(format!("duplicate graph node '{id}'")));
            }
            map.insert(id, GraphNode { position, neighbors });
        }
        let graph = Self { nodes: map };
        graph.validate()?;
        Ok(graph)
    }

    /// The fixed teaching graph `A:[B,C] B:[D,E] C:[F] D:[] E:[F] F:[]`.
    #[must_use]
    pub fn example() -> Self {
        let layout: [(&str, f64, f64, &[&str]); 6] = [
            ("A", 300.0, 60.0, &["B", "C"]),
            ("B", 150.0, 160.0, &["D", "E"]),
            ("C", 450.0, 160.0, &["F"]),
            ("D", 100.0, 280.0, &[]),
            ("E", 250.0, 280.0, &["F"]),
            ("F", 420.0, 280.0, &[]),
        ];
        let nodes = layout
            .iter()
            .map(|(id, x, y, neighbors)| {
                (
                    (*id).to_string(),
                    GraphNode {
                        position: Position::new(*x, *y),
                        neighbors: neighbors.iter().map(|n| (*n).to_string()).collect(),
                    },
                )
            })
            .collect();
        Self { nodes }
    }

    /// Check that the graph is non-empty and every neighbor resolves.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> VizResult<()> {
        if self.nodes.is_empty() {
            return Err(VizError::config("graph has no nodes"));
        }
        for (from, node) in &self.nodes {
            if let Some(to) = node.neighbors.iter().find(|n| !self.nodes.contains_key(*n)) {
                return Err(VizError::DanglingEdge {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        Ok(())
    }

    /// Outgoing neighbors of `node`, in adjacency order.
    ///
    /// # Errors
    ///
    /// Returns `VizError::NodeNotFound` for an unknown id.
    pub fn neighbors(&self, node: &str) -> VizResult<&[NodeId]> {
        self.nodes
            .get(node)
            .map(|n| n.neighbors.as_slice())
            .ok_or_else(|| VizError::node_not_found(node))
    }

    /// Display position of `node`.
    ///
    /// # Errors
    ///
    /// Returns `VizError::NodeNotFound` for an unknown id.
    pub fn position(&self, node: &str) -> VizResult<Position> {
        self.nodes
            .get(node)
            .map(|n| n.position)
            .ok_or_else(|| VizError::node_not_found(node))
    }

    /// Whether `node` exists.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// All directed edges `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes
            .iter()
            .flat_map(|(from, node)| node.neighbors.iter().map(move |to| (from, to)))
    }

    /// First node whose centre lies strictly within `radius` of `(x, y)`.
    #[must_use]
    pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<&NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.position.distance_to(x, y) < radius)
            .map(|(id, _)| id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[NodeId]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_example_is_valid() {
        let graph = GraphModel::example();
        assert!(graph.validate().is_ok());
        assert_eq!(graph.len(), 6);
        assert_eq!(
            graph.nodes().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "E", "F"]
        );
    }

    #[test]
    fn test_neighbors_in_adjacency_order() {
        let graph = GraphModel::example();
        assert_eq!(ids(graph.neighbors("A").expect("A exists")), vec!["B", "C"]);
        assert!(graph.neighbors("D").expect("D exists").is_empty());
    }

    #[test]
    fn test_unknown_node_lookup_fails() {
        let graph = GraphModel::example();
        assert!(matches!(
            graph.neighbors("Z"),
            Err(VizError::NodeNotFound { .. })
        ));
        assert!(graph.position("Z").is_err());
    }

    #[test]
    fn test_position() {
        let graph = GraphModel::example();
        assert_eq!(
            graph.position("E").expect("E exists"),
            Position::new(250.0, 280.0)
        );
    }

    #[test]
    fn test_edges() {
        let graph = GraphModel::example();
        let edges: Vec<(&str, &str)> = graph
            .edges()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(edges.len(), 6);
        assert!(edges.contains(&("E", "F")));
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let result = GraphModel::new([(
            "A".to_string(),
            Position::new(0.0, 0.0),
            vec!["Q".to_string()],
        )]);
        assert!(matches!(result, Err(VizError::DanglingEdge { .. })));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let node = ("A".to_string(), Position::new(0.0, 0.0), Vec::new());
        let result = GraphModel::new([node.clone(), node]);
        assert!(matches!(result, Err(VizError::Config { .. })));
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert!(GraphModel::new(Vec::new()).is_err());
    }

    #[test]
    fn test_node_at_hit_test() {
        let graph = GraphModel::example();
        assert_eq!(
            graph.node_at(305.0, 70.0, DEFAULT_HIT_RADIUS).map(String::as_str),
            Some("A")
        );
        assert!(graph.node_at(0.0, 0.0, DEFAULT_HIT_RADIUS).is_none());
        // Exactly on the radius is a miss.
        assert!(graph.node_at(325.0, 60.0, DEFAULT_HIT_RADIUS).is_none());
    }
}
