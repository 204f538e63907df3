//! Hop Topology
//!
//! Directed graph of network hops rooted at the scanner node.

use crate::domain::scan::NodeId;
use std::collections::HashSet;

/// A directed edge between two hop nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopologyEdge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
}

/// Directed hop graph with set semantics for nodes and edges.
///
/// Insertion order is kept so that the rendered output is deterministic.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: Vec<NodeId>,
    edges: Vec<TopologyEdge>,
    seen_nodes: HashSet<NodeId>,
    seen_edges: HashSet<TopologyEdge>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology {
    /// Create a topology holding only the root node.
    pub fn new() -> Self {
        let mut topology = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            seen_nodes: HashSet::new(),
            seen_edges: HashSet::new(),
        };
        topology.add_node(NodeId::root());
        topology
    }

    /// Add a node. Returns false if it already existed.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.seen_nodes.contains(&id) {
            return false;
        }
        self.seen_nodes.insert(id.clone());
        self.nodes.push(id);
        true
    }

    /// Add an edge, creating missing endpoints. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId) -> bool {
        let edge = TopologyEdge {
            from: from.clone(),
            to: to.clone(),
        };
        if self.seen_edges.contains(&edge) {
            return false;
        }
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.seen_edges.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.seen_nodes.contains(&NodeId::from(id))
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.seen_edges.contains(&TopologyEdge {
            from: NodeId::from(from),
            to: NodeId::from(to),
        })
    }

    /// Nodes in first-seen order, root first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in first-seen order.
    pub fn edges(&self) -> &[TopologyEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
