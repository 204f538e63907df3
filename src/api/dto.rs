use serde::{Serialize, Deserialize};
use crate::domain::topology::Topology;

#[derive(Debug, Serialize, Deserialize)]
pub struct TopologyDto {
    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub root: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeDto {
    pub from: String,
    pub to: String,
}

impl From<&Topology> for TopologyDto {
    fn from(topology: &Topology) -> Self {
        let nodes = topology
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, n)| NodeDto {
                id: n.to_string(),
                root: i == 0, // Topology::new() inserts the root first
            })
            .collect();

        let edges = topology
            .edges()
            .iter()
            .map(|e| EdgeDto {
                from: e.from.to_string(),
                to: e.to.to_string(),
            })
            .collect();

        TopologyDto { nodes, edges }
    }
}
