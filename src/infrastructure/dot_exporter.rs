//! DOT Exporter
//!
//! Exports a hop Topology as a Graphviz `strict digraph`.

use crate::domain::scan::NodeId;
use crate::domain::topology::Topology;
use crate::ports::TopologyExporter;
use std::path::Path;
use tracing::info;

pub struct DotExporter;

impl TopologyExporter for DotExporter {
    fn export(&self, topology: &Topology, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, Self::to_dot(topology))?;
        info!(path = %path.display(), "wrote DOT topology");
        Ok(())
    }
}

impl DotExporter {
    /// Convert a Topology to DOT text.
    pub fn to_dot(topology: &Topology) -> String {
        let mut lines = Vec::new();

        lines.push("strict digraph topology {".to_string());

        for node in topology.nodes() {
            lines.push(format!("    {};", Self::quote(node)));
        }

        for edge in topology.edges() {
            lines.push(format!(
                "    {} -> {};",
                Self::quote(&edge.from),
                Self::quote(&edge.to)
            ));
        }

        lines.push("}".to_string());

        let mut dot = lines.join("\n");
        dot.push('\n');
        dot
    }

    fn quote(id: &NodeId) -> String {
        let escaped = id.as_str().replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}
