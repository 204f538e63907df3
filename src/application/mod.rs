use crate::infrastructure::{DotExporter, HopPathBuilder, RoxmlScanParser};
use crate::ports::{ScanParser, TopologyBuilder, TopologyExporter};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Where the CLI writes the topology.
pub const DEFAULT_OUTPUT: &str = "out.dot";

pub const NO_TRACE_MESSAGE: &str =
    "no trace information; re-run the nmap scan with the --traceroute option";

/// Result of a conversion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    Written { nodes: usize, edges: usize },
    /// The scan holds no trace elements; nothing was written.
    NoTraceData,
}

pub struct ConvertUsecase<'a> {
    pub parser: &'a dyn ScanParser,
    pub builder: &'a dyn TopologyBuilder,
    pub exporter: &'a dyn TopologyExporter,
}

impl Default for ConvertUsecase<'static> {
    fn default() -> Self {
        Self {
            parser: &RoxmlScanParser,
            builder: &HopPathBuilder,
            exporter: &DotExporter,
        }
    }
}

impl<'a> ConvertUsecase<'a> {
    pub fn run(&self, xml: &str, export_path: &Path) -> Result<ConvertOutcome> {
        let doc = self.parser.parse(xml)?;
        if !doc.has_trace_data() {
            return Ok(ConvertOutcome::NoTraceData);
        }
        info!(
            hosts = doc.hosts.len(),
            traced = doc.traced_hosts().count(),
            "scan loaded"
        );

        let topology = self.builder.build_topology(&doc);
        self.exporter
            .export(&topology, export_path)
            .with_context(|| format!("Failed to write {}", export_path.display()))?;

        Ok(ConvertOutcome::Written {
            nodes: topology.node_count(),
            edges: topology.edge_count(),
        })
    }
}
