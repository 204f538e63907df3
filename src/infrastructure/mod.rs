// Infrastructure implementations for hopdot.

pub mod dot_exporter;
pub mod json_exporter;
pub mod scan_loader;

pub use dot_exporter::DotExporter;
pub use json_exporter::JsonExporter;
pub use scan_loader::ScanLoader;

use crate::domain::scan::{Hop, Host, NodeId, ScanDocument, Trace};
use crate::domain::topology::Topology;
use crate::ports::{ScanParser, TopologyBuilder};
use anyhow::{Context, Result};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, info};

/// Parses nmap XML with roxmltree.
pub struct RoxmlScanParser;

impl ScanParser for RoxmlScanParser {
    fn parse(&self, xml: &str) -> Result<ScanDocument> {
        // nmap writes `<!DOCTYPE nmaprun>`, which roxmltree rejects by default
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = Document::parse_with_options(xml, options).context("Failed to parse scan XML")?;
        let root = doc.root_element();

        // descendants() yields the root itself first
        let trace_elements = root
            .descendants()
            .skip(1)
            .filter(|n| n.has_tag_name("trace"))
            .count();

        let hosts = root
            .descendants()
            .skip(1)
            .filter(|n| n.has_tag_name("host"))
            .enumerate()
            .map(|(i, node)| Self::parse_host(node, i))
            .collect::<Result<Vec<_>>>()?;

        debug!(hosts = hosts.len(), trace_elements, "parsed scan document");

        Ok(ScanDocument {
            hosts,
            trace_elements,
        })
    }
}

impl RoxmlScanParser {
    fn parse_host(node: Node<'_, '_>, index: usize) -> Result<Host> {
        let address = node
            .children()
            .find(|c| c.has_tag_name("address"))
            .and_then(|a| a.attribute("addr"))
            .map(str::to_string);

        let trace = match node.children().find(|c| c.has_tag_name("trace")) {
            Some(trace) => Some(Self::parse_trace(trace).with_context(|| {
                format!(
                    "Invalid trace for host #{} ({})",
                    index,
                    address.as_deref().unwrap_or("no address")
                )
            })?),
            None => None,
        };

        Ok(Host { address, trace })
    }

    fn parse_trace(node: Node<'_, '_>) -> Result<Trace> {
        let hops = node
            .children()
            .filter(|c| c.has_tag_name("hop"))
            .enumerate()
            .map(|(i, hop)| Self::parse_hop(hop).with_context(|| format!("hop #{}", i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Trace { hops })
    }

    fn parse_hop(node: Node<'_, '_>) -> Result<Hop> {
        let ipaddr = node
            .attribute("ipaddr")
            .context("Hop missing ipaddr attribute")?;
        let ttl = node
            .attribute("ttl")
            .map(|t| {
                t.parse::<u32>()
                    .with_context(|| format!("Failed to parse hop ttl {:?} as u32", t))
            })
            .transpose()?;
        let host = node
            .attribute("host")
            .filter(|h| !h.is_empty())
            .map(str::to_string);

        Ok(Hop {
            ttl,
            ipaddr: ipaddr.to_string(),
            host,
        })
    }
}

/// Builds the hop topology by walking every trace with a shared cursor.
pub struct HopPathBuilder;

impl HopPathBuilder {
    /// Add one host's hops to the topology and return the advanced cursor.
    ///
    /// A host without a trace leaves both the topology and the cursor untouched.
    pub fn walk_host(topology: &mut Topology, host: &Host, cursor: NodeId) -> NodeId {
        let Some(trace) = &host.trace else {
            debug!(
                address = host.address.as_deref().unwrap_or("?"),
                "host has no trace, skipped"
            );
            return cursor;
        };

        trace.hops.iter().fold(cursor, |cursor, hop| {
            let id = hop.identity();
            let from = if hop.is_first() { NodeId::root() } else { cursor };
            topology.add_edge(&from, &id);
            id
        })
    }
}

impl TopologyBuilder for HopPathBuilder {
    fn build_topology(&self, doc: &ScanDocument) -> Topology {
        let mut topology = Topology::new();
        let cursor = doc
            .hosts
            .iter()
            .fold(NodeId::root(), |cursor, host| {
                Self::walk_host(&mut topology, host, cursor)
            });

        info!(
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            last = %cursor,
            "built hop topology"
        );
        topology
    }
}
