// Scan data structures for hopdot.
// These types represent a parsed nmap scan, reduced to what the hop topology needs.

use std::fmt;

/// Identity of the synthetic node every first hop hangs off.
pub const ROOT_NODE: &str = "scanner";

/// A parsed scan document.
#[derive(Debug, Default, Clone)]
pub struct ScanDocument {
    /// Hosts in document order
    pub hosts: Vec<Host>,
    /// Number of `trace` elements anywhere in the document
    pub trace_elements: usize,
}

impl ScanDocument {
    /// True when the scan was run with traceroute enabled.
    pub fn has_trace_data(&self) -> bool {
        self.trace_elements > 0
    }

    /// Hosts that carry a trace.
    pub fn traced_hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().filter(|h| h.trace.is_some())
    }
}

/// A scanned host.
#[derive(Debug, Default, Clone)]
pub struct Host {
    pub address: Option<String>,
    pub trace: Option<Trace>,
}

/// Ordered hop records of one host.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    pub hops: Vec<Hop>,
}

/// One traceroute step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub ttl: Option<u32>,
    pub ipaddr: String,
    pub host: Option<String>, // reverse-DNS name, never empty
}

impl Hop {
    pub fn new(ttl: u32, ipaddr: &str, host: Option<&str>) -> Self {
        Self {
            ttl: Some(ttl),
            ipaddr: ipaddr.to_string(),
            host: host.filter(|h| !h.is_empty()).map(str::to_string),
        }
    }

    /// First hop out of the scanner.
    pub fn is_first(&self) -> bool {
        self.ttl == Some(1)
    }

    /// Node identity: `ipaddr`, or `ipaddr_host` when the hop was resolved.
    pub fn identity(&self) -> NodeId {
        match &self.host {
            Some(name) => NodeId(format!("{}_{}", self.ipaddr, name)),
            None => NodeId(self.ipaddr.clone()),
        }
    }
}

/// Deduplication key of a topology node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn root() -> Self {
        NodeId(ROOT_NODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}
