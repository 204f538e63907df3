use crate::domain::scan::ScanDocument;
use crate::domain::topology::Topology;
use std::path::Path;

pub trait ScanParser {
    fn parse(&self, xml: &str) -> anyhow::Result<ScanDocument>;
}

pub trait TopologyBuilder {
    fn build_topology(&self, doc: &ScanDocument) -> Topology;
}

pub trait TopologyExporter {
    fn export(&self, topology: &Topology, path: &Path) -> std::io::Result<()>;
}
