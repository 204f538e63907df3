use crate::api::dto::TopologyDto;
use crate::domain::topology::Topology;
use crate::ports::TopologyExporter;
use std::path::Path;

/// Writes the topology as pretty-printed JSON.
pub struct JsonExporter;

impl TopologyExporter for JsonExporter {
    fn export(&self, topology: &Topology, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&TopologyDto::from(topology))?;
        std::fs::write(path, json)
    }
}
