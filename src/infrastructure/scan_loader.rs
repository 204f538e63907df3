use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

pub struct ScanLoader;

impl ScanLoader {
    /// Read an nmap XML scan file into memory.
    pub fn load(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read scan file {}", path.display()))
    }
}
