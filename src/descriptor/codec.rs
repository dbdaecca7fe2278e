//! Descriptor codec
//!
//! The read/write interface for the bundle list file. The serialization
//! format (YAML) stays an implementation detail of this module; the rest of
//! the pipeline only sees [`BundleList`] values.

use std::fs;
use std::path::Path;

use crate::descriptor::BundleList;
use crate::error::{Result, descriptor_parse_failed, descriptor_read_failed, descriptor_write_failed};

/// Read a descriptor file
pub fn read(path: &Path) -> Result<BundleList> {
    let content = fs::read_to_string(path)
        .map_err(|e| descriptor_read_failed(path.display().to_string(), e))?;

    serde_yaml::from_str(&content)
        .map_err(|e| descriptor_parse_failed(path.display().to_string(), e))
}

/// Write a descriptor file, creating parent directories as needed
pub fn write(path: &Path, list: &BundleList) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| descriptor_write_failed(path.display().to_string(), e))?;
    }

    let yaml = serde_yaml::to_string(list)
        .map_err(|e| descriptor_write_failed(path.display().to_string(), e))?;

    fs::write(path, yaml).map_err(|e| descriptor_write_failed(path.display().to_string(), e))
}
