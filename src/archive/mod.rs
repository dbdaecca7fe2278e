//! Archive packaging
//!
//! Compresses a staged output tree into a single zip file with entry paths
//! relative to the tree root. Member ordering inherits filesystem iteration
//! order. Any I/O error aborts packaging; the staged tree is left in place.

use std::fs::File;
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{LaunchpackError, Result, archive_failed};

/// Compress `tree_root` into a zip archive at `dest`
///
/// An existing archive at `dest` is overwritten.
pub fn create_archive(tree_root: &Path, dest: &Path) -> Result<()> {
    let fail = |e: &dyn std::fmt::Display| -> LaunchpackError {
        archive_failed(dest.display().to_string(), e)
    };

    let file = File::create(dest).map_err(|e| fail(&e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(tree_root) {
        let entry = entry.map_err(|e| fail(&e))?;
        let rel_path = entry
            .path()
            .strip_prefix(tree_root)
            .map_err(|e| fail(&e))?;

        let Some(name) = entry_name(rel_path) else {
            continue; // the tree root itself
        };

        if entry.file_type().is_dir() {
            writer.add_directory(name, options).map_err(|e| fail(&e))?;
        } else {
            writer.start_file(name, options).map_err(|e| fail(&e))?;
            let mut source = File::open(entry.path()).map_err(|e| fail(&e))?;
            io::copy(&mut source, &mut writer).map_err(|e| fail(&e))?;
        }
    }

    writer.finish().map_err(|e| fail(&e))?;
    Ok(())
}

/// Forward-slash entry name relative to the tree root
///
/// Returns `None` for the empty (root) path.
fn entry_name(rel_path: &Path) -> Option<String> {
    let name = rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if name.is_empty() { None } else { Some(name) }
}
