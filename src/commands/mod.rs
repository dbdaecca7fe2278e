//! Command implementations

pub mod assemble;
pub mod completions;
pub mod show;
pub mod version;

use std::path::{Path, PathBuf};

use crate::error::{LaunchpackError, Result};

/// Resolve the workspace root from the global flag or the current directory
pub fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let root = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| LaunchpackError::WorkspaceNotFound {
            path: format!("Failed to get current directory: {}", e),
        })?,
    };

    if !root.is_dir() {
        return Err(LaunchpackError::WorkspaceNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(root)
}

/// Resolve a possibly-relative path against the workspace root
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
