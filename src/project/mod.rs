//! Project manifest (launchpack.yaml)
//!
//! The manifest supplies the build context for an assembly run: project
//! metadata, free-form properties, and the dependency coordinates discovered
//! for the bundle list. A missing manifest is equivalent to an empty one.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::BundleCoordinate;
use crate::error::{LaunchpackError, Result};

/// Project manifest filename
pub const MANIFEST_FILE: &str = "launchpack.yaml";

/// Start level used for coordinates that do not name one
pub const DEFAULT_START_LEVEL: i32 = 20;

/// Project manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Project name
    #[serde(default)]
    pub name: String,

    /// Project version
    #[serde(default)]
    pub version: String,

    /// Start level for coordinates without an explicit one
    #[serde(
        rename = "default-start-level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_start_level: Option<i32>,

    /// Free-form properties available to interpolation
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    /// Discovered dependency coordinates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<BundleCoordinate>,
}

impl ProjectManifest {
    /// Parse a manifest from YAML text and validate its coordinates
    #[allow(dead_code)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self =
            serde_yaml::from_str(yaml).map_err(|e| LaunchpackError::ManifestParseFailed {
                path: MANIFEST_FILE.to_string(),
                reason: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest file; a missing file yields the empty manifest
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| LaunchpackError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let manifest: Self =
            serde_yaml::from_str(&content).map_err(|e| LaunchpackError::ManifestParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate every declared coordinate
    pub fn validate(&self) -> Result<()> {
        for coordinate in &self.bundles {
            coordinate.validate()?;
        }
        Ok(())
    }

    /// Effective default start level
    pub fn default_start_level(&self) -> i32 {
        self.default_start_level.unwrap_or(DEFAULT_START_LEVEL)
    }
}
