//! Bundle entry and dependency coordinate types
//!
//! A `BundleEntry` is one line of the bundle list descriptor. A
//! `BundleCoordinate` is a dependency discovered from the project manifest
//! that has not been folded into a descriptor yet.

use serde::{Deserialize, Serialize};

use crate::error::{LaunchpackError, Result};

/// A single bundle in the descriptor
///
/// Identity within a start level is (group, artifact).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEntry {
    /// Group id
    pub group: String,

    /// Artifact id
    pub artifact: String,

    /// Version (may contain `${...}` placeholders until interpolation)
    pub version: String,

    /// Comma-separated run modes this bundle is restricted to
    #[serde(rename = "run-modes", default, skip_serializing_if = "Option::is_none")]
    pub run_modes: Option<String>,

    /// Per-entry start level override
    #[serde(
        rename = "start-level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_level: Option<i32>,
}

impl BundleEntry {
    /// Create a new entry with no run modes and no override
    #[allow(dead_code)]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            run_modes: None,
            start_level: None,
        }
    }

    /// Check whether this entry has the given (group, artifact) identity
    pub fn matches(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }
}

/// A dependency coordinate declared in the project manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleCoordinate {
    /// Group id
    pub group: String,

    /// Artifact id
    pub artifact: String,

    /// Version
    pub version: String,

    /// Target start level (project default when absent)
    #[serde(
        rename = "start-level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_level: Option<i32>,

    /// Comma-separated run modes
    #[serde(rename = "run-modes", default, skip_serializing_if = "Option::is_none")]
    pub run_modes: Option<String>,
}

impl BundleCoordinate {
    /// Create a new coordinate targeting the default start level
    #[allow(dead_code)]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            start_level: None,
            run_modes: None,
        }
    }

    /// Create a new coordinate targeting an explicit start level
    #[allow(dead_code)]
    pub fn at_level(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        level: i32,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            start_level: Some(level),
            run_modes: None,
        }
    }

    /// Validate coordinate fields
    pub fn validate(&self) -> Result<()> {
        if self.group.is_empty() || self.artifact.is_empty() {
            return Err(LaunchpackError::BundleValidationFailed {
                message: "Bundle group and artifact cannot be empty".to_string(),
            });
        }

        if self.version.is_empty() {
            return Err(LaunchpackError::BundleValidationFailed {
                message: format!(
                    "Bundle '{}:{}' must have a version",
                    self.group, self.artifact
                ),
            });
        }

        Ok(())
    }

    /// Convert into a descriptor entry
    ///
    /// The target start level becomes the containing group, so the entry
    /// itself carries no override.
    pub fn into_entry(self) -> BundleEntry {
        BundleEntry {
            group: self.group,
            artifact: self.artifact,
            version: self.version,
            run_modes: self.run_modes,
            start_level: None,
        }
    }
}
