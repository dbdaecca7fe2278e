//! Artifact registry
//!
//! Records the files produced by an assembly run as named, typed build
//! outputs: one primary slot for the descriptor, plus attachment slots keyed
//! by (type, classifier). Registering into an occupied slot overwrites it.
//! The registry is persisted as a JSON manifest so downstream tooling can
//! locate the outputs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchpackError, Result};

/// Registry manifest filename
pub const REGISTRY_FILE: &str = "artifacts.json";

/// Artifact type of the primary descriptor output
pub const DESCRIPTOR_TYPE: &str = "bundle-list";

/// Artifact type of the configuration archive
pub const ARCHIVE_TYPE: &str = "zip";

/// Classifier of the configuration archive
pub const ARCHIVE_CLASSIFIER: &str = "config";

/// One registered build output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredArtifact {
    /// Path of the produced file
    pub path: String,

    /// Artifact type
    #[serde(rename = "type")]
    pub artifact_type: String,

    /// Classifier distinguishing secondary outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

/// Build output registry for one assembly run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRegistry {
    /// The build's primary output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary: Option<RegisteredArtifact>,

    /// Secondary outputs keyed by (type, classifier)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<RegisteredArtifact>,
}

impl ArtifactRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the primary output, replacing any previous one
    pub fn register_primary(&mut self, path: &Path, artifact_type: &str) {
        self.primary = Some(RegisteredArtifact {
            path: path.display().to_string(),
            artifact_type: artifact_type.to_string(),
            classifier: None,
        });
    }

    /// Attach a secondary output
    ///
    /// An attachment with the same (type, classifier) is replaced, not
    /// duplicated.
    pub fn attach(&mut self, path: &Path, artifact_type: &str, classifier: &str) {
        let artifact = RegisteredArtifact {
            path: path.display().to_string(),
            artifact_type: artifact_type.to_string(),
            classifier: Some(classifier.to_string()),
        };

        match self.attachments.iter_mut().find(|a| {
            a.artifact_type == artifact.artifact_type && a.classifier == artifact.classifier
        }) {
            Some(slot) => *slot = artifact,
            None => self.attachments.push(artifact),
        }
    }

    /// The primary output, if registered
    #[allow(dead_code)]
    pub fn primary(&self) -> Option<&RegisteredArtifact> {
        self.primary.as_ref()
    }

    /// All secondary outputs
    #[allow(dead_code)]
    pub fn attachments(&self) -> &[RegisteredArtifact] {
        &self.attachments
    }

    /// Parse a registry from JSON text
    #[allow(dead_code)]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LaunchpackError::RegistryWriteFailed {
            path: REGISTRY_FILE.to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the registry manifest, creating parent directories as needed
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            LaunchpackError::RegistryWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LaunchpackError::RegistryWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        fs::write(path, json).map_err(|e| LaunchpackError::RegistryWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_register_primary_overwrites() {
        let mut registry = ArtifactRegistry::new();
        registry.register_primary(&PathBuf::from("dist/old.yaml"), DESCRIPTOR_TYPE);
        registry.register_primary(&PathBuf::from("dist/bundles.yaml"), DESCRIPTOR_TYPE);

        let primary = registry.primary().unwrap();
        assert_eq!(primary.path, "dist/bundles.yaml");
        assert_eq!(primary.classifier, None);
    }

    #[test]
    fn test_attach_same_slot_overwrites() {
        let mut registry = ArtifactRegistry::new();
        registry.attach(&PathBuf::from("dist/a.zip"), ARCHIVE_TYPE, ARCHIVE_CLASSIFIER);
        registry.attach(&PathBuf::from("dist/b.zip"), ARCHIVE_TYPE, ARCHIVE_CLASSIFIER);

        assert_eq!(registry.attachments().len(), 1);
        assert_eq!(registry.attachments()[0].path, "dist/b.zip");
    }

    #[test]
    fn test_attach_distinct_slots_accumulate() {
        let mut registry = ArtifactRegistry::new();
        registry.attach(&PathBuf::from("dist/a.zip"), ARCHIVE_TYPE, ARCHIVE_CLASSIFIER);
        registry.attach(&PathBuf::from("dist/sources.zip"), ARCHIVE_TYPE, "sources");

        assert_eq!(registry.attachments().len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut registry = ArtifactRegistry::new();
        registry.register_primary(&PathBuf::from("dist/bundles.yaml"), DESCRIPTOR_TYPE);
        registry.attach(
            &PathBuf::from("dist/bundle-config.zip"),
            ARCHIVE_TYPE,
            ARCHIVE_CLASSIFIER,
        );

        let json = serde_json::to_string_pretty(&registry).unwrap();
        let parsed = ArtifactRegistry::from_json(&json).unwrap();
        assert_eq!(parsed, registry);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("dist/artifacts.json");

        let mut registry = ArtifactRegistry::new();
        registry.register_primary(&PathBuf::from("dist/bundles.yaml"), DESCRIPTOR_TYPE);
        registry.write(&path).unwrap();

        let read_back = ArtifactRegistry::from_json(&std::fs::read_to_string(&path).unwrap())
            .unwrap();
        assert_eq!(read_back, registry);
    }
}
