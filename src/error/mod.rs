//! Error types and handling for Launchpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into four groups mirroring the pipeline stages: descriptor
//! read/parse errors abort before any mutation, descriptor/registry write
//! errors abort the failing step, staging errors abort configuration
//! assembly, and archive errors abort packaging while leaving the staged
//! tree on disk for diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Launchpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum LaunchpackError {
    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(launchpack::workspace::not_found),
        help("Run from the project directory or pass --workspace")
    )]
    WorkspaceNotFound { path: String },

    // Manifest errors
    #[error("Failed to read project manifest: {path}")]
    #[diagnostic(code(launchpack::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse project manifest: {path}")]
    #[diagnostic(
        code(launchpack::manifest::parse_failed),
        help("Check launchpack.yaml against the documented schema")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Bundle validation failed: {message}")]
    #[diagnostic(code(launchpack::manifest::validation_failed))]
    BundleValidationFailed { message: String },

    // Descriptor errors
    #[error("Failed to read bundle list: {path}")]
    #[diagnostic(code(launchpack::descriptor::read_failed))]
    DescriptorReadFailed { path: String, reason: String },

    #[error("Failed to parse bundle list: {path}")]
    #[diagnostic(
        code(launchpack::descriptor::parse_failed),
        help("The bundle list must be a YAML document with a start-levels sequence")
    )]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Failed to write bundle list: {path}")]
    #[diagnostic(code(launchpack::descriptor::write_failed))]
    DescriptorWriteFailed { path: String, reason: String },

    // Configuration packaging errors
    #[error("Failed to stage configuration: {path}")]
    #[diagnostic(code(launchpack::assembly::staging_failed))]
    ConfigStagingFailed { path: String, reason: String },

    #[error("Failed to create configuration archive: {path}")]
    #[diagnostic(
        code(launchpack::archive::creation_failed),
        help("The staged tree is left in place for inspection")
    )]
    ArchiveCreationFailed { path: String, reason: String },

    // Artifact registry errors
    #[error("Failed to write artifact manifest: {path}")]
    #[diagnostic(code(launchpack::artifact::write_failed))]
    RegistryWriteFailed { path: String, reason: String },

    // CLI errors
    #[error("Invalid property definition: {value}")]
    #[diagnostic(
        code(launchpack::cli::invalid_define),
        help("Property definitions use the form KEY=VALUE")
    )]
    InvalidDefine { value: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(launchpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for LaunchpackError {
    fn from(err: std::io::Error) -> Self {
        LaunchpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LaunchpackError {
    fn from(err: serde_yaml::Error) -> Self {
        LaunchpackError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LaunchpackError {
    fn from(err: serde_json::Error) -> Self {
        LaunchpackError::RegistryWriteFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Creates a descriptor read error from a path and cause
pub fn descriptor_read_failed(
    path: impl Into<String>,
    reason: impl ToString,
) -> LaunchpackError {
    LaunchpackError::DescriptorReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a descriptor parse error from a path and cause
pub fn descriptor_parse_failed(
    path: impl Into<String>,
    reason: impl ToString,
) -> LaunchpackError {
    LaunchpackError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a descriptor write error from a path and cause
pub fn descriptor_write_failed(
    path: impl Into<String>,
    reason: impl ToString,
) -> LaunchpackError {
    LaunchpackError::DescriptorWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a staging error from a path and cause
pub fn staging_failed(path: impl Into<String>, reason: impl ToString) -> LaunchpackError {
    LaunchpackError::ConfigStagingFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an archive creation error from a path and cause
pub fn archive_failed(path: impl Into<String>, reason: impl ToString) -> LaunchpackError {
    LaunchpackError::ArchiveCreationFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LaunchpackError>;
