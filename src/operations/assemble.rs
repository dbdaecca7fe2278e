//! The bundle-list assembly pipeline
//!
//! A strictly linear run with one conditional branch:
//! merge → interpolate → write descriptor → (stage → archive → register
//! archive, when any configuration input is present) → register descriptor.
//! Any failure is terminal; nothing is retried.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::archive;
use crate::artifact::{
    ARCHIVE_CLASSIFIER, ARCHIVE_TYPE, ArtifactRegistry, DESCRIPTOR_TYPE, REGISTRY_FILE,
};
use crate::assembly::{ConfigInputs, StagingPlan};
use crate::descriptor::{BundleList, codec};
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::project::ProjectManifest;
use crate::properties::{PropertyContext, interpolate_bundle_list};

/// Descriptor output filename
pub const DESCRIPTOR_FILE: &str = "bundles.yaml";

/// Staged configuration tree directory name
pub const STAGE_DIR: &str = "bundle-config";

/// One assembly run's inputs, fully resolved
#[derive(Debug)]
pub struct AssembleRequest {
    /// Existing descriptor input (optional on disk)
    pub bundle_list_path: PathBuf,

    /// Project manifest path (optional on disk)
    pub manifest_path: PathBuf,

    /// Output directory for descriptor, staged tree, archive, and registry
    pub output_dir: PathBuf,

    /// The seven optional configuration inputs
    pub config_inputs: ConfigInputs,

    /// Skip configuration packaging even when inputs are present
    pub skip_config: bool,

    /// Session property overrides (`--define`)
    pub defines: BTreeMap<String, String>,

    /// Show a progress bar while staging
    pub show_progress: bool,
}

/// Summary of a completed assembly run
#[derive(Debug)]
pub struct AssembleOutputs {
    /// Where the descriptor was written
    pub descriptor_path: PathBuf,

    /// Where the archive was written, when packaging ran
    pub archive_path: Option<PathBuf>,

    /// Where the registry manifest was written
    pub registry_path: PathBuf,

    /// Entries added by the merge
    pub merged: usize,

    /// Entries in the final descriptor
    pub total_entries: usize,

    /// Configuration copies staged
    pub staged_copies: usize,
}

/// Run the assembly pipeline
pub fn run(request: &AssembleRequest) -> Result<AssembleOutputs> {
    let manifest = ProjectManifest::load_or_default(&request.manifest_path)?;

    let mut bundle_list = if request.bundle_list_path.exists() {
        codec::read(&request.bundle_list_path)?
    } else {
        BundleList::new()
    };

    let merged = bundle_list.merge(&manifest.bundles, manifest.default_start_level());

    let context = property_context(&manifest, &request.defines);
    interpolate_bundle_list(&mut bundle_list, &context);

    let descriptor_path = request.output_dir.join(DESCRIPTOR_FILE);
    codec::write(&descriptor_path, &bundle_list)?;

    let mut registry = ArtifactRegistry::new();
    let (archive_path, staged_copies) = if request.skip_config {
        (None, 0)
    } else {
        package_configuration(request, &mut registry)?
    };

    registry.register_primary(&descriptor_path, DESCRIPTOR_TYPE);

    let registry_path = request.output_dir.join(REGISTRY_FILE);
    registry.write(&registry_path)?;

    Ok(AssembleOutputs {
        descriptor_path,
        archive_path,
        registry_path,
        merged,
        total_entries: bundle_list.entry_count(),
        staged_copies,
    })
}

/// Stage present configuration inputs and archive the staged tree
///
/// Returns without touching the filesystem when no input is present.
fn package_configuration(
    request: &AssembleRequest,
    registry: &mut ArtifactRegistry,
) -> Result<(Option<PathBuf>, usize)> {
    let plan = StagingPlan::build(&request.config_inputs);
    if plan.is_empty() {
        return Ok((None, 0));
    }

    let stage_root = request.output_dir.join(STAGE_DIR);
    stage_with_progress(&plan, &stage_root, request.show_progress)?;

    let archive_path = request.output_dir.join(format!("{STAGE_DIR}.zip"));
    archive::create_archive(&stage_root, &archive_path)?;

    registry.attach(&archive_path, ARCHIVE_TYPE, ARCHIVE_CLASSIFIER);
    Ok((Some(archive_path), plan.copy_count()))
}

fn stage_with_progress(plan: &StagingPlan, stage_root: &Path, show_progress: bool) -> Result<()> {
    if !show_progress {
        return plan.apply(stage_root, |_| {});
    }

    let progress = ProgressDisplay::new(plan.copy_count() as u64);
    let result = plan.apply(stage_root, |copy| {
        progress.update(&copy.dest.display().to_string());
    });

    match &result {
        Ok(()) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    result
}

/// Build the layered property context for one run
///
/// Source order (later shadows earlier): project metadata, manifest
/// properties, session overrides.
fn property_context(
    manifest: &ProjectManifest,
    defines: &BTreeMap<String, String>,
) -> PropertyContext {
    let mut context = PropertyContext::new();

    let mut project = BTreeMap::new();
    if !manifest.name.is_empty() {
        project.insert("project.name".to_string(), manifest.name.clone());
    }
    if !manifest.version.is_empty() {
        project.insert("project.version".to_string(), manifest.version.clone());
    }
    context.push_source("project", project);
    context.push_source("manifest", manifest.properties.clone());
    context.push_source("session", defines.clone());

    context
}
