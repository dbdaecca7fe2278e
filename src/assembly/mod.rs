//! Configuration assembly
//!
//! Walks the named configuration inputs (per-environment property files,
//! bootstrap scripts, a free-form config directory) and stages copies of the
//! present ones into a namespaced output tree. The plan — every directory
//! and every copy — is computed before any filesystem mutation, so an
//! invocation with zero present inputs touches nothing.

use std::path::{Path, PathBuf};

use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::error::{Result, staging_failed};

/// Namespace directory for the named configuration files
pub const SLING_DIR: &str = "sling";

/// Namespace directory for the free-form config tree
pub const CONFIG_DIR: &str = "config";

/// Canonical staged filenames for the six named inputs
pub const COMMON_PROPERTIES: &str = "common.properties";
pub const COMMON_BOOTSTRAP: &str = "common.bootstrap.txt";
pub const WEBAPP_PROPERTIES: &str = "webapp.properties";
pub const WEBAPP_BOOTSTRAP: &str = "webapp.bootstrap.txt";
pub const STANDALONE_PROPERTIES: &str = "standalone.properties";
pub const STANDALONE_BOOTSTRAP: &str = "standalone.bootstrap.txt";

/// The seven optional configuration inputs, as resolved paths
///
/// Presence is existence on disk; no input is required.
#[derive(Debug, Clone)]
pub struct ConfigInputs {
    pub common_properties: PathBuf,
    pub common_bootstrap: PathBuf,
    pub webapp_properties: PathBuf,
    pub webapp_bootstrap: PathBuf,
    pub standalone_properties: PathBuf,
    pub standalone_bootstrap: PathBuf,
    pub config_dir: PathBuf,
}

impl ConfigInputs {
    /// The six named file inputs with their canonical staged filenames
    fn named_files(&self) -> [(&Path, &'static str); 6] {
        [
            (&self.common_properties, COMMON_PROPERTIES),
            (&self.common_bootstrap, COMMON_BOOTSTRAP),
            (&self.webapp_properties, WEBAPP_PROPERTIES),
            (&self.webapp_bootstrap, WEBAPP_BOOTSTRAP),
            (&self.standalone_properties, STANDALONE_PROPERTIES),
            (&self.standalone_bootstrap, STANDALONE_BOOTSTRAP),
        ]
    }
}

/// One planned copy into the staged tree
#[derive(Debug, Clone)]
pub struct PlannedCopy {
    /// Source path on disk
    pub source: PathBuf,

    /// Destination relative to the stage root
    pub dest: PathBuf,

    /// Whole-tree copy or single file
    pub kind: CopyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    File,
    Tree,
}

/// The staging plan: directories to create and copies to perform
///
/// Built entirely from existence checks before anything is written.
#[derive(Debug, Default)]
pub struct StagingPlan {
    /// Namespaced subdirectories, relative to the stage root
    dirs: Vec<PathBuf>,

    /// Copies in execution order
    copies: Vec<PlannedCopy>,
}

impl StagingPlan {
    /// Build a plan from the present configuration inputs
    pub fn build(inputs: &ConfigInputs) -> Self {
        let mut plan = Self::default();

        for (source, canonical) in inputs.named_files() {
            if source.is_file() {
                plan.push_dir(SLING_DIR);
                plan.copies.push(PlannedCopy {
                    source: source.to_path_buf(),
                    dest: Path::new(SLING_DIR).join(canonical),
                    kind: CopyKind::File,
                });
            }
        }

        if inputs.config_dir.is_dir() {
            plan.push_dir(CONFIG_DIR);
            plan.copies.push(PlannedCopy {
                source: inputs.config_dir.clone(),
                dest: PathBuf::from(CONFIG_DIR),
                kind: CopyKind::Tree,
            });
        }

        plan
    }

    fn push_dir(&mut self, dir: &str) {
        let dir = PathBuf::from(dir);
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    /// True when no configuration input is present
    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    /// Number of planned copies
    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    /// Directories this plan will create under the stage root
    #[allow(dead_code)]
    pub fn planned_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Execute the plan under the given stage root
    ///
    /// Directory creation is idempotent; an empty plan creates nothing, not
    /// even the stage root. `on_copy` is invoked after each completed copy.
    pub fn apply(&self, stage_root: &Path, mut on_copy: impl FnMut(&PlannedCopy)) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        for dir in &self.dirs {
            let path = stage_root.join(dir);
            std::fs::create_dir_all(&path)
                .map_err(|e| staging_failed(path.display().to_string(), e))?;
        }

        for copy in &self.copies {
            let dest = stage_root.join(&copy.dest);
            match copy.kind {
                CopyKind::File => {
                    std::fs::copy(&copy.source, &dest)
                        .map_err(|e| staging_failed(copy.source.display().to_string(), e))?;
                }
                CopyKind::Tree => {
                    copy_dir_recursive(&copy.source, &dest, CopyOptions::exclude_build_noise())
                        .map_err(|e| staging_failed(copy.source.display().to_string(), e))?;
                }
            }
            on_copy(copy);
        }

        Ok(())
    }
}
