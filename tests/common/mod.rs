//! Common test utilities for Launchpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a directory in workspace
    pub fn create_dir(&self, path: &str) {
        std::fs::create_dir_all(self.path.join(path)).expect("Failed to create directory");
    }

    /// File names (not directories) inside the archive at `path`
    pub fn archive_file_names(&self, path: &str) -> Vec<String> {
        let file = std::fs::File::open(self.path.join(path)).expect("Failed to open archive");
        let mut zip = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut names: Vec<String> = (0..zip.len())
            .map(|i| {
                zip.by_index(i)
                    .expect("Failed to read archive entry")
                    .name()
                    .to_string()
            })
            .filter(|n| !n.ends_with('/'))
            .collect();
        names.sort();
        names
    }
}

/// Write a manifest with one bundle coordinate targeting start level 10
#[allow(dead_code)]
pub fn write_simple_manifest(workspace: &TestWorkspace) {
    workspace.write_file(
        "launchpack.yaml",
        r#"
name: test-app
version: "1.0"
properties:
  engine.version: "2.4.0"
bundles:
  - group: org.example
    artifact: engine
    version: ${engine.version}
    start-level: 10
"#,
    );
}
