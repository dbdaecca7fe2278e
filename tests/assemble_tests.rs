//! Integration tests for the assemble pipeline

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn launchpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("launchpack").expect("binary under test");
    // Ignore any developer LAUNCHPACK_WORKSPACE overrides during tests
    cmd.env_remove("LAUNCHPACK_WORKSPACE");
    cmd
}

#[test]
fn test_assemble_empty_workspace_writes_descriptor_only() {
    let workspace = common::TestWorkspace::new();

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle list:"))
        .stdout(predicate::str::contains("nothing to package"));

    assert!(workspace.file_exists("dist/bundles.yaml"));
    assert!(workspace.file_exists("dist/artifacts.json"));
    assert!(!workspace.file_exists("dist/bundle-config"));
    assert!(!workspace.file_exists("dist/bundle-config.zip"));
}

#[test]
fn test_assemble_merges_manifest_bundles() {
    let workspace = common::TestWorkspace::new();
    common::write_simple_manifest(&workspace);

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 merged"));

    let descriptor = workspace.read_file("dist/bundles.yaml");
    assert!(descriptor.contains("level: 10"));
    assert!(descriptor.contains("artifact: engine"));
    // Placeholder resolved from the manifest properties
    assert!(descriptor.contains("2.4.0"));
    assert!(!descriptor.contains("${engine.version}"));
}

#[test]
fn test_assemble_existing_descriptor_keeps_original_version() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "bundles.yaml",
        "start-levels:\n  - level: 10\n    bundles:\n      - group: org.example\n        artifact: engine\n        version: \"1.0\"\n",
    );
    common::write_simple_manifest(&workspace);

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 merged"));

    let descriptor = workspace.read_file("dist/bundles.yaml");
    assert!(descriptor.contains("version: '1.0'") || descriptor.contains("version: \"1.0\""));
    assert!(!descriptor.contains("2.4.0"));
}

#[test]
fn test_assemble_define_overrides_manifest_property() {
    let workspace = common::TestWorkspace::new();
    common::write_simple_manifest(&workspace);

    launchpack_cmd()
        .current_dir(&workspace.path)
        .args(["assemble", "-D", "engine.version=9.9"])
        .assert()
        .success();

    let descriptor = workspace.read_file("dist/bundles.yaml");
    assert!(descriptor.contains("9.9"));
    assert!(!descriptor.contains("2.4.0"));
}

#[test]
fn test_assemble_unknown_placeholder_stays_literal() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "launchpack.yaml",
        r#"
bundles:
  - group: org.example
    artifact: engine
    version: ${undefined.key}
"#,
    );

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success();

    let descriptor = workspace.read_file("dist/bundles.yaml");
    assert!(descriptor.contains("${undefined.key}"));
}

#[test]
fn test_assemble_invalid_define_fails() {
    let workspace = common::TestWorkspace::new();

    launchpack_cmd()
        .current_dir(&workspace.path)
        .args(["assemble", "-D", "missing-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property definition"));
}

#[test]
fn test_assemble_malformed_descriptor_fails_before_writing() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("bundles.yaml", "start-levels: [unclosed");

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse bundle list"));

    assert!(!workspace.file_exists("dist/bundles.yaml"));
    assert!(!workspace.file_exists("dist/artifacts.json"));
}

#[test]
fn test_assemble_rerun_overwrites_outputs() {
    let workspace = common::TestWorkspace::new();
    common::write_simple_manifest(&workspace);

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success();
    let first = workspace.read_file("dist/bundles.yaml");

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success();
    let second = workspace.read_file("dist/bundles.yaml");

    assert_eq!(first, second);
}

#[test]
fn test_assemble_registry_lists_descriptor_as_primary() {
    let workspace = common::TestWorkspace::new();

    launchpack_cmd()
        .current_dir(&workspace.path)
        .arg("assemble")
        .assert()
        .success();

    let registry: serde_json::Value =
        serde_json::from_str(&workspace.read_file("dist/artifacts.json"))
            .expect("registry manifest parses");
    let primary = &registry["primary"];
    assert_eq!(primary["type"], "bundle-list");
    assert!(
        primary["path"]
            .as_str()
            .expect("primary path present")
            .ends_with("bundles.yaml")
    );
    assert!(registry.get("attachments").is_none());
}

#[test]
fn test_assemble_workspace_flag() {
    let workspace = common::TestWorkspace::new();
    common::write_simple_manifest(&workspace);

    launchpack_cmd()
        .args(["-w", workspace.path.to_str().expect("utf-8 path"), "assemble"])
        .assert()
        .success();

    assert!(workspace.file_exists("dist/bundles.yaml"));
}
