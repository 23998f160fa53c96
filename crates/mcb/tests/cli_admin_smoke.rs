//! Smoke tests for the administrative CLI surface (`init`, `add-component`,
//! ...): each subcommand drives the Service Façade directly and prints its
//! `EntityResult` as JSON on success, exiting non-zero with a message on
//! stderr otherwise.

use std::path::PathBuf;
use std::process::Command;

fn mcb_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_mcb") {
        return PathBuf::from(path);
    }
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    for profile in ["debug", "release"] {
        let path = PathBuf::from(manifest_dir).join(format!("../../target/{profile}/mcb"));
        if path.exists() {
            return path;
        }
    }
    panic!("mcb binary not found; run the workspace build first");
}

#[test]
fn init_creates_a_repository_node_and_prints_it_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(mcb_path())
        .args(["init", "acme/widgets", "--project-root"])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb init");

    assert!(
        output.status.success(),
        "mcb init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is valid json");
    assert_eq!(value["kind"], "repository");
    assert_eq!(value["name"], "acme/widgets");
    assert_eq!(value["branch"], "main");
}

#[test]
fn add_component_round_trips_through_a_fresh_project_root() {
    let dir = tempfile::tempdir().expect("tempdir");

    let init = Command::new(mcb_path())
        .args(["init", "acme/widgets", "--project-root"])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb init");
    assert!(init.status.success());

    let add = Command::new(mcb_path())
        .args([
            "add-component",
            "acme/widgets",
            "comp-auth",
            "--name",
            "AuthService",
            "--kind",
            "service",
            "--project-root",
        ])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb add-component");

    assert!(
        add.status.success(),
        "mcb add-component failed: {}",
        String::from_utf8_lossy(&add.stderr)
    );
    let stdout = String::from_utf8(add.stdout).expect("stdout is utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is valid json");
    assert_eq!(value["kind"], "component");
    assert_eq!(value["id"], "comp-auth");
    assert_eq!(value["name"], "AuthService");
}

#[test]
fn add_component_on_a_branch_override_is_isolated_from_main() {
    let dir = tempfile::tempdir().expect("tempdir");

    let init_main = Command::new(mcb_path())
        .args(["init", "acme/widgets", "--project-root"])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb init");
    assert!(init_main.status.success());

    let init_dev = Command::new(mcb_path())
        .args(["init", "acme/widgets", "--branch", "dev", "--project-root"])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb init on dev branch");
    assert!(init_dev.status.success());

    let add_dev = Command::new(mcb_path())
        .args([
            "add-component",
            "acme/widgets",
            "comp-beta",
            "--name",
            "BetaFeature",
            "--branch",
            "dev",
            "--project-root",
        ])
        .arg(dir.path())
        .output()
        .expect("failed to run mcb add-component on dev branch");

    assert!(add_dev.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8(add_dev.stdout).expect("utf8"))
            .expect("valid json");
    assert_eq!(value["kind"], "component");
    assert_eq!(value["id"], "comp-beta");
    assert_eq!(value["branch"], "dev");
}
