//! Integration tests for the opsmith binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn opsmith() -> Command {
    Command::cargo_bin("opsmith").unwrap()
}

#[test]
fn help_flag() {
    opsmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("controller"))
        .stdout(predicate::str::contains("manifests"));
}

#[test]
fn version_flag() {
    opsmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_an_argument_error() {
    opsmith().assert().failure().code(2);
}

#[test]
fn invalid_group_exits_one_and_names_the_field() {
    opsmith()
        .args([
            "resource", "--group", "Crew", "--version", "v1", "--kind", "FirstMate",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("group"));
}

#[test]
fn invalid_version_exits_one() {
    opsmith()
        .args([
            "resource", "--group", "crew", "--version", "1beta1", "--kind", "FirstMate",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("version"));
}

#[test]
fn resource_scaffold_writes_expected_files() {
    let temp = TempDir::new().unwrap();

    opsmith()
        .args([
            "resource", "--group", "crew", "--version", "v1", "--kind", "FirstMate",
        ])
        .args(["--output", temp.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(temp.path().join("pkg/apis/crew/v1/firstmate_types.go").exists());
    assert!(temp.path().join("pkg/apis/addtoscheme_crew_v1.go").exists());
    assert!(temp.path().join("config/crds/crew_v1_firstmate.yaml").exists());
    assert!(temp.path().join("config/manager/crew_role_rbac.yaml").exists());
}

#[test]
fn resource_scaffold_skips_existing_files() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("pkg/apis/crew/v1/doc.go");
    std::fs::create_dir_all(doc.parent().unwrap()).unwrap();
    std::fs::write(&doc, "// hand edited\n").unwrap();

    opsmith()
        .args([
            "resource", "--group", "crew", "--version", "v1", "--kind", "FirstMate",
        ])
        .args(["--output", temp.path().to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&doc).unwrap(), "// hand edited\n");
}

#[test]
fn project_scaffold_writes_layout() {
    let temp = TempDir::new().unwrap();

    opsmith()
        .args([
            "project",
            "--project-name",
            "ship",
            "--image",
            "example/ship:v1",
        ])
        .args(["--output", temp.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(temp.path().join("Gopkg.toml").exists());
    assert!(temp.path().join("cmd/manager/main.go").exists());
    assert!(temp.path().join("Dockerfile").exists());
    assert!(temp.path().join("pkg/apis/apis.go").exists());
    assert!(temp.path().join("pkg/controller/controller.go").exists());
}

#[test]
fn boilerplate_is_prepended_to_sources() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("boilerplate.go.txt");
    std::fs::write(&header, "/* Copyright 2026 Ship Authors */\n").unwrap();
    let out = temp.path().join("out");

    opsmith()
        .args([
            "resource", "--group", "crew", "--version", "v1", "--kind", "FirstMate",
        ])
        .args(["--output", out.to_str().unwrap()])
        .args(["--boilerplate", header.to_str().unwrap()])
        .assert()
        .success();

    let types = std::fs::read_to_string(out.join("pkg/apis/crew/v1/firstmate_types.go")).unwrap();
    assert!(types.starts_with("/* Copyright 2026 Ship Authors */"));

    let crd = std::fs::read_to_string(out.join("config/crds/crew_v1_firstmate.yaml")).unwrap();
    assert!(!crd.contains("Copyright"));
}

#[test]
fn missing_boilerplate_file_exits_one() {
    opsmith()
        .args([
            "resource", "--group", "crew", "--version", "v1", "--kind", "FirstMate",
        ])
        .args(["--boilerplate", "no-such-file.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-such-file.txt"));
}

#[test]
fn manifests_render_to_stdout() {
    opsmith()
        .args([
            "manifests",
            "--project-name",
            "ship",
            "--image",
            "example/ship:v1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: Deployment"))
        .stdout(predicate::str::contains("namespace: ship-system"))
        .stdout(predicate::str::contains("image: example/ship:v1"))
        .stdout(predicate::str::starts_with("#").or(predicate::str::starts_with("apiVersion")));
}

#[test]
fn manifests_webhook_toggle_adds_the_service() {
    opsmith()
        .args([
            "manifests",
            "--project-name",
            "ship",
            "--image",
            "example/ship:v1",
            "--enable-webhooks",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ship-webhook-service"))
        .stdout(predicate::str::contains("containerPort: 9443"));
}

#[test]
fn manifests_write_to_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("manifests.yaml");

    opsmith()
        .args([
            "manifests",
            "--project-name",
            "ship",
            "--image",
            "example/ship:v1",
            "-o",
        ])
        .arg(&out)
        .assert()
        .success();

    let blob = std::fs::read_to_string(&out).unwrap();
    assert!(blob.contains("kind: Namespace"));
    assert!(!blob.starts_with("---"));
}

#[cfg(unix)]
#[test]
fn manifests_generator_output_is_spliced_in_front_of_the_rendered_blob() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let fake = temp.path().join("controller-gen");
    std::fs::write(
        &fake,
        "#!/bin/sh\nprintf 'apiVersion: apiextensions.k8s.io/v1\\nkind: CustomResourceDefinition\\n'\n",
    )
    .unwrap();
    std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();
    let path = format!(
        "{}:{}",
        temp.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );

    let assert = opsmith()
        .env("PATH", path)
        .args([
            "manifests",
            "--project-name",
            "ship",
            "--image",
            "example/ship:v1",
            "--run-generator",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Generated documents come first, the rendered set follows.
    let crd = stdout.find("kind: CustomResourceDefinition").unwrap();
    let deployment = stdout.find("kind: Deployment").unwrap();
    assert!(crd < deployment);
    // The rendered set keeps its comment headers through the merge.
    assert!(stdout.contains("# RBAC: Leader election."));
    assert!(stdout.contains("# RBAC: Manager permissions"));
}

#[test]
fn completions_bash() {
    opsmith()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opsmith"));
}
