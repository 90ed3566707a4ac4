//! Integration tests for the resolve command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{tagmeta_cmd, write_chain_manifest};

#[test]
fn test_resolve_five_level_chain_order() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    let output = tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("svc.Service5")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "@meta.Inherited",
            "@svc.Service4",
            "@meta.Inherited",
            "@svc.Service3",
            "@meta.Inherited",
            "@svc.Service2",
            "@meta.Inherited",
            "@svc.Service(value = \"X\")",
            "@meta.Inherited",
        ]
    );
}

#[test]
fn test_resolve_implementation_includes_whole_chain() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    let output = tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("app.OrderServiceImpl")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "@svc.Service5");
    assert_eq!(lines[9], "@meta.Inherited");
}

#[test]
fn test_resolve_untagged_declaration() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("ext.Unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("No meta tags found"));
}

#[test]
fn test_resolve_structural_types_never_printed() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("svc.Service5")
        .assert()
        .success()
        .stdout(predicate::str::contains("meta.Documented").not())
        .stdout(predicate::str::contains("meta.Retention").not())
        .stdout(predicate::str::contains("meta.Target").not());
}

#[test]
fn test_resolve_unknown_declaration_exits_4() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("svc.Missing")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Declaration not found"))
        .stderr(predicate::str::contains("tagmeta list"));
}

#[test]
fn test_resolve_discovers_manifest_in_parent() {
    let temp = TempDir::new().unwrap();
    write_chain_manifest(temp.path());
    let nested = temp.path().join("deeply").join("nested");
    fs::create_dir_all(&nested).unwrap();

    tagmeta_cmd()
        .current_dir(&nested)
        .arg("resolve")
        .arg("svc.Service5")
        .assert()
        .success()
        .stdout(predicate::str::contains("@svc.Service4"));
}

#[test]
fn test_resolve_with_manifest_flag() {
    let temp = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    tagmeta_cmd()
        .current_dir(other.path())
        .arg("--manifest")
        .arg(temp.path().join("tagmeta.toml"))
        .arg("resolve")
        .arg("svc.Service5")
        .assert()
        .success()
        .stdout(predicate::str::contains("@svc.Service4"));
}

#[test]
fn test_resolve_with_env_manifest() {
    let temp = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    write_chain_manifest(temp.path());

    tagmeta_cmd()
        .current_dir(other.path())
        .env("TAGMETA_MANIFEST", temp.path().join("tagmeta.toml"))
        .arg("resolve")
        .arg("svc.Service5")
        .assert()
        .success()
        .stdout(predicate::str::contains("@svc.Service4"));
}

#[test]
fn test_resolve_without_manifest_exits_2() {
    let temp = TempDir::new().unwrap();

    tagmeta_cmd()
        .current_dir(temp.path())
        .arg("resolve")
        .arg("svc.Service5")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No manifest found"))
        .stderr(predicate::str::contains("tagmeta.toml"));
}
