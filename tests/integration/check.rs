use crate::common::{MIXED_SITES, SINGLE_SITE, TestProject};
use predicates::prelude::*;

#[test]
fn test_check_after_generate() {
    let project = TestProject::with_sites(MIXED_SITES);
    project.sitegen().assert().success();

    project
        .sitegen()
        .arg("--check")
        .assert()
        .success()
        .stdout("Up to date: ../lib/config/api_config.dart\n");
}

#[test]
fn test_check_detects_changed_input() {
    let project = TestProject::with_sites(MIXED_SITES);
    project.sitegen().assert().success();
    let before = project.dart();

    project.write_sites(SINGLE_SITE);

    project
        .sitegen()
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    // --check never writes
    assert_eq!(project.dart(), before);
}

#[test]
fn test_check_missing_output() {
    let project = TestProject::with_sites(SINGLE_SITE);

    project
        .sitegen()
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    assert!(!project.dart_path().exists());
}

#[test]
fn test_check_conflicts_with_stdout() {
    let project = TestProject::with_sites(SINGLE_SITE);

    project
        .sitegen()
        .args(["--check", "--stdout"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_check_independent_of_path_spelling() {
    let project = TestProject::with_sites(SINGLE_SITE);
    project.sitegen().assert().success();

    // Same files, addressed from the project root instead of scripts/
    project
        .sitegen_in(project.root())
        .args([
            "-i",
            "config/api_sites.json",
            "-o",
            "lib/config/api_config.dart",
            "--check",
        ])
        .assert()
        .success()
        .stdout("Up to date: lib/config/api_config.dart\n");

    // And through an absolute path
    let input = project.sites_path();
    project
        .sitegen()
        .args(["-i", input.to_str().unwrap(), "--check"])
        .assert()
        .success();
}
