use crate::common::{
    ARRAY_SITES, EMPTY_SITES, MIXED_SITES, MIXED_SITES_DART, NUMERIC_DETAIL_SITES, SINGLE_SITE,
    TRUNCATED_SITES, TestProject,
};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_generate_with_default_paths() {
    let project = TestProject::with_sites(MIXED_SITES);

    project
        .sitegen()
        .assert()
        .success()
        .stdout("Generated: ../lib/config/api_config.dart\n");

    assert_eq!(project.dart(), MIXED_SITES_DART);
}

#[test]
fn test_generate_single_site() {
    let project = TestProject::with_sites(SINGLE_SITE);

    project.sitegen().assert().success();

    let dart = project.dart();
    let records: Vec<&str> = dart.lines().filter(|l| l.starts_with("  ")).collect();
    assert_eq!(
        records,
        vec![
            "  ApiSite(key: 'siteA', name: 'Site A', api: 'https://a.example/api', detail: null, adult: true),"
        ]
    );
}

#[test]
fn test_generate_empty_object() {
    let project = TestProject::with_sites(EMPTY_SITES);

    project.sitegen().assert().success();

    let dart = project.dart();
    assert!(dart.starts_with("// Generated by sitegen."));
    assert!(dart.contains("import '../models/api_site.dart';\n"));
    assert!(dart.ends_with("final List<ApiSite> apiSites = [\n];\n"));
    assert!(!dart.contains("ApiSite("));
}

#[test]
fn test_generate_is_idempotent() {
    let project = TestProject::with_sites(MIXED_SITES);

    project.sitegen().assert().success();
    let first = fs::read(project.dart_path()).unwrap();

    project.sitegen().assert().success();
    let second = fs::read(project.dart_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_overwrites_existing_file() {
    let project = TestProject::with_sites(SINGLE_SITE);
    fs::write(project.dart_path(), "// stale content\n".repeat(100)).unwrap();

    project.sitegen().assert().success();

    let dart = project.dart();
    assert!(!dart.contains("stale content"));
    assert_eq!(dart.matches("ApiSite(").count(), 1);
}

#[test]
fn test_generate_explicit_paths() {
    let project = TestProject::new();
    let input = project.write_file("data/sites.json", SINGLE_SITE);
    let output = project.root().join("out.dart");

    project
        .sitegen()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.dart"));

    let dart = fs::read_to_string(&output).unwrap();
    assert!(dart.contains("key: 'siteA'"));
    assert!(!project.dart_path().exists());
}

#[test]
fn test_generate_quiet() {
    let project = TestProject::with_sites(SINGLE_SITE);

    project
        .sitegen()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.dart_path().exists());
}

#[test]
fn test_generate_verbose_reports_on_stderr() {
    let project = TestProject::with_sites(MIXED_SITES);

    project
        .sitegen()
        .arg("--verbose")
        .assert()
        .success()
        .stdout("Generated: ../lib/config/api_config.dart\n")
        .stderr(predicate::str::contains("Loaded 4 sites"));
}

#[test]
fn test_generate_stdout_does_not_write() {
    let project = TestProject::with_sites(MIXED_SITES);

    project
        .sitegen()
        .arg("--stdout")
        .assert()
        .success()
        .stdout(MIXED_SITES_DART);

    assert!(!project.dart_path().exists());
}

#[test]
fn test_generate_missing_input() {
    let project = TestProject::new();

    project
        .sitegen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read site config"));

    assert!(!project.dart_path().exists());
}

#[test]
fn test_generate_truncated_json_keeps_existing_output() {
    let project = TestProject::with_sites(TRUNCATED_SITES);
    fs::write(project.dart_path(), "// previous\n").unwrap();

    project
        .sitegen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse site config"));

    assert_eq!(project.dart(), "// previous\n");
}

#[test]
fn test_generate_non_object_document() {
    let project = TestProject::with_sites(ARRAY_SITES);

    project
        .sitegen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));

    assert!(!project.dart_path().exists());
}

#[test]
fn test_generate_numeric_detail_is_format_error() {
    let project = TestProject::with_sites(NUMERIC_DETAIL_SITES);

    project
        .sitegen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("siteA.detail"));

    assert!(!project.dart_path().exists());
}

#[test]
fn test_generate_missing_output_directory() {
    let project = TestProject::with_sites(SINGLE_SITE);
    let output = project.root().join("missing/dir/api_config.dart");

    project
        .sitegen()
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write generated file"));

    assert!(!project.root().join("missing").exists());
}

#[test]
fn test_generate_header_names_fixed_source() {
    let project = TestProject::with_sites(SINGLE_SITE);
    let input = project.sites_path();

    project
        .sitegen()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .success();

    let dart = project.dart();
    let header = dart.lines().next().unwrap();
    assert_eq!(
        header,
        "// Generated by sitegen. To add a site, edit config/api_sites.json and regenerate."
    );
}

#[test]
fn test_error_label_uncolored_when_stderr_redirected() {
    let project = TestProject::new();

    project
        .sitegen()
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_error_label_colored_when_forced() {
    let project = TestProject::new();

    project
        .sitegen()
        .arg("--color=always")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{1b}["));
}
