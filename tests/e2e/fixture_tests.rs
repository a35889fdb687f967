use predicates::prelude::*;
use std::fs;
use super::helpers::{TestProject, CONFIG_FILE, MIXED_REPORT};

#[test]
fn test_init_writes_starter_config() {
    let project = TestProject::new();

    project
        .checker()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let config = project.read_config(".");
    assert_eq!(config["allowedPackages"], serde_json::json!([]));
    assert!(config["allowedLicenses"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("MIT")));

    // A second run must not clobber the file
    project
        .checker()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    project.checker().args(["init", "--force"]).assert().success();
}

#[test]
fn test_fix_dry_run_does_not_write() {
    let project = TestProject::new();
    let report = project.write_report(MIXED_REPORT);

    project
        .checker()
        .args(["fix", "--dry-run", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would add 1 packages"))
        .stdout(predicate::str::contains("package2 (GPL-3.0)"));

    assert!(!project.path().join(CONFIG_FILE).exists());
}

#[test]
fn test_fix_dry_run_lists_each_package_once() {
    let project = TestProject::new();
    let report = project.write_report(
        r#"{
            "GPL-3.0": [{ "name": "shared" }],
            "AGPL-3.0": [{ "name": "shared" }]
        }"#,
    );

    let output = project
        .checker()
        .args(["fix", "--dry-run", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would add 1 packages"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("  - shared").count(), 1);
    assert!(stdout.contains("  - shared (GPL-3.0, AGPL-3.0)"));
}

#[test]
fn test_fix_exempts_violating_packages() {
    let project = TestProject::new();
    let report = project.write_report(MIXED_REPORT);
    project.write_config(".", r#"{ "allowedLicenses": ["MIT", "Apache-2.0"] }"#);

    project
        .checker()
        .args(["fix", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("package2"));

    let config = project.read_config(".");
    assert_eq!(config["allowedPackages"], serde_json::json!(["package2"]));
    assert_eq!(config["allowedLicenses"], serde_json::json!(["MIT", "Apache-2.0"]));

    project
        .checker()
        .args(["check", "--report"])
        .arg(&report)
        .assert()
        .success();

    project
        .checker()
        .args(["fix", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("No violations found"));
}

#[test]
fn test_fix_refuses_invalid_config() {
    let project = TestProject::new();
    let report = project.write_report(MIXED_REPORT);
    let config_path = project.write_config(".", "[oops");

    project
        .checker()
        .args(["fix", "--report"])
        .arg(&report)
        .assert()
        .code(2);

    assert_eq!(fs::read_to_string(config_path).unwrap(), "[oops");
}

#[test]
fn test_config_show_and_validate() {
    let project = TestProject::new();
    project.write_config(".", r#"{ "allowedPackages": ["left-pad"], "allowedLicenses": ["MIT"] }"#);

    project
        .checker()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowedPackages\""))
        .stdout(predicate::str::contains("left-pad"));

    project
        .checker()
        .args(["config", "--validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_flags_bad_field() {
    let project = TestProject::new();
    project.write_config(".", r#"{ "allowedLicenses": "MIT" }"#);

    project
        .checker()
        .args(["config", "--validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("allowedLicenses should be an array"));
}

#[test]
fn test_explicit_config_path() {
    let project = TestProject::new();
    let report = project.write_report(MIXED_REPORT);
    let custom = project.path().join("license-policy.json");
    fs::write(&custom, r#"{ "allowedPackages": ["package2"] }"#).unwrap();

    project
        .checker()
        .args(["check", "--report"])
        .arg(&report)
        .arg("--config")
        .arg(&custom)
        .assert()
        .success();
}

#[cfg(unix)]
mod fake_pnpm {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn write_script(project: &TestProject, body: &str) -> PathBuf {
        let path = project.path().join("fake-pnpm");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_runs_pnpm_licenses_list() {
        let project = TestProject::new();
        project.write_report(MIXED_REPORT);
        // Only answer the exact subcommand the checker is expected to run
        let script = write_script(
            &project,
            r#"[ "$1 $2 $3" = "licenses list --json" ] || exit 3
cat licenses.json"#,
        );

        project
            .checker()
            .env("PNPM_LICENSE_CHECKER_PNPM", &script)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Affected Packages: package2"));
    }

    #[test]
    fn test_pnpm_failure_is_fatal() {
        let project = TestProject::new();
        let script = write_script(&project, "echo 'ERR_PNPM_NO_LOCKFILE' >&2\nexit 1");

        project
            .checker()
            .arg("check")
            .arg("--pnpm")
            .arg(&script)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("ERR_PNPM_NO_LOCKFILE"));
    }

    #[test]
    fn test_pnpm_stderr_output_is_fatal() {
        let project = TestProject::new();
        let script = write_script(&project, "echo '{}'\necho 'WARN deprecated' >&2");

        project
            .checker()
            .arg("check")
            .arg("--pnpm")
            .arg(&script)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("wrote to stderr"));
    }
}
