// end-to-end tests for the docstamp binary

use docstamp::utils::testing::{TestProject, TestProjectBuilder, TestScenario};
use std::process::{Command, Output};

const METADATA: &str = "tex/config/metadata.tex";
const FRAGMENT: &str = "tex/includes/993_anhang-changelog.tex";

fn docstamp(project: &TestProject, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docstamp"))
        .arg("--path")
        .arg(project.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_print_version() {
    let project = TestScenario::Standard.build().unwrap();

    let output = docstamp(&project, &["--print-version"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "2024.01.15");
}

#[test]
fn test_print_version_wins_over_other_flags() {
    let project = TestScenario::Standard.build().unwrap();
    let before = project.read(METADATA).unwrap();

    let output = docstamp(
        &project,
        &[
            "--version-date",
            "2025-09-01",
            "--no-build",
            "--changelog-only",
            "--print-version",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "2024.01.15");
    assert_eq!(project.read(METADATA).unwrap(), before);
    assert!(!project.exists(FRAGMENT));
}

#[test]
fn test_print_version_without_template_fails() {
    let project = TestProjectBuilder::new().no_metadata().build().unwrap();

    let output = docstamp(&project, &["--print-version"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_version_date_exits_with_failure() {
    let project = TestScenario::Standard.build().unwrap();
    let before = project.read(METADATA).unwrap();

    let output = docstamp(&project, &["--version-date", "not-a-date", "--no-build"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not-a-date"));
    assert_eq!(project.read(METADATA).unwrap(), before);
    assert!(!project.exists(FRAGMENT));
}

#[test]
fn test_changelog_only_leaves_metadata_alone() {
    let project = TestScenario::Standard.build().unwrap();
    let before = project.read(METADATA).unwrap();

    let output = docstamp(
        &project,
        &["--changelog-only", "--version-date", "2025-09-01", "--no-build"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("found 2 version entries"));
    assert_eq!(project.read(METADATA).unwrap(), before);
    let fragment = project.read(FRAGMENT).unwrap();
    assert!(fragment.contains("  2025.10.15 & Changed: 2 Änderungen \\\\"));
}

#[test]
fn test_changelog_only_missing_changelog_fails() {
    let project = TestScenario::MissingChangelog.build().unwrap();

    let output = docstamp(&project, &["--changelog-only"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!project.exists(FRAGMENT));
}

#[test]
fn test_no_build_updates_metadata_and_changelog() {
    let project = TestScenario::Standard.build().unwrap();

    let output = docstamp(&project, &["--version-date", "2025-09-01", "--no-build"]);

    assert_eq!(output.status.code(), Some(0));
    let printed = stdout(&output);
    assert!(printed.contains("version:       2025.09.01"));
    assert!(printed.contains("document date: 01. September 2025"));

    let metadata = project.read(METADATA).unwrap();
    assert!(metadata.contains("\\newcommand{\\DocumentVersion}{2025.09.01}"));
    assert!(metadata.contains("\\newcommand{\\ValidUntil}{31.08.2028}"));
    assert!(metadata.contains("\\newcommand{\\NextReview}{September 2027}"));
    assert!(project.exists(FRAGMENT));
    assert!(!project.exists("tex/main.pdf"));
}

#[test]
fn test_no_build_tolerates_missing_changelog() {
    let project = TestScenario::MissingChangelog.build().unwrap();

    let output = docstamp(&project, &["--version-date", "2025-09-01", "--no-build"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("changelog not regenerated"));
    assert!(
        project
            .read(METADATA)
            .unwrap()
            .contains("{2025.09.01}")
    );
}

#[test]
fn test_json_run_reports_every_step() {
    let project = TestScenario::MissingChangelog.build().unwrap();

    let output = docstamp(
        &project,
        &["--version-date", "2025-09-01", "--no-build", "--format", "json"],
    );

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"]["version"], "2025.09.01");
    assert_eq!(value["version"]["valid_until"], "31.08.2028");
    assert!(value["changelog"].is_null());
    assert!(value["changelog_error"].is_string());
    assert!(value["artifact"].is_null());
}

#[cfg(unix)]
#[test]
fn test_full_run_with_fake_build() {
    let project = TestScenario::FakeBuild.build().unwrap();

    let output = docstamp(&project, &["--version-date", "2025-09-01", "-f", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["changelog"]["entry_count"], 2);
    assert!(value["changelog_error"].is_null());
    assert!(
        value["artifact"]
            .as_str()
            .unwrap()
            .ends_with("main.pdf")
    );
    assert!(project.exists("tex/main.pdf"));
}

#[cfg(unix)]
#[test]
fn test_build_failure_exits_with_failure() {
    let project = TestProjectBuilder::new()
        .config("[build]\ncommand = \"sh\"\nargs = [\"-c\", \"echo '! Undefined control sequence.'; exit 1\"]\n")
        .build()
        .unwrap();

    let output = docstamp(&project, &["--version-date", "2025-09-01"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Undefined control sequence"));
    // metadata was stamped before the build ran
    assert!(
        project
            .read(METADATA)
            .unwrap()
            .contains("{2025.09.01}")
    );
}
