mod common;

use a11y_inspect::cli::commands::{build_library, cmd_merge, cmd_scan, scan_snapshot};
use a11y_inspect::cli::config::{AppConfig, Cli, Commands, ReportFormat, load_config, read_config};
use a11y_inspect::{InspectError, IssueSource, RuleId};
use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use common::{button, window, write_snapshot};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_scan_minimal() {
    let cli = Cli::parse_from(["a11y-inspect", "scan", "--snapshot", "scan.json"]);
    match cli.command {
        Commands::Scan {
            snapshot,
            format,
            output,
        } => {
            assert_eq!(snapshot, "scan.json");
            assert_eq!(format, None);
            assert_eq!(output, None);
        }
        _ => panic!("Expected Scan command"),
    }
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.config, None);
}

#[test]
fn cli_parse_scan_all_args() {
    let cli = Cli::parse_from([
        "a11y-inspect",
        "--config",
        "custom.yaml",
        "scan",
        "--snapshot",
        "scan.json",
        "--format",
        "json",
        "-o",
        "out.json",
        "-v",
    ]);
    match cli.command {
        Commands::Scan {
            snapshot,
            format,
            output,
        } => {
            assert_eq!(snapshot, "scan.json");
            assert_eq!(format, Some(ReportFormat::Json));
            assert_eq!(output.as_deref(), Some("out.json"));
        }
        _ => panic!("Expected Scan command"),
    }
    assert_eq!(cli.verbose, 1);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

#[test]
fn cli_parse_rules() {
    let cli = Cli::parse_from(["a11y-inspect", "rules"]);
    assert!(matches!(cli.command, Commands::Rules));
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["a11y-inspect", "scan", "--snapshot", "a.json", "--format", "html"]);
    assert!(result.is_err());
}

#[test]
fn cli_merge_requires_snapshot() {
    assert!(Cli::try_parse_from(["a11y-inspect", "merge"]).is_err());
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a11y-inspect.yaml");
    std::fs::write(
        &path,
        "scan:\n  disabled_rules:\n    - NameNotNull\n    - siblinguniqueandfocusable\nreport:\n  format: json\n",
    )
    .unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.scan.disabled_rules.len(), 2);
    assert_eq!(config.report.format, ReportFormat::Json);

    let library = build_library(&config);
    assert!(library.get(RuleId::NameNotNull).is_none());
    assert!(library.get(RuleId::SiblingUniqueAndFocusable).is_none());
    assert!(library.get(RuleId::NameNotEmpty).is_some());
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "scan: [this is: not valid").unwrap();

    assert!(matches!(read_config(&path), Err(InspectError::Yaml { .. })));
    let config = load_config(path.to_str());
    assert!(config.scan.disabled_rules.is_empty());
    assert_eq!(config.report.format, ReportFormat::Console);
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn scan_writes_json_report() {
    let dir = tempdir().unwrap();
    let snapshot = write_snapshot(
        dir.path(),
        "scan.json",
        &window("Doc", vec![button(None, 10), button(Some("OK"), 100)]),
    );
    let output = dir.path().join("report.json");
    let snapshot = snapshot.to_str().unwrap();

    let clean = cmd_scan(
        snapshot,
        Some(ReportFormat::Json),
        output.to_str(),
        &AppConfig::default(),
    )
    .unwrap();
    assert!(!clean);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["source"], snapshot);
    let name_issue = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["issue_type"] == "NameNotNull")
        .expect("NameNotNull issue");
    assert_eq!(name_issue["locations"][0]["element_id"], 1);
    assert_eq!(name_issue["locations"][0]["file_name"], snapshot);
}

#[test]
fn scan_with_disabled_rule_reports_console_text() {
    let dir = tempdir().unwrap();
    let snapshot = write_snapshot(dir.path(), "scan.json", &window("Doc", vec![button(None, 10)]));
    let output = dir.path().join("report.txt");

    let mut config = AppConfig::default();
    config.scan.disabled_rules = vec!["NameNotNull".to_string()];
    cmd_scan(snapshot.to_str().unwrap(), None, output.to_str(), &config).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("=== Issues: "));
    assert!(!text.contains("NameNotNull"));
}

#[test]
fn scan_of_missing_snapshot_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = scan_snapshot(missing.to_str().unwrap(), &build_library(&AppConfig::default()))
        .unwrap_err();
    assert!(matches!(err, InspectError::Io { .. }));
}

#[test]
fn scan_of_malformed_snapshot_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ \"controlType\": 99999 }").unwrap();

    let err = scan_snapshot(path.to_str().unwrap(), &build_library(&AppConfig::default()))
        .unwrap_err();
    assert!(matches!(err, InspectError::UnknownControlType(99999)));
}

#[test]
fn merge_reports_newly_recorded_entries() {
    let dir = tempdir().unwrap();
    let a = write_snapshot(dir.path(), "a.json", &window("Doc 1", vec![button(None, 10)]));
    let b = write_snapshot(
        dir.path(),
        "b.json",
        &window("Doc 2", vec![button(None, 10), button(None, 100)]),
    );
    let output = dir.path().join("merged.json");
    let library = build_library(&AppConfig::default());
    let first_scan_issues = scan_snapshot(a.to_str().unwrap(), &library).unwrap().len();

    let snapshots = vec![a.to_string_lossy().to_string(), b.to_string_lossy().to_string()];
    cmd_merge(&snapshots, Some(ReportFormat::Json), output.to_str(), &AppConfig::default()).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["source"], "2 snapshots merged");

    let name_issue = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["issue_type"] == "NameNotNull")
        .expect("NameNotNull issue");
    assert_eq!(name_issue["locations"].as_array().unwrap().len(), 3);

    // every issue of the first scan, plus at least the two new locations
    let merged = report["merged_entries"].as_u64().unwrap() as usize;
    assert!(merged >= first_scan_issues + 2);
}
