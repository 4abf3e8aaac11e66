use std::path::Path;

use log::{info, warn};

use crate::cli::config::{AppConfig, ReportFormat};
use crate::element::tree::ElementTree;
use crate::error::{InspectError, Result};
use crate::issue::merge::merge_stores;
use crate::issue::store::{InMemoryIssueStore, IssueSource, IssueStore, OutputFileIssueStore};
use crate::report::console::format_console_report;
use crate::report::json::generate_json_report;
use crate::report::report_model::IssueReport;
use crate::rules::library::RuleLibrary;
use crate::rules::rule_model::RuleId;
use crate::rules::runner::RuleRunner;

// ============================================================================
// scan subcommand
// ============================================================================

/// Returns whether the snapshot is free of error-level issues.
pub fn cmd_scan(
    snapshot: &str,
    format: Option<ReportFormat>,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<bool> {
    let library = build_library(config);
    let store = scan_snapshot(snapshot, &library)?;

    let report = IssueReport::from_issues(snapshot, store.issues(), &library);
    emit(&report, format, output, config)?;

    Ok(!report.has_errors())
}

// ============================================================================
// merge subcommand
// ============================================================================

pub fn cmd_merge(
    snapshots: &[String],
    format: Option<ReportFormat>,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<bool> {
    let library = build_library(config);
    let mut target = IssueStore::from(InMemoryIssueStore::new());
    let mut merged = 0;

    for snapshot in snapshots {
        let source = IssueStore::from(scan_snapshot(snapshot, &library)?);
        let added = merge_stores(&mut target, &source)?;
        info!("{}: {} new entries", snapshot, added);
        merged += added;
    }

    let label = format!("{} snapshots merged", snapshots.len());
    let report =
        IssueReport::from_issues(&label, target.issues(), &library).with_merged_entries(merged);
    emit(&report, format, output, config)?;

    Ok(!report.has_errors())
}

// ============================================================================
// rules subcommand
// ============================================================================

pub fn cmd_rules(config: &AppConfig) {
    print!("{}", format_rule_list(&build_library(config)));
}

/// One line per rule: id, standard and description.
pub fn format_rule_list(library: &RuleLibrary) -> String {
    let mut out = String::new();
    for rule in library.rules() {
        out.push_str(&format!(
            "{:<36} {:<12} {}\n",
            rule.id.name(),
            rule.standard,
            rule.description
        ));
    }
    out.push_str(&format!("\n{} rules\n", library.len()));
    out
}

// ============================================================================
// Helpers
// ============================================================================

/// The built-in rules minus those disabled in config. Unknown ids are logged
/// and ignored.
pub fn build_library(config: &AppConfig) -> RuleLibrary {
    let mut disabled = vec![];
    for name in &config.scan.disabled_rules {
        match name.parse::<RuleId>() {
            Ok(id) => disabled.push(id),
            Err(e) => warn!("{}", e),
        }
    }

    let mut library = RuleLibrary::builtin();
    library.disable(&disabled);
    library
}

/// Load a snapshot, run `library` on it and extract its issues.
pub fn scan_snapshot(path: &str, library: &RuleLibrary) -> Result<OutputFileIssueStore> {
    let mut tree = ElementTree::load_snapshot(Path::new(path))?;
    let summary = RuleRunner::run(&mut tree, library);
    info!(
        "{}: {} elements, {} results",
        path, summary.elements, summary.results
    );
    OutputFileIssueStore::new(path, &tree)
}

fn emit(
    report: &IssueReport,
    format: Option<ReportFormat>,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<()> {
    let format = format.unwrap_or(config.report.format);
    let content = match format {
        ReportFormat::Json => generate_json_report(report)?,
        ReportFormat::Console => format_console_report(report),
    };

    match output.or(config.report.output.as_deref()) {
        Some(path) => std::fs::write(path, &content).map_err(|source| InspectError::Io {
            path: path.into(),
            source,
        })?,
        None => print!("{}", content),
    }
    Ok(())
}
