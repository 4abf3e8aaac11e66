use crate::report::report_model::IssueReport;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format an issue report for terminal output.
///
/// Produces output like:
/// ```text
/// === Issues: scan.json ===
///
/// ✗ ERROR  NameNotNull (2 locations)
///     Name must not be null
///     scan.json (element 3)
///     scan.json (element 5)
///
/// === 1 issue, 2 occurrences ===
/// ```
pub fn format_console_report(report: &IssueReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Issues: {} ===\n\n", report.source));

    if report.issues.is_empty() {
        out.push_str("\u{2713} No issues found\n");
    }

    for issue in &report.issues {
        let marker = match issue.level.as_str() {
            "error" => "\u{2717} ERROR",
            _ => "? OPEN ",
        };
        let count = issue.locations.len();
        out.push_str(&format!(
            "{}  {} ({} location{})\n",
            marker,
            issue.issue_type,
            count,
            if count == 1 { "" } else { "s" }
        ));

        if !issue.description.is_empty() {
            out.push_str(&format!("    {}\n", issue.description));
        }
        for location in &issue.locations {
            out.push_str(&format!("    {}\n", location));
        }
    }

    out.push_str(&format!(
        "\n=== {} issue{}, {} occurrence{}",
        report.total_issues,
        if report.total_issues == 1 { "" } else { "s" },
        report.total_occurrences,
        if report.total_occurrences == 1 { "" } else { "s" },
    ));

    if let Some(merged) = report.merged_entries {
        out.push_str(&format!(", {} newly merged", merged));
    }

    out.push_str(" ===\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::location::Location;
    use crate::report::report_model::IssueEntry;

    fn entry(issue_type: &str, level: &str, locations: Vec<Location>) -> IssueEntry {
        IssueEntry {
            key: "k".to_string(),
            issue_type: issue_type.to_string(),
            level: level.to_string(),
            description: format!("{} description", issue_type),
            how_to_fix: String::new(),
            locations,
            fingerprint: vec![],
        }
    }

    #[test]
    fn lists_issues_and_locations() {
        let report = IssueReport {
            source: "scan.json".to_string(),
            total_issues: 2,
            total_occurrences: 3,
            merged_entries: None,
            issues: vec![
                entry(
                    "NameNotNull",
                    "error",
                    vec![Location::output_file("scan.json", 3), Location::output_file("scan.json", 5)],
                ),
                entry("SiblingUniqueAndFocusable", "open", vec![Location::output_file("scan.json", 4)]),
            ],
        };

        let out = format_console_report(&report);

        assert!(out.starts_with("=== Issues: scan.json ===\n"));
        assert!(out.contains("\u{2717} ERROR  NameNotNull (2 locations)"));
        assert!(out.contains("    scan.json (element 5)\n"));
        assert!(out.contains("SiblingUniqueAndFocusable (1 location)\n"));
        assert!(out.ends_with("=== 2 issues, 3 occurrences ===\n"));
    }

    #[test]
    fn empty_report() {
        let report = IssueReport {
            source: "merged".to_string(),
            total_issues: 0,
            total_occurrences: 0,
            merged_entries: Some(0),
            issues: vec![],
        };
        let out = format_console_report(&report);
        assert!(out.contains("No issues found"));
        assert!(out.contains("0 newly merged"));
    }
}
