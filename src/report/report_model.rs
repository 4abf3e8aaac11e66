use serde::Serialize;

use crate::fingerprint::fingerprint::{LEVEL_KEY, RULE_ID_KEY};
use crate::issue::issue::Issue;
use crate::issue::location::Location;
use crate::rules::library::RuleLibrary;
use crate::rules::rule_model::RuleId;

// ============================================================================
// Issue report: what console and JSON reporters render
// ============================================================================

/// Issues of one scan or merge, flattened for output.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    /// Snapshot file name, or a label for merged runs
    pub source: String,

    /// Number of distinct issues
    pub total_issues: usize,

    /// Number of locations across all issues
    pub total_occurrences: usize,

    /// Entries newly recorded by a merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_entries: Option<usize>,

    pub issues: Vec<IssueEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueEntry {
    /// Stable key derived from the fingerprint
    pub key: String,
    pub issue_type: String,
    pub level: String,
    pub description: String,
    pub how_to_fix: String,
    pub locations: Vec<Location>,
    /// Fingerprint contributions as `key=value`
    pub fingerprint: Vec<String>,
}

impl IssueReport {
    /// Rule text is looked up in `library`; unknown rules get empty text.
    pub fn from_issues<'a>(
        source: &str,
        issues: impl IntoIterator<Item = &'a Issue>,
        library: &RuleLibrary,
    ) -> Self {
        let issues: Vec<IssueEntry> = issues
            .into_iter()
            .map(|issue| IssueEntry::new(issue, library))
            .collect();
        let total_occurrences = issues.iter().map(|i| i.locations.len()).sum();

        Self {
            source: source.to_string(),
            total_issues: issues.len(),
            total_occurrences,
            merged_entries: None,
            issues,
        }
    }

    pub fn with_merged_entries(mut self, count: usize) -> Self {
        self.merged_entries = Some(count);
        self
    }

    /// Whether any issue is an error rather than an open question.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.level == "error")
    }
}

impl IssueEntry {
    fn new(issue: &Issue, library: &RuleLibrary) -> Self {
        let fingerprint = issue.fingerprint();
        let rule = fingerprint
            .get(RULE_ID_KEY)
            .and_then(|id| id.parse::<RuleId>().ok())
            .and_then(|id| library.get(id));

        Self {
            key: fingerprint.digest(),
            issue_type: issue.issue_type().to_string(),
            level: fingerprint.get(LEVEL_KEY).unwrap_or_default().to_string(),
            description: rule.map(|r| r.description.clone()).unwrap_or_default(),
            how_to_fix: rule.map(|r| r.how_to_fix.clone()).unwrap_or_default(),
            locations: issue.locations().to_vec(),
            fingerprint: fingerprint.contributions().map(|c| c.to_string()).collect(),
        }
    }
}
