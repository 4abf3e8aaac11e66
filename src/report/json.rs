use crate::error::{InspectError, Result};
use crate::report::report_model::IssueReport;

/// Pretty-printed JSON for machine consumers.
pub fn generate_json_report(report: &IssueReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| InspectError::Json {
        context: "issue report".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::builder::ElementBuilder;
    use crate::element::control_type::ControlType;
    use crate::element::element_model::{RuleResult, ScanStatus};
    use crate::issue::store::{IssueSource, OutputFileIssueStore};
    use crate::rules::library::RuleLibrary;
    use crate::rules::rule_model::RuleId;

    #[test]
    fn report_carries_rule_text_and_stable_key() {
        let mut tree = ElementBuilder::new(ControlType::Button).build();
        tree.set_scan_results(0, vec![RuleResult { rule: RuleId::NameNotNull, status: ScanStatus::Fail }]);
        let store = OutputFileIssueStore::new("scan.json", &tree).unwrap();
        let library = RuleLibrary::builtin();

        let report = IssueReport::from_issues("scan.json", store.issues(), &library);
        let json: serde_json::Value =
            serde_json::from_str(&generate_json_report(&report).unwrap()).unwrap();

        assert_eq!(json["total_issues"], 1);
        assert!(json.get("merged_entries").is_none());
        let issue = &json["issues"][0];
        assert_eq!(issue["issue_type"], "NameNotNull");
        assert_eq!(issue["level"], "error");
        assert_eq!(issue["key"], store.issues()[0].fingerprint().digest());
        assert_eq!(
            issue["description"],
            library.get(RuleId::NameNotNull).unwrap().description.as_str()
        );
        assert_eq!(issue["locations"][0]["file_name"], "scan.json");
        assert!(report.has_errors());
    }
}
