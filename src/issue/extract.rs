use std::collections::HashMap;

use log::debug;

use crate::element::tree::ElementTree;
use crate::error::{InspectError, Result};
use crate::fingerprint::fingerprint::Fingerprint;
use crate::issue::issue::Issue;
use crate::issue::location::Location;

/// Build issues from the failed and uncertain results attached to `tree`.
///
/// Results sharing a fingerprint collapse into one issue carrying every
/// location. Issues come back in the order their first occurrence appears
/// in a depth-first walk of the tree.
pub fn extract_issues(file_name: &str, tree: &ElementTree) -> Result<Vec<Issue>> {
    if file_name.is_empty() {
        return Err(InspectError::MissingArgument("file_name"));
    }

    let mut issues: Vec<Issue> = vec![];
    let mut seen: HashMap<Fingerprint, usize> = HashMap::new();
    let mut occurrences = 0usize;

    let Some(root) = tree.root() else {
        return Ok(issues);
    };

    for element in std::iter::once(root).chain(root.descendants()) {
        for result in element.scan_results() {
            if !result.status.is_issue() {
                continue;
            }
            occurrences += 1;

            let fingerprint = Fingerprint::new(element, result.rule, result.status)?;
            let location = Location::output_file(file_name, element.id());

            match seen.get(&fingerprint) {
                Some(&index) => {
                    issues[index].add_location(location);
                }
                None => {
                    let mut issue = Issue::new(fingerprint.clone(), result.rule.name())?;
                    issue.add_location(location);
                    seen.insert(fingerprint, issues.len());
                    issues.push(issue);
                }
            }
        }
    }

    debug!(
        "extracted {} issues from {} occurrences in {}",
        issues.len(),
        occurrences,
        file_name
    );
    Ok(issues)
}
