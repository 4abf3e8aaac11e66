use log::debug;

use crate::error::{InspectError, Result};
use crate::issue::store::{AddResult, IssueSink, IssueSource, IssueStore};

/// Copy the issues of `source` into `target`.
///
/// An issue whose fingerprint `target` already knows contributes its
/// locations to the existing issue; any other issue is added whole. Returns
/// how many locations and issues were newly recorded. A location or issue
/// the target already holds is skipped without affecting the rest.
pub fn merge_issues_from_store<T, S>(target: &mut T, source: &S) -> usize
where
    T: IssueSink + ?Sized,
    S: IssueSource + ?Sized,
{
    let mut added = 0;

    for issue in source.issues() {
        if let Some(existing) = target.try_find_issue_mut(issue.fingerprint()) {
            for location in issue.locations() {
                if existing.add_location(location.clone()) {
                    added += 1;
                }
            }
        } else if target.add_issue(issue.clone()) == AddResult::ItemAdded {
            added += 1;
        }
    }

    debug!(
        "merged {} issues from source, {} new entries",
        source.len(),
        added
    );
    added
}

/// Runtime-checked merge between stores picked at runtime.
pub fn merge_stores(target: &mut IssueStore, source: &IssueStore) -> Result<usize> {
    if !source.is_enumerable() {
        return Err(InspectError::InvalidOperation(
            "source store is not enumerable".to_string(),
        ));
    }
    let Some(sink) = target.sink() else {
        return Err(InspectError::InvalidOperation(
            "target store is not updatable".to_string(),
        ));
    };
    Ok(merge_issues_from_store(sink, source.source()))
}
