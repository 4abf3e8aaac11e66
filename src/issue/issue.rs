use std::collections::HashSet;

use serde::Serialize;

use crate::error::{InspectError, Result};
use crate::fingerprint::fingerprint::Fingerprint;
use crate::issue::location::Location;

/// All known occurrences of one fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    fingerprint: Fingerprint,
    issue_type: String,
    locations: Vec<Location>,
    #[serde(skip)]
    seen: HashSet<Location>,
}

impl Issue {
    pub fn new(fingerprint: Fingerprint, issue_type: &str) -> Result<Self> {
        if issue_type.is_empty() {
            return Err(InspectError::MissingArgument("issue_type"));
        }
        Ok(Self {
            fingerprint,
            issue_type: issue_type.to_string(),
            locations: vec![],
            seen: HashSet::new(),
        })
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Locations in the order they were first seen.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Returns false when an equal location is already recorded.
    pub fn add_location(&mut self, location: Location) -> bool {
        if !self.seen.insert(location.clone()) {
            return false;
        }
        self.locations.push(location);
        true
    }
}
