//! Issue stores keyed by fingerprint.
//!
//! Capabilities are traits: every store is an [`IssueSource`], only
//! updatable stores are [`IssueSink`]s. [`IssueStore`] wraps the concrete
//! stores for callers that pick a store at runtime and need the
//! `is_enumerable`/`is_updatable` flags.

use std::collections::HashMap;

use log::debug;

use crate::element::tree::ElementTree;
use crate::error::Result;
use crate::fingerprint::fingerprint::Fingerprint;
use crate::issue::extract::extract_issues;
use crate::issue::issue::Issue;
use crate::issue::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    ItemAdded,
    ItemAlreadyExists,
    NotSupported,
}

/// A store whose issues can be enumerated and looked up.
pub trait IssueSource {
    /// Issues in insertion order.
    fn issues(&self) -> &[Issue];

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<&Issue>;

    fn len(&self) -> usize {
        self.issues().len()
    }

    fn is_empty(&self) -> bool {
        self.issues().is_empty()
    }
}

/// A store that accepts new issues and locations.
pub trait IssueSink: IssueSource {
    fn add_issue(&mut self, issue: Issue) -> AddResult;

    fn try_find_issue_mut(&mut self, fingerprint: &Fingerprint) -> Option<&mut Issue>;

    /// Record `location` on the issue with `fingerprint`. False when there is
    /// no such issue or the location is already known.
    fn add_location(&mut self, fingerprint: &Fingerprint, location: Location) -> bool {
        self.try_find_issue_mut(fingerprint)
            .is_some_and(|issue| issue.add_location(location))
    }
}

/// Issues plus a fingerprint index into them.
#[derive(Debug, Clone, Default)]
struct IssueIndex {
    issues: Vec<Issue>,
    by_fingerprint: HashMap<Fingerprint, usize>,
}

impl IssueIndex {
    fn insert(&mut self, issue: Issue) -> AddResult {
        if self.by_fingerprint.contains_key(issue.fingerprint()) {
            return AddResult::ItemAlreadyExists;
        }
        self.by_fingerprint
            .insert(issue.fingerprint().clone(), self.issues.len());
        self.issues.push(issue);
        AddResult::ItemAdded
    }

    fn get(&self, fingerprint: &Fingerprint) -> Option<&Issue> {
        self.by_fingerprint.get(fingerprint).map(|&i| &self.issues[i])
    }

    fn get_mut(&mut self, fingerprint: &Fingerprint) -> Option<&mut Issue> {
        let index = *self.by_fingerprint.get(fingerprint)?;
        self.issues.get_mut(index)
    }
}

/// Mutable store, starts empty and grows through [`IssueSink::add_issue`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueStore {
    index: IssueIndex,
}

impl InMemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueSource for InMemoryIssueStore {
    fn issues(&self) -> &[Issue] {
        &self.index.issues
    }

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<&Issue> {
        self.index.get(fingerprint)
    }
}

impl IssueSink for InMemoryIssueStore {
    fn add_issue(&mut self, issue: Issue) -> AddResult {
        self.index.insert(issue)
    }

    fn try_find_issue_mut(&mut self, fingerprint: &Fingerprint) -> Option<&mut Issue> {
        self.index.get_mut(fingerprint)
    }
}

/// Read-only store holding the issues of one scanned results file.
#[derive(Debug, Clone)]
pub struct OutputFileIssueStore {
    file_name: String,
    index: IssueIndex,
}

impl OutputFileIssueStore {
    /// Extract every failed or uncertain result of `tree` in one pass.
    pub fn new(file_name: &str, tree: &ElementTree) -> Result<Self> {
        let mut index = IssueIndex::default();
        for issue in extract_issues(file_name, tree)? {
            index.insert(issue);
        }
        debug!(
            "output file store for {}: {} issues",
            file_name,
            index.issues.len()
        );
        Ok(Self {
            file_name: file_name.to_string(),
            index,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl IssueSource for OutputFileIssueStore {
    fn issues(&self) -> &[Issue] {
        &self.index.issues
    }

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<&Issue> {
        self.index.get(fingerprint)
    }
}

/// A store chosen at runtime.
#[derive(Debug, Clone)]
pub enum IssueStore {
    ReadOnly(OutputFileIssueStore),
    Updatable(InMemoryIssueStore),
}

impl IssueStore {
    pub fn is_enumerable(&self) -> bool {
        true
    }

    pub fn is_updatable(&self) -> bool {
        matches!(self, IssueStore::Updatable(_))
    }

    pub fn source(&self) -> &dyn IssueSource {
        match self {
            IssueStore::ReadOnly(store) => store,
            IssueStore::Updatable(store) => store,
        }
    }

    pub fn sink(&mut self) -> Option<&mut InMemoryIssueStore> {
        match self {
            IssueStore::ReadOnly(_) => None,
            IssueStore::Updatable(store) => Some(store),
        }
    }

    pub fn issues(&self) -> &[Issue] {
        self.source().issues()
    }

    pub fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<&Issue> {
        self.source().try_find_issue(fingerprint)
    }

    /// `NotSupported` on a read-only store, which is left untouched.
    pub fn add_issue(&mut self, issue: Issue) -> AddResult {
        match self {
            IssueStore::ReadOnly(_) => AddResult::NotSupported,
            IssueStore::Updatable(store) => store.add_issue(issue),
        }
    }
}

impl From<OutputFileIssueStore> for IssueStore {
    fn from(store: OutputFileIssueStore) -> Self {
        IssueStore::ReadOnly(store)
    }
}

impl From<InMemoryIssueStore> for IssueStore {
    fn from(store: InMemoryIssueStore) -> Self {
        IssueStore::Updatable(store)
    }
}
