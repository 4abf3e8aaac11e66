//! Accessibility rule checks over UI element trees, with stable issue
//! fingerprints for deduplicating results across scans.
//!
//! The pipeline is: build or load an [`ElementTree`], run a
//! [`RuleLibrary`] over it with [`RuleRunner`], then extract the failing
//! results into an issue store keyed by [`Fingerprint`]. Stores from
//! several scans merge into one.

pub mod error;

pub mod element {
    pub mod builder;
    pub mod control_type;
    pub mod element_model;
    pub mod snapshot;
    pub mod tree;
}

pub mod condition {
    #[allow(clippy::module_inception)]
    pub mod condition;
    pub mod property;
    pub mod property_conditions;
    pub mod relationships;
    pub mod value;
}

pub mod rules {
    pub mod library;
    pub mod rule_model;
    pub mod runner;
    pub mod views;
}

pub mod fingerprint {
    pub mod contribution;
    #[allow(clippy::module_inception)]
    pub mod fingerprint;
}

pub mod issue {
    pub mod extract;
    #[allow(clippy::module_inception)]
    pub mod issue;
    pub mod location;
    pub mod merge;
    pub mod store;
}

pub mod report {
    pub mod console;
    pub mod json;
    pub mod report_model;
}

pub mod cli {
    pub mod commands;
    pub mod config;
}

pub use condition::condition::{Condition, EvalContext};
pub use element::builder::ElementBuilder;
pub use element::control_type::{ControlType, PropertyId};
pub use element::element_model::{Rect, RuleResult, ScanStatus};
pub use element::tree::{ElementRef, ElementTree};
pub use error::{InspectError, Result};
pub use fingerprint::fingerprint::Fingerprint;
pub use issue::issue::Issue;
pub use issue::location::Location;
pub use issue::store::{AddResult, InMemoryIssueStore, IssueSink, IssueSource, IssueStore, OutputFileIssueStore};
pub use rules::library::RuleLibrary;
pub use rules::rule_model::{Rule, RuleId};
pub use rules::runner::RuleRunner;
