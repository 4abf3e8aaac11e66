//! Stable identities for rule results.
//!
//! A fingerprint is the sorted set of contributions derived from an
//! element, its ancestry, a rule and a scan status. Equal inputs always
//! yield equal fingerprints, which is what lets issues found in different
//! scans be merged.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::condition::property_conditions::is_desktop;
use crate::element::control_type::PropertyId;
use crate::element::element_model::ScanStatus;
use crate::element::tree::ElementRef;
use crate::error::Result;
use crate::fingerprint::contribution::FingerprintContribution;
use crate::rules::rule_model::RuleId;

/// How far up the ancestry a fingerprint looks.
pub const MAX_ANCESTOR_LEVELS: usize = 10;

pub const RULE_ID_KEY: &str = "RuleId";
pub const LEVEL_KEY: &str = "Level";

const CHAIN_SEPARATOR: &str = "|";

/// Properties recorded along the ancestor chain, in contribution-key form.
const CHAIN_PROPERTIES: &[ChainProperty] = &[
    ChainProperty::Name,
    ChainProperty::ClassName,
    ChainProperty::ControlType,
    ChainProperty::LocalizedControlType,
    ChainProperty::FrameworkId,
    ChainProperty::AcceleratorKey,
    ChainProperty::AccessKey,
    ChainProperty::AutomationId,
    ChainProperty::Culture,
];

/// Boolean properties included only when the rule is about them.
const RULE_SPECIFIC_PROPERTIES: &[PropertyId] = &[
    PropertyId::IsControlElement,
    PropertyId::IsContentElement,
    PropertyId::IsKeyboardFocusable,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainProperty {
    Name,
    ClassName,
    ControlType,
    LocalizedControlType,
    FrameworkId,
    AcceleratorKey,
    AccessKey,
    AutomationId,
    Culture,
}

impl ChainProperty {
    fn key(self) -> &'static str {
        match self {
            ChainProperty::Name => "Name",
            ChainProperty::ClassName => "ClassName",
            ChainProperty::ControlType => "ControlType",
            ChainProperty::LocalizedControlType => "LocalizedControlType",
            ChainProperty::FrameworkId => "FrameworkId",
            ChainProperty::AcceleratorKey => "AcceleratorKey",
            ChainProperty::AccessKey => "AccessKey",
            ChainProperty::AutomationId => "AutomationId",
            ChainProperty::Culture => "Culture",
        }
    }

    fn value(self, element: ElementRef<'_>) -> Option<String> {
        let text = match self {
            ChainProperty::Name => element.name().map(str::to_string),
            ChainProperty::ClassName => element.class_name().map(str::to_string),
            ChainProperty::ControlType => {
                let ct = element.control_type();
                Some(format!("{}({})", ct.name(), ct.id()))
            }
            ChainProperty::LocalizedControlType => {
                element.localized_control_type().map(str::to_string)
            }
            ChainProperty::FrameworkId => element.framework_id().map(str::to_string),
            ChainProperty::AcceleratorKey => element.accelerator_key().map(str::to_string),
            ChainProperty::AccessKey => element.access_key().map(str::to_string),
            ChainProperty::AutomationId => element.automation_id().map(str::to_string),
            ChainProperty::Culture => element.culture().map(|c| c.to_string()),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// Severity label recorded for a scan status.
pub fn level_for(status: ScanStatus) -> &'static str {
    match status {
        ScanStatus::Fail => "error",
        ScanStatus::NoResult | ScanStatus::Uncertain => "open",
        ScanStatus::ScanNotSupported => "note",
        ScanStatus::Pass => "pass",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Fingerprint {
    contributions: BTreeSet<FingerprintContribution>,
    #[serde(skip)]
    hash_code: i32,
}

impl Fingerprint {
    pub fn new(element: ElementRef<'_>, rule_id: RuleId, status: ScanStatus) -> Result<Self> {
        let mut contributions = vec![
            FingerprintContribution::new(RULE_ID_KEY, rule_id.name())?,
            FingerprintContribution::new(LEVEL_KEY, level_for(status))?,
        ];

        if let Some(property) = rule_id.property_id() {
            if RULE_SPECIFIC_PROPERTIES.contains(&property) {
                let value = element.bool_property(property).unwrap_or(false);
                contributions.push(FingerprintContribution::new(
                    &property.to_string(),
                    if value { "True" } else { "False" },
                )?);
            }
        }

        let chain = ancestor_chain(element);
        for property in CHAIN_PROPERTIES {
            let values: Vec<String> = chain
                .iter()
                .enumerate()
                .filter(|(level, e)| {
                    // The topmost ancestor's name is usually a window title that
                    // changes from run to run.
                    !(*property == ChainProperty::Name && *level > 0 && is_top_level(**e))
                })
                .filter_map(|(_, e)| property.value(*e))
                .collect();

            if !values.is_empty() {
                contributions.push(FingerprintContribution::new(
                    property.key(),
                    &values.join(CHAIN_SEPARATOR),
                )?);
            }
        }

        Ok(Self::from_contributions(contributions))
    }

    pub fn from_contributions(contributions: impl IntoIterator<Item = FingerprintContribution>) -> Self {
        let contributions: BTreeSet<_> = contributions.into_iter().collect();
        let hash_code = contributions
            .iter()
            .fold(17i32, |h, c| h.wrapping_mul(31).wrapping_add(c.hash_code()));
        Self {
            contributions,
            hash_code,
        }
    }

    pub fn contributions(&self) -> impl Iterator<Item = &FingerprintContribution> {
        self.contributions.iter()
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.contributions
            .iter()
            .find(|c| c.key() == key)
            .map(FingerprintContribution::value)
    }

    /// Combining hash over the sorted contributions.
    pub fn hash_code(&self) -> i32 {
        self.hash_code
    }

    /// Contribution count first, then hash code.
    ///
    /// Two fingerprints with different contents can compare `Equal` here when
    /// their counts and hash codes collide. The `Ord` impl breaks that tie on
    /// content and is the one sorted collections should rely on.
    pub fn compare_to(&self, other: &Fingerprint) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then(self.hash_code.cmp(&other.hash_code))
    }

    /// Hex sha1 over the canonical contribution list.
    pub fn digest(&self) -> String {
        let mut hasher = Sha1::new();
        for c in &self.contributions {
            hasher.update(c.key().as_bytes());
            hasher.update(b"=");
            hasher.update(c.value().as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

/// The element and its ancestors, stopping below the desktop root and
/// after [`MAX_ANCESTOR_LEVELS`] levels.
fn ancestor_chain(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let desktop = is_desktop();
    std::iter::once(element)
        .chain(element.ancestors())
        .take_while(|e| !desktop.matches_element(*e))
        .take(MAX_ANCESTOR_LEVELS)
        .collect()
}

fn is_top_level(element: ElementRef<'_>) -> bool {
    match element.parent() {
        None => true,
        Some(parent) => is_desktop().matches_element(parent),
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.hash_code == other.hash_code && self.contributions == other.contributions
    }
}

impl Eq for Fingerprint {}

impl Hash for Fingerprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code);
    }
}

impl PartialOrd for Fingerprint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fingerprint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
            .then_with(|| self.contributions.cmp(&other.contributions))
    }
}
