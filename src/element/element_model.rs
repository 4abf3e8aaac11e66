use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::control_type::{ControlType, PropertyId};

/// Index of an element inside its [`ElementTree`](crate::element::tree::ElementTree).
pub type ElementId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Widened so that edges at opposite ends of the i32 range cannot overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// Zero or negative area
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn is_all_zeros(&self) -> bool {
        *self == Rect::default()
    }

    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[l={},t={},r={},b={}]", self.left, self.top, self.right, self.bottom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Str(String),
    Rect(Rect),
    IntList(Vec<i32>),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            PropertyValue::Rect(r) => Some(*r),
            _ => None,
        }
    }
}

/// Outcome of evaluating one rule against one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScanStatus {
    Pass,
    Uncertain,
    Fail,
    NoResult,
    ScanNotSupported,
}

impl ScanStatus {
    /// Statuses that turn into issues
    pub fn is_issue(self) -> bool {
        matches!(self, ScanStatus::Fail | ScanStatus::Uncertain)
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: crate::rules::rule_model::RuleId,
    pub status: ScanStatus,
}

/// A single node of an accessibility tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub control_type: ControlType,
    pub properties: BTreeMap<PropertyId, PropertyValue>,
    pub patterns: Vec<i32>,

    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,

    pub scan_results: Vec<RuleResult>,
}

impl Element {
    pub fn new(id: ElementId, control_type: ControlType) -> Self {
        Self {
            id,
            control_type,
            properties: BTreeMap::new(),
            patterns: vec![],
            parent: None,
            children: vec![],
            scan_results: vec![],
        }
    }

    pub fn property(&self, id: PropertyId) -> Option<&PropertyValue> {
        self.properties.get(&id)
    }

    pub fn string_property(&self, id: PropertyId) -> Option<&str> {
        self.property(id).and_then(PropertyValue::as_str)
    }

    pub fn bool_property(&self, id: PropertyId) -> Option<bool> {
        self.property(id).and_then(PropertyValue::as_bool)
    }

    pub fn int_property(&self, id: PropertyId) -> Option<i32> {
        self.property(id).and_then(PropertyValue::as_int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_geometry() {
        let r = Rect::new(10, 10, 30, 50);
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 40);
        assert!(!r.is_empty());
        assert!(Rect::new(5, 5, 5, 20).is_empty());
        assert!(Rect::default().is_all_zeros());
        assert!(Rect::new(0, 0, 100, 100).contains(&r));
        assert!(!r.contains(&Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn extreme_edges_do_not_overflow() {
        let wide = Rect::new(-2_000_000_000, -2_000_000_000, 2_000_000_000, 2_000_000_000);
        assert_eq!(wide.width(), 4_000_000_000);
        assert_eq!(wide.height(), 4_000_000_000);
        assert!(!wide.is_empty());

        let inverted = Rect::new(i32::MAX, 0, i32::MIN, 10);
        assert!(inverted.is_empty());
    }

    #[test]
    fn only_fail_and_uncertain_are_issues() {
        assert!(ScanStatus::Fail.is_issue());
        assert!(ScanStatus::Uncertain.is_issue());
        assert!(!ScanStatus::Pass.is_issue());
        assert!(!ScanStatus::NoResult.is_issue());
        assert!(!ScanStatus::ScanNotSupported.is_issue());
    }

    #[test]
    fn property_value_accessors() {
        assert_eq!(PropertyValue::Str("x".into()).as_str(), Some("x"));
        assert_eq!(PropertyValue::Int(3).as_str(), None);
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Int(7).as_int(), Some(7));
    }
}
