//! Rule definition and evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::condition::Condition;
use crate::element::control_type::PropertyId;
use crate::element::element_model::ScanStatus;
use crate::element::tree::ElementRef;

macro_rules! rule_ids {
    ($($name:ident),+ $(,)?) => {
        /// Identifier of a built-in accessibility rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum RuleId {
            $($name),+
        }

        impl RuleId {
            pub const ALL: &'static [RuleId] = &[$(RuleId::$name),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(RuleId::$name => stringify!($name)),+
                }
            }
        }
    };
}

rule_ids! {
    NameNotNull,
    NameNotEmpty,
    NameNotWhiteSpace,
    NameReasonableLength,
    NameExcludesControlType,
    NameExcludesLocalizedControlType,
    LocalizedControlTypeNotEmpty,
    LocalizedControlTypeNotWhiteSpace,
    BoundingRectangleNotNull,
    BoundingRectangleNotAllZeros,
    BoundingRectangleContainedInParent,
    IsKeyboardFocusableShouldBeTrue,
    IsControlElementTrueRequired,
    IsContentElementTrueOptional,
    SiblingUniqueAndFocusable,
    ControlViewButtonStructure,
    ControlViewListStructure,
    ListItemParentIsList,
    TabItemParentIsTab,
    TreeItemParentIsTree,
}

impl RuleId {
    /// The element property a rule is about; drives which boolean
    /// properties end up in an issue fingerprint.
    pub fn property_id(self) -> Option<PropertyId> {
        use RuleId::*;
        match self {
            NameNotNull
            | NameNotEmpty
            | NameNotWhiteSpace
            | NameReasonableLength
            | NameExcludesControlType
            | NameExcludesLocalizedControlType
            | SiblingUniqueAndFocusable => Some(PropertyId::Name),
            LocalizedControlTypeNotEmpty | LocalizedControlTypeNotWhiteSpace => {
                Some(PropertyId::LocalizedControlType)
            }
            BoundingRectangleNotNull
            | BoundingRectangleNotAllZeros
            | BoundingRectangleContainedInParent => Some(PropertyId::BoundingRectangle),
            IsKeyboardFocusableShouldBeTrue => Some(PropertyId::IsKeyboardFocusable),
            IsControlElementTrueRequired => Some(PropertyId::IsControlElement),
            IsContentElementTrueOptional => Some(PropertyId::IsContentElement),
            ControlViewButtonStructure
            | ControlViewListStructure
            | ListItemParentIsList
            | TabItemParentIsTab
            | TreeItemParentIsTree => None,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown rule: {}", s))
    }
}

/// A named accessibility requirement.
///
/// `condition` selects the elements the rule applies to; `passes` is the
/// requirement itself. An applicable element that does not satisfy
/// `passes` gets `failure_status`.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: RuleId,
    pub description: String,
    pub how_to_fix: String,
    pub standard: String,
    /// Property the rule is about, if any
    pub property_id: Option<PropertyId>,
    pub condition: Condition,
    pub passes: Condition,
    pub failure_status: ScanStatus,
}

impl Rule {
    pub fn new(id: RuleId, condition: Condition, passes: Condition) -> Self {
        Self {
            id,
            description: String::new(),
            how_to_fix: String::new(),
            standard: String::new(),
            property_id: id.property_id(),
            condition,
            passes,
            failure_status: ScanStatus::Fail,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_how_to_fix(mut self, how_to_fix: &str) -> Self {
        self.how_to_fix = how_to_fix.to_string();
        self
    }

    pub fn with_standard(mut self, standard: &str) -> Self {
        self.standard = standard.to_string();
        self
    }

    pub fn with_property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    /// Report violations as `Uncertain` rather than `Fail`.
    pub fn uncertain(mut self) -> Self {
        self.failure_status = ScanStatus::Uncertain;
        self
    }

    pub fn applies_to(&self, element: ElementRef<'_>) -> bool {
        self.condition.matches_element(element)
    }

    /// `None` when the rule does not apply to the element.
    pub fn evaluate(&self, element: ElementRef<'_>) -> Option<ScanStatus> {
        if !self.applies_to(element) {
            return None;
        }
        if self.passes.matches_element(element) {
            Some(ScanStatus::Pass)
        } else {
            Some(self.failure_status)
        }
    }
}
