use log::debug;

use crate::condition::condition::Condition;
use crate::condition::property_conditions::{
    BOUNDING_RECTANGLE, CONTROL_TYPE, IS_CONTENT_ELEMENT, IS_CONTROL_ELEMENT, IS_ENABLED,
    IS_KEYBOARD_FOCUSABLE, IS_OFFSCREEN, LOCALIZED_CONTROL_TYPE, NAME, control_type_is,
    name_includes_control_type, name_includes_localized_control_type,
};
use crate::condition::relationships::parent;
use crate::element::control_type::ControlType;
use crate::rules::rule_model::{Rule, RuleId};
use crate::rules::views::{control_view, structure_for};

const MAX_NAME_LENGTH: usize = 512;

const NAMED_TYPES: &[ControlType] = &[
    ControlType::Button,
    ControlType::CheckBox,
    ControlType::ComboBox,
    ControlType::Edit,
    ControlType::Hyperlink,
    ControlType::Image,
    ControlType::ListItem,
    ControlType::MenuItem,
    ControlType::RadioButton,
    ControlType::Slider,
    ControlType::SplitButton,
    ControlType::TabItem,
    ControlType::TreeItem,
    ControlType::Window,
];

const INTERACTIVE_TYPES: &[ControlType] = &[
    ControlType::Button,
    ControlType::CheckBox,
    ControlType::ComboBox,
    ControlType::Edit,
    ControlType::Hyperlink,
    ControlType::RadioButton,
    ControlType::Slider,
    ControlType::SplitButton,
];

const CONTENT_TYPES: &[ControlType] = &[
    ControlType::Button,
    ControlType::CheckBox,
    ControlType::ComboBox,
    ControlType::Edit,
    ControlType::Hyperlink,
    ControlType::Image,
    ControlType::List,
    ControlType::ListItem,
    ControlType::RadioButton,
    ControlType::Tab,
    ControlType::TabItem,
    ControlType::Tree,
    ControlType::TreeItem,
];

fn requires_name() -> Condition {
    control_view() & CONTROL_TYPE.is_one_of(NAMED_TYPES)
}

fn has_name() -> Condition {
    !NAME.is_null_or_whitespace()
}

fn onscreen_control() -> Condition {
    control_view() & !IS_OFFSCREEN.is_true()
}

/// No focusable sibling shares this element's control type and name.
fn unique_among_siblings() -> Condition {
    Condition::from_fn("NoFocusableSiblingWithSameTypeAndName", |e| {
        !e.siblings().any(|s| {
            s.is_keyboard_focusable()
                && s.control_type() == e.control_type()
                && s.name() == e.name()
        })
    })
}

/// The ordered collection of rules a scan runs.
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    rules: Vec<Rule>,
}

impl Default for RuleLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleLibrary {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn builtin() -> Self {
        let mut rules = vec![
            Rule::new(RuleId::NameNotNull, requires_name(), NAME.exists())
                .with_standard("WCAG 4.1.2")
                .with_description("The Name property of a focusable element must not be null.")
                .with_how_to_fix("Provide a UI Automation Name that describes the element's purpose."),
            Rule::new(RuleId::NameNotEmpty, requires_name() & NAME.exists(), !NAME.is_empty())
                .with_standard("WCAG 4.1.2")
                .with_description("The Name property must not be an empty string.")
                .with_how_to_fix("Provide a non-empty Name."),
            Rule::new(
                RuleId::NameNotWhiteSpace,
                requires_name() & NAME.exists() & !NAME.is_empty(),
                !NAME.is_whitespace(),
            )
            .with_standard("WCAG 4.1.2")
            .with_description("The Name property must not consist only of whitespace.")
            .with_how_to_fix("Provide a Name with visible characters."),
            Rule::new(
                RuleId::NameReasonableLength,
                control_view() & NAME.exists(),
                NAME.length().at_most(MAX_NAME_LENGTH),
            )
            .with_description("The Name property must not be longer than 512 characters.")
            .with_how_to_fix("Shorten the Name; move long text to HelpText."),
            Rule::new(
                RuleId::NameExcludesControlType,
                control_view() & has_name(),
                !name_includes_control_type(),
            )
            .uncertain()
            .with_description("The Name should not include the element's control type.")
            .with_how_to_fix("Remove the control type from the Name; screen readers announce it."),
            Rule::new(
                RuleId::NameExcludesLocalizedControlType,
                control_view() & has_name(),
                !name_includes_localized_control_type(),
            )
            .uncertain()
            .with_description("The Name should not include the localized control type.")
            .with_how_to_fix("Remove the localized control type from the Name."),
            Rule::new(
                RuleId::LocalizedControlTypeNotEmpty,
                control_view() & LOCALIZED_CONTROL_TYPE.exists(),
                !LOCALIZED_CONTROL_TYPE.is_empty(),
            )
            .with_standard("WCAG 4.1.2")
            .with_description("The LocalizedControlType property must not be empty.")
            .with_how_to_fix("Provide a LocalizedControlType or rely on the framework default."),
            Rule::new(
                RuleId::LocalizedControlTypeNotWhiteSpace,
                control_view() & LOCALIZED_CONTROL_TYPE.exists() & !LOCALIZED_CONTROL_TYPE.is_empty(),
                !LOCALIZED_CONTROL_TYPE.is_whitespace(),
            )
            .with_standard("WCAG 4.1.2")
            .with_description("The LocalizedControlType property must not be whitespace.")
            .with_how_to_fix("Provide a meaningful LocalizedControlType."),
            Rule::new(RuleId::BoundingRectangleNotNull, onscreen_control(), BOUNDING_RECTANGLE.exists())
                .with_description("An on-screen element must have a bounding rectangle.")
                .with_how_to_fix("Expose the element's screen location."),
            Rule::new(
                RuleId::BoundingRectangleNotAllZeros,
                onscreen_control() & BOUNDING_RECTANGLE.exists(),
                !BOUNDING_RECTANGLE.is_all_zeros(),
            )
            .with_description("An on-screen element's bounding rectangle must not be all zeros.")
            .with_how_to_fix("Report the element's real screen location or mark it offscreen."),
            Rule::new(
                RuleId::BoundingRectangleContainedInParent,
                onscreen_control() & BOUNDING_RECTANGLE.is_valid() & parent(BOUNDING_RECTANGLE.is_valid()),
                BOUNDING_RECTANGLE.contained_in_parent(),
            )
            .uncertain()
            .with_description("An element should be located inside its parent's bounding rectangle.")
            .with_how_to_fix("Check the element's reported location and its parent."),
            Rule::new(
                RuleId::IsKeyboardFocusableShouldBeTrue,
                onscreen_control() & IS_ENABLED.is_true() & CONTROL_TYPE.is_one_of(INTERACTIVE_TYPES),
                IS_KEYBOARD_FOCUSABLE.is_true(),
            )
            .with_standard("WCAG 2.1.1")
            .with_description("An enabled interactive element must be keyboard focusable.")
            .with_how_to_fix("Make the element reachable with the keyboard."),
            Rule::new(
                RuleId::IsControlElementTrueRequired,
                IS_KEYBOARD_FOCUSABLE.is_true() & CONTROL_TYPE.is_one_of(INTERACTIVE_TYPES),
                IS_CONTROL_ELEMENT.is_true(),
            )
            .with_standard("WCAG 4.1.2")
            .with_description("A focusable interactive element must be in the control view.")
            .with_how_to_fix("Set IsControlElement to true."),
            Rule::new(
                RuleId::IsContentElementTrueOptional,
                control_view() & CONTROL_TYPE.is_one_of(CONTENT_TYPES),
                IS_CONTENT_ELEMENT.is_true(),
            )
            .uncertain()
            .with_description("Elements of this control type are expected in the content view.")
            .with_how_to_fix("Set IsContentElement to true unless the element is purely decorative."),
            Rule::new(
                RuleId::SiblingUniqueAndFocusable,
                control_view() & IS_KEYBOARD_FOCUSABLE.is_true() & has_name(),
                unique_among_siblings(),
            )
            .with_standard("WCAG 4.1.2")
            .with_description("Focusable siblings of the same control type must have distinct names.")
            .with_how_to_fix("Give each sibling a unique Name."),
        ];

        let structures = [
            (RuleId::ControlViewButtonStructure, ControlType::Button),
            (RuleId::ControlViewListStructure, ControlType::List),
            (RuleId::ListItemParentIsList, ControlType::ListItem),
            (RuleId::TabItemParentIsTab, ControlType::TabItem),
            (RuleId::TreeItemParentIsTree, ControlType::TreeItem),
        ];
        for (id, control_type) in structures {
            if let Some(structure) = structure_for(control_type) {
                rules.push(
                    Rule::new(id, control_view() & control_type_is(control_type), structure)
                        .uncertain()
                        .with_description(&format!(
                            "A {} must follow the expected control view structure.",
                            control_type
                        ))
                        .with_how_to_fix("Check the element's children and parent control types."),
                );
            }
        }

        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn disable(&mut self, ids: &[RuleId]) {
        let before = self.rules.len();
        self.rules.retain(|r| !ids.contains(&r.id));
        debug!("disabled {} rule(s)", before - self.rules.len());
    }
}
