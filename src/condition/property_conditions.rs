//! Ready-made property wrappers and the element conditions built on them.

use std::fmt;

use crate::condition::condition::Condition;
use crate::condition::property::{
    BoolProperty, EnumProperty, IntProperty, RectangleProperty, StringProperty,
};
use crate::element::control_type::{ControlType, PropertyId};

pub const NAME: StringProperty = StringProperty::new(PropertyId::Name);
pub const CLASS_NAME: StringProperty = StringProperty::new(PropertyId::ClassName);
pub const AUTOMATION_ID: StringProperty = StringProperty::new(PropertyId::AutomationId);
pub const LOCALIZED_CONTROL_TYPE: StringProperty =
    StringProperty::new(PropertyId::LocalizedControlType);
pub const FRAMEWORK_ID: StringProperty = StringProperty::new(PropertyId::FrameworkId);
pub const HELP_TEXT: StringProperty = StringProperty::new(PropertyId::HelpText);
pub const ACCELERATOR_KEY: StringProperty = StringProperty::new(PropertyId::AcceleratorKey);
pub const ACCESS_KEY: StringProperty = StringProperty::new(PropertyId::AccessKey);

pub const CULTURE: IntProperty = IntProperty::new(PropertyId::Culture);
pub const POSITION_IN_SET: IntProperty = IntProperty::new(PropertyId::PositionInSet);
pub const SIZE_OF_SET: IntProperty = IntProperty::new(PropertyId::SizeOfSet);
pub const HEADING_LEVEL: IntProperty = IntProperty::new(PropertyId::HeadingLevel);

pub const IS_KEYBOARD_FOCUSABLE: BoolProperty = BoolProperty::new(PropertyId::IsKeyboardFocusable);
pub const IS_CONTROL_ELEMENT: BoolProperty = BoolProperty::new(PropertyId::IsControlElement);
pub const IS_CONTENT_ELEMENT: BoolProperty = BoolProperty::new(PropertyId::IsContentElement);
pub const IS_ENABLED: BoolProperty = BoolProperty::new(PropertyId::IsEnabled);
pub const IS_OFFSCREEN: BoolProperty = BoolProperty::new(PropertyId::IsOffscreen);
pub const IS_PASSWORD: BoolProperty = BoolProperty::new(PropertyId::IsPassword);

pub const BOUNDING_RECTANGLE: RectangleProperty =
    RectangleProperty::new(PropertyId::BoundingRectangle);

pub const CONTROL_TYPE: EnumProperty<ControlType> =
    EnumProperty::new("ControlType", |e| Some(e.control_type()));

pub const ORIENTATION: EnumProperty<Orientation> = EnumProperty::new("Orientation", |e| {
    e.int_property(PropertyId::Orientation).and_then(Orientation::from_id)
});

/// Class name of the desktop root window.
pub const DESKTOP_CLASS_NAME: &str = "#32769";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    None,
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Orientation::None),
            1 => Some(Orientation::Horizontal),
            2 => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub fn control_type_is(control_type: ControlType) -> Condition {
    CONTROL_TYPE.is(control_type)
}

pub fn has_pattern(pattern: i32) -> Condition {
    Condition::from_fn(format!("has pattern {}", pattern), move |e| e.has_pattern(pattern))
}

/// The desktop root: a parentless pane with the desktop class name.
pub fn is_desktop() -> Condition {
    Condition::from_fn("IsDesktop", |e| {
        e.parent().is_none()
            && e.control_type() == ControlType::Pane
            && e.class_name() == Some(DESKTOP_CLASS_NAME)
    })
}

pub fn framework_is(framework: &str) -> Condition {
    FRAMEWORK_ID.is_equal_to(framework)
}

pub fn is_win32() -> Condition {
    framework_is("Win32")
}

pub fn is_wpf() -> Condition {
    framework_is("WPF")
}

pub fn is_xaml() -> Condition {
    framework_is("XAML")
}

pub fn is_winforms() -> Condition {
    framework_is("WinForm")
}

/// Keyboard focusable and enabled, i.e. reachable with Tab.
pub fn is_tabbable() -> Condition {
    (IS_KEYBOARD_FOCUSABLE.is_true() & IS_ENABLED.is_true()).described_as("IsTabbable")
}

/// Name contains the control type's own name (e.g. "OK button").
pub fn name_includes_control_type() -> Condition {
    Condition::from_fn("Name includes ControlType", |e| {
        let Some(name) = e.name() else {
            return false;
        };
        name.to_lowercase()
            .contains(&e.control_type().name().to_lowercase())
    })
}

pub fn name_includes_localized_control_type() -> Condition {
    Condition::from_fn("Name includes LocalizedControlType", |e| {
        match (e.name(), e.localized_control_type()) {
            (Some(name), Some(lct)) if !lct.trim().is_empty() => {
                name.to_lowercase().contains(&lct.trim().to_lowercase())
            }
            _ => false,
        }
    })
}
