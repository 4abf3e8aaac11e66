use crate::element::control_type::{ControlType, PropertyId};
use crate::element::element_model::{ElementId, PropertyValue, Rect};
use crate::element::tree::ElementTree;

/// Fluent description of an element subtree, materialised with [`ElementBuilder::build`].
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    control_type: ControlType,
    properties: Vec<(PropertyId, PropertyValue)>,
    patterns: Vec<i32>,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            properties: vec![],
            patterns: vec![],
            children: vec![],
        }
    }

    pub fn property(mut self, id: PropertyId, value: PropertyValue) -> Self {
        self.properties.push((id, value));
        self
    }

    fn string(self, id: PropertyId, value: &str) -> Self {
        self.property(id, PropertyValue::Str(value.to_string()))
    }

    fn flag(self, id: PropertyId, value: bool) -> Self {
        self.property(id, PropertyValue::Bool(value))
    }

    pub fn name(self, name: &str) -> Self {
        self.string(PropertyId::Name, name)
    }

    pub fn class_name(self, class_name: &str) -> Self {
        self.string(PropertyId::ClassName, class_name)
    }

    pub fn automation_id(self, automation_id: &str) -> Self {
        self.string(PropertyId::AutomationId, automation_id)
    }

    pub fn framework_id(self, framework_id: &str) -> Self {
        self.string(PropertyId::FrameworkId, framework_id)
    }

    pub fn localized_control_type(self, value: &str) -> Self {
        self.string(PropertyId::LocalizedControlType, value)
    }

    pub fn accelerator_key(self, value: &str) -> Self {
        self.string(PropertyId::AcceleratorKey, value)
    }

    pub fn access_key(self, value: &str) -> Self {
        self.string(PropertyId::AccessKey, value)
    }

    pub fn culture(self, lcid: i32) -> Self {
        self.property(PropertyId::Culture, PropertyValue::Int(lcid))
    }

    pub fn bounding_rectangle(self, rect: Rect) -> Self {
        self.property(PropertyId::BoundingRectangle, PropertyValue::Rect(rect))
    }

    pub fn keyboard_focusable(self, value: bool) -> Self {
        self.flag(PropertyId::IsKeyboardFocusable, value)
    }

    pub fn control_element(self, value: bool) -> Self {
        self.flag(PropertyId::IsControlElement, value)
    }

    pub fn content_element(self, value: bool) -> Self {
        self.flag(PropertyId::IsContentElement, value)
    }

    pub fn enabled(self, value: bool) -> Self {
        self.flag(PropertyId::IsEnabled, value)
    }

    pub fn offscreen(self, value: bool) -> Self {
        self.flag(PropertyId::IsOffscreen, value)
    }

    pub fn pattern(mut self, pattern: i32) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }

    /// Build a fresh tree rooted at this element (root id 0, pre-order ids).
    pub fn build(self) -> ElementTree {
        let mut tree = ElementTree::new();
        let root = tree.add_root(self.control_type);
        self.fill(&mut tree, root);
        tree
    }

    fn fill(self, tree: &mut ElementTree, id: ElementId) {
        for (property, value) in self.properties {
            tree.set_property(id, property, value);
        }
        for pattern in self.patterns {
            tree.add_pattern(id, pattern);
        }
        for child in self.children {
            let child_id = tree.add_child(id, child.control_type);
            child.fill(tree, child_id);
        }
    }
}
