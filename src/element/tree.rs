use std::fmt;

use crate::element::control_type::{ControlType, PropertyId};
use crate::element::element_model::{Element, ElementId, PropertyValue, Rect, RuleResult};

/// Arena holding every element of one accessibility tree snapshot.
///
/// Elements reference each other by [`ElementId`]; the parent link is
/// navigational only. The first element added is the root.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    nodes: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_root(&mut self, control_type: ControlType) -> ElementId {
        let id = self.nodes.len();
        self.nodes.push(Element::new(id, control_type));
        id
    }

    /// Append a new child under `parent`.
    ///
    /// # Panics
    ///
    /// If `parent` is not an element of this tree.
    pub fn add_child(&mut self, parent: ElementId, control_type: ControlType) -> ElementId {
        let id = self.nodes.len();
        self.nodes[parent].children.push(id);
        let mut element = Element::new(id, control_type);
        element.parent = Some(parent);
        self.nodes.push(element);
        id
    }

    /// # Panics
    ///
    /// If `id` is not an element of this tree.
    pub fn set_property(&mut self, id: ElementId, property: PropertyId, value: PropertyValue) {
        self.nodes[id].properties.insert(property, value);
    }

    /// Record a supported pattern once.
    ///
    /// # Panics
    ///
    /// If `id` is not an element of this tree.
    pub fn add_pattern(&mut self, id: ElementId, pattern: i32) {
        let patterns = &mut self.nodes[id].patterns;
        if !patterns.contains(&pattern) {
            patterns.push(pattern);
        }
    }

    /// # Panics
    ///
    /// If `id` is not an element of this tree.
    pub fn update_name(&mut self, id: ElementId, name: &str) {
        self.set_property(id, PropertyId::Name, PropertyValue::Str(name.to_string()));
    }

    /// # Panics
    ///
    /// If `id` is not an element of this tree.
    pub fn update_bounding_rectangle(&mut self, id: ElementId, rect: Rect) {
        self.set_property(id, PropertyId::BoundingRectangle, PropertyValue::Rect(rect));
    }

    /// Replace the scan results attached to `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not an element of this tree.
    pub fn set_scan_results(&mut self, id: ElementId, results: Vec<RuleResult>) {
        self.nodes[id].scan_results = results;
    }

    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        (id < self.nodes.len()).then_some(ElementRef { tree: self, id })
    }

    pub fn root(&self) -> Option<ElementRef<'_>> {
        self.element(0)
    }

    /// Every element in insertion order (parents before children).
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |id| ElementRef { tree: self, id })
    }

    pub(crate) fn node(&self, id: ElementId) -> &Element {
        &self.nodes[id]
    }
}

/// Read-only, copyable view of one element with typed accessors and navigation.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a ElementTree,
    id: ElementId,
}

impl<'a> ElementRef<'a> {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tree(&self) -> &'a ElementTree {
        self.tree
    }

    pub fn data(&self) -> &'a Element {
        self.tree.node(self.id)
    }

    pub fn control_type(&self) -> ControlType {
        self.data().control_type
    }

    pub fn property(&self, id: PropertyId) -> Option<&'a PropertyValue> {
        self.data().property(id)
    }

    pub fn string_property(&self, id: PropertyId) -> Option<&'a str> {
        self.data().string_property(id)
    }

    pub fn bool_property(&self, id: PropertyId) -> Option<bool> {
        self.data().bool_property(id)
    }

    pub fn int_property(&self, id: PropertyId) -> Option<i32> {
        self.data().int_property(id)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.string_property(PropertyId::Name)
    }

    pub fn class_name(&self) -> Option<&'a str> {
        self.string_property(PropertyId::ClassName)
    }

    pub fn automation_id(&self) -> Option<&'a str> {
        self.string_property(PropertyId::AutomationId)
    }

    pub fn framework_id(&self) -> Option<&'a str> {
        self.string_property(PropertyId::FrameworkId)
    }

    pub fn localized_control_type(&self) -> Option<&'a str> {
        self.string_property(PropertyId::LocalizedControlType)
    }

    pub fn accelerator_key(&self) -> Option<&'a str> {
        self.string_property(PropertyId::AcceleratorKey)
    }

    pub fn access_key(&self) -> Option<&'a str> {
        self.string_property(PropertyId::AccessKey)
    }

    pub fn help_text(&self) -> Option<&'a str> {
        self.string_property(PropertyId::HelpText)
    }

    /// Culture is stored as an LCID
    pub fn culture(&self) -> Option<i32> {
        self.int_property(PropertyId::Culture)
    }

    pub fn is_keyboard_focusable(&self) -> bool {
        self.bool_property(PropertyId::IsKeyboardFocusable).unwrap_or(false)
    }

    pub fn is_control_element(&self) -> bool {
        self.bool_property(PropertyId::IsControlElement).unwrap_or(false)
    }

    pub fn is_content_element(&self) -> bool {
        self.bool_property(PropertyId::IsContentElement).unwrap_or(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.bool_property(PropertyId::IsEnabled).unwrap_or(false)
    }

    pub fn is_offscreen(&self) -> bool {
        self.bool_property(PropertyId::IsOffscreen).unwrap_or(false)
    }

    pub fn bounding_rectangle(&self) -> Option<Rect> {
        self.property(PropertyId::BoundingRectangle).and_then(PropertyValue::as_rect)
    }

    pub fn has_pattern(&self, pattern: i32) -> bool {
        self.data().patterns.contains(&pattern)
    }

    pub fn scan_results(&self) -> &'a [RuleResult] {
        &self.data().scan_results
    }

    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.data().parent.map(|id| ElementRef { tree: self.tree, id })
    }

    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        let tree = self.tree;
        self.data().children.iter().map(move |&id| ElementRef { tree, id })
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// Children of the parent, excluding `self`. Empty for the root.
    pub fn siblings(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        let me = self.id;
        self.parent()
            .into_iter()
            .flat_map(|p| p.children())
            .filter(move |e| e.id != me)
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors { next: self.parent() }
    }

    /// Depth-first pre-order walk below `self`.
    pub fn descendants(&self) -> Descendants<'a> {
        let mut stack: Vec<ElementRef<'a>> = self.children().collect();
        stack.reverse();
        Descendants { stack }
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("control_type", &self.control_type())
            .field("name", &self.name())
            .finish()
    }
}

pub struct Ancestors<'a> {
    next: Option<ElementRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

pub struct Descendants<'a> {
    stack: Vec<ElementRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let mut children: Vec<_> = current.children().collect();
        children.reverse();
        self.stack.extend(children);
        Some(current)
    }
}
