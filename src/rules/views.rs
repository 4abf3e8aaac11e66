//! Control view / content view membership and per-control-type structure.

use crate::condition::condition::Condition;
use crate::condition::property_conditions::{
    CONTROL_TYPE, IS_CONTENT_ELEMENT, IS_CONTROL_ELEMENT, control_type_is,
};
use crate::condition::relationships::{all_children, parent};
use crate::element::control_type::ControlType;

/// Elements exposed in the UIA control view.
pub fn control_view() -> Condition {
    IS_CONTROL_ELEMENT.is_true().described_as("ControlView")
}

/// Elements exposed in the content view (a subset of the control view).
pub fn content_view() -> Condition {
    (IS_CONTROL_ELEMENT.is_true() & IS_CONTENT_ELEMENT.is_true()).described_as("ContentView")
}

/// Every control-view child has one of `allowed` types.
fn control_view_children(allowed: &[ControlType]) -> Condition {
    all_children(!control_view() | CONTROL_TYPE.is_one_of(allowed))
}

pub fn button_structure() -> Condition {
    control_view_children(&[ControlType::Image, ControlType::Text]).described_as("ButtonStructure")
}

pub fn list_structure() -> Condition {
    control_view_children(&[
        ControlType::ListItem,
        ControlType::Group,
        ControlType::DataItem,
        ControlType::ScrollBar,
    ])
    .described_as("ListStructure")
}

pub fn list_item_parent() -> Condition {
    parent(CONTROL_TYPE.is_one_of(&[
        ControlType::List,
        ControlType::ComboBox,
        ControlType::Group,
        ControlType::DataGrid,
    ]))
    .described_as("ListItemParent")
}

pub fn tab_item_parent() -> Condition {
    parent(control_type_is(ControlType::Tab)).described_as("TabItemParent")
}

pub fn tree_item_parent() -> Condition {
    parent(CONTROL_TYPE.is_one_of(&[ControlType::Tree, ControlType::TreeItem]))
        .described_as("TreeItemParent")
}

/// Structure requirement for a control type, where one is defined.
pub fn structure_for(control_type: ControlType) -> Option<Condition> {
    match control_type {
        ControlType::Button => Some(button_structure()),
        ControlType::List => Some(list_structure()),
        ControlType::ListItem => Some(list_item_parent()),
        ControlType::TabItem => Some(tab_item_parent()),
        ControlType::TreeItem => Some(tree_item_parent()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::builder::ElementBuilder;

    fn control(ct: ControlType) -> ElementBuilder {
        ElementBuilder::new(ct).control_element(true)
    }

    #[test]
    fn views() {
        let tree = ElementBuilder::new(ControlType::Pane)
            .child(control(ControlType::Text).content_element(true))
            .child(control(ControlType::Text).content_element(false))
            .build();

        assert!(!control_view().matches_element(tree.root().unwrap()));
        assert!(content_view().matches_element(tree.element(1).unwrap()));
        assert!(control_view().matches_element(tree.element(2).unwrap()));
        assert!(!content_view().matches_element(tree.element(2).unwrap()));
    }

    #[test]
    fn button_children_ignore_raw_view() {
        let ok = control(ControlType::Button)
            .child(control(ControlType::Text))
            .child(ElementBuilder::new(ControlType::Edit).control_element(false))
            .build();
        let bad = control(ControlType::Button)
            .child(control(ControlType::Edit))
            .build();

        assert!(button_structure().matches_element(ok.root().unwrap()));
        assert!(!button_structure().matches_element(bad.root().unwrap()));
    }

    #[test]
    fn item_parents() {
        let tree = control(ControlType::Tab)
            .child(control(ControlType::TabItem))
            .child(control(ControlType::ListItem))
            .build();

        assert!(structure_for(ControlType::TabItem).unwrap().matches_element(tree.element(1).unwrap()));
        assert!(!structure_for(ControlType::ListItem).unwrap().matches_element(tree.element(2).unwrap()));
        assert!(structure_for(ControlType::Edit).is_none());
    }

    #[test]
    fn list_items_accept_any_listing_parent() {
        let tree = control(ControlType::List)
            .child(control(ControlType::ListItem))
            .child(control(ControlType::Group).child(control(ControlType::ListItem)))
            .build();

        assert!(list_item_parent().matches_element(tree.element(1).unwrap()));
        assert!(list_item_parent().matches_element(tree.element(3).unwrap()));
        assert!(!list_item_parent().matches_element(tree.root().unwrap()));
    }
}
