use std::thread;

use a11y_inspect::condition::property_conditions::{CONTROL_TYPE, NAME, control_type_is, is_desktop};
use a11y_inspect::condition::relationships::{
    SiblingCount, all_children, any_ancestor_until, any_child, child_count, descendant_count,
    exactly_one, has_same_type, sibling_count,
};
use a11y_inspect::{Condition, ControlType, ElementBuilder, ElementTree, EvalContext};

fn menu_tree() -> ElementTree {
    ElementBuilder::new(ControlType::Pane)
        .class_name("#32769")
        .child(
            ElementBuilder::new(ControlType::Window).name("App").child(
                ElementBuilder::new(ControlType::MenuBar)
                    .child(
                        ElementBuilder::new(ControlType::MenuItem)
                            .name("File")
                            .child(ElementBuilder::new(ControlType::MenuItem).name("Open")),
                    )
                    .child(ElementBuilder::new(ControlType::MenuItem).name("Edit")),
            ),
        )
        .build()
}

// ids: 0 desktop, 1 window, 2 menu bar, 3 File, 4 Open, 5 Edit

#[test]
fn nested_menu_item_detected_through_explicit_context() {
    let tree = menu_tree();
    let has_submenu = any_child(has_same_type());

    assert!(has_submenu.matches_element(tree.element(3).unwrap()));
    assert!(!has_submenu.matches_element(tree.element(5).unwrap()));
    assert!(!has_submenu.matches_element(tree.element(2).unwrap()));
}

#[test]
fn has_same_type_needs_an_ancestor_in_context() {
    let tree = menu_tree();
    let file = tree.element(3).unwrap();
    let open = tree.element(4).unwrap();

    assert!(!has_same_type().matches(open, &EvalContext::empty()));
    assert!(has_same_type().matches(open, &EvalContext::with_ancestor(file)));
}

#[test]
fn conditions_evaluate_concurrently() {
    let tree = menu_tree();
    let has_submenu = any_child(has_same_type());

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let condition = has_submenu.clone();
                let tree = &tree;
                s.spawn(move || {
                    tree.elements()
                        .filter(|e| condition.matches_element(*e))
                        .map(|e| e.id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![3]);
        }
    });
}

#[test]
fn operators_compose() {
    let tree = menu_tree();
    let named_menu_item = control_type_is(ControlType::MenuItem) & NAME.exists();
    let either = control_type_is(ControlType::MenuBar) | named_menu_item.clone();

    let matching: Vec<usize> = tree
        .elements()
        .filter(|e| either.matches_element(*e))
        .map(|e| e.id())
        .collect();
    assert_eq!(matching, vec![2, 3, 4, 5]);

    let not_item = !named_menu_item;
    assert!(not_item.matches_element(tree.element(1).unwrap()));
    assert!(!not_item.matches_element(tree.element(4).unwrap()));
}

#[test]
fn counting_and_quantifiers() {
    let tree = menu_tree();
    let bar = tree.element(2).unwrap();
    let item = CONTROL_TYPE.is(ControlType::MenuItem);

    assert!(child_count(item.clone()).equals(2).matches_element(bar));
    assert!(descendant_count(item.clone()).equals(3).matches_element(bar));
    assert!(all_children(item.clone()).matches_element(bar));
    assert!(exactly_one([item.clone(), Condition::never()]).matches_element(tree.element(5).unwrap()));
    assert!(!exactly_one([item.clone(), Condition::always()]).matches_element(tree.element(5).unwrap()));
}

#[test]
fn ancestor_walk_stops_at_desktop() {
    let tree = menu_tree();
    let open = tree.element(4).unwrap();
    let under_window = any_ancestor_until(control_type_is(ControlType::Window), is_desktop());
    let under_desktop_pane = any_ancestor_until(control_type_is(ControlType::Pane), is_desktop());

    assert!(under_window.matches_element(open));
    assert!(!under_desktop_pane.matches_element(open));
}

#[test]
fn sibling_count_is_tagged() {
    let tree = menu_tree();
    let items = sibling_count(control_type_is(ControlType::MenuItem));
    let ctx = EvalContext::empty();

    assert_eq!(items.value(tree.root().unwrap(), &ctx), SiblingCount::NoParent);
    assert_eq!(items.value(tree.element(3).unwrap(), &ctx), SiblingCount::Count(1));
    assert_eq!(items.value(tree.element(4).unwrap(), &ctx), SiblingCount::Count(0));

    assert!(items.no_parent().matches_element(tree.root().unwrap()));
    assert!(!items.at_most(5).matches_element(tree.root().unwrap()));
    assert!(items.equals(1).matches_element(tree.element(5).unwrap()));
}

#[test]
fn descriptions_read_like_the_expression() {
    let c = any_child(control_type_is(ControlType::MenuItem));
    assert!(c.to_string().starts_with("AnyChild("));
    assert!(child_count(Condition::always()).greater_than(1).to_string().contains("> 1"));
}
