use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use a11y_inspect::fingerprint::contribution::FingerprintContribution;
use a11y_inspect::{ControlType, ElementBuilder, ElementTree, Fingerprint, RuleId, ScanStatus};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper builders
// ============================================================================

fn dialog(button_name: &str, title: &str) -> ElementTree {
    ElementBuilder::new(ControlType::Window)
        .name(title)
        .class_name("#32770")
        .framework_id("Win32")
        .child(
            ElementBuilder::new(ControlType::Pane)
                .automation_id("content")
                .child(
                    ElementBuilder::new(ControlType::Button)
                        .name(button_name)
                        .automation_id("okButton")
                        .localized_control_type("button")
                        .culture(1033),
                ),
        )
        .build()
}

fn button_fingerprint(tree: &ElementTree, rule: RuleId, status: ScanStatus) -> Fingerprint {
    Fingerprint::new(tree.element(2).unwrap(), rule, status).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn chain_contributions_are_joined_per_property() {
    let tree = dialog("OK", "Settings");
    let fp = button_fingerprint(&tree, RuleId::NameNotNull, ScanStatus::Fail);

    let pairs: Vec<String> = fp.contributions().map(|c| c.to_string()).collect();
    assert_eq!(
        pairs,
        vec![
            "AutomationId=okButton|content",
            "ClassName=#32770",
            "ControlType=Button(50000)|Pane(50033)|Window(50032)",
            "Culture=1033",
            "FrameworkId=Win32",
            "Level=error",
            "LocalizedControlType=button",
            "Name=OK",
            "RuleId=NameNotNull",
        ]
    );
}

#[test]
fn pane_under_parent_scenario() {
    let tree = ElementBuilder::new(ControlType::Window)
        .name("Parent")
        .child(ElementBuilder::new(ControlType::Pane).name("NameOfElement"))
        .build();
    let fp = Fingerprint::new(tree.element(1).unwrap(), RuleId::NameNotNull, ScanStatus::Fail).unwrap();

    assert_eq!(fp.get("ControlType"), Some("Pane(50033)|Window(50032)"));
    assert_eq!(fp.get("Name"), Some("NameOfElement"));
}

#[test]
fn status_maps_to_level() {
    let tree = dialog("OK", "Settings");
    let level = |status| {
        button_fingerprint(&tree, RuleId::NameNotNull, status)
            .get("Level")
            .map(str::to_string)
    };

    assert_eq!(level(ScanStatus::Pass).as_deref(), Some("pass"));
    assert_eq!(level(ScanStatus::ScanNotSupported).as_deref(), Some("note"));
    assert_eq!(level(ScanStatus::Fail).as_deref(), Some("error"));
    assert_eq!(level(ScanStatus::Uncertain).as_deref(), Some("open"));
    assert_eq!(level(ScanStatus::NoResult).as_deref(), Some("open"));
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn identical_elements_in_different_trees_are_equal() {
    // top-level window titles differ; they are not part of the identity
    let a = dialog("OK", "Settings - a.txt");
    let b = dialog("OK", "Settings - b.txt");

    let fa = button_fingerprint(&a, RuleId::NameNotNull, ScanStatus::Fail);
    let fb = button_fingerprint(&b, RuleId::NameNotNull, ScanStatus::Fail);

    assert_eq!(fa, fb);
    assert_eq!(fa.hash_code(), fb.hash_code());
    assert_eq!(fa.digest(), fb.digest());

    let set: HashSet<Fingerprint> = [fa, fb].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn rule_or_level_changes_the_hash() {
    let tree = dialog("OK", "Settings");
    let base = button_fingerprint(&tree, RuleId::NameNotNull, ScanStatus::Fail);
    let other_rule = button_fingerprint(&tree, RuleId::NameNotEmpty, ScanStatus::Fail);
    let other_level = button_fingerprint(&tree, RuleId::NameNotNull, ScanStatus::Uncertain);

    assert_ne!(base, other_rule);
    assert_ne!(base, other_level);
    assert_ne!(base.hash_code(), other_rule.hash_code());
    assert_ne!(base.hash_code(), other_level.hash_code());
}

#[test]
fn element_name_changes_identity() {
    let a = button_fingerprint(&dialog("OK", "t"), RuleId::NameNotNull, ScanStatus::Fail);
    let b = button_fingerprint(&dialog("Cancel", "t"), RuleId::NameNotNull, ScanStatus::Fail);
    assert_ne!(a, b);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn compare_to_is_reflexive_and_antisymmetric() {
    let tree = dialog("OK", "Settings");
    let fingerprints = [
        button_fingerprint(&tree, RuleId::NameNotNull, ScanStatus::Fail),
        button_fingerprint(&tree, RuleId::IsKeyboardFocusableShouldBeTrue, ScanStatus::Fail),
        Fingerprint::new(tree.root().unwrap(), RuleId::NameNotNull, ScanStatus::Pass).unwrap(),
    ];

    for a in &fingerprints {
        assert_eq!(a.compare_to(a), Ordering::Equal);
        for b in &fingerprints {
            assert_eq!(a.compare_to(b), b.compare_to(a).reverse());
        }
    }
}

#[test]
fn compare_to_puts_fewer_contributions_first() {
    let tree = dialog("OK", "Settings");
    let root = Fingerprint::new(tree.root().unwrap(), RuleId::NameNotNull, ScanStatus::Fail).unwrap();
    let button = button_fingerprint(&tree, RuleId::NameNotNull, ScanStatus::Fail);

    assert!(root.len() < button.len());
    assert_eq!(root.compare_to(&button), Ordering::Less);
}

#[test]
fn sorted_set_keeps_distinct_fingerprints() {
    let contribution = |k: &str, v: &str| FingerprintContribution::new(k, v).unwrap();
    let set: BTreeSet<Fingerprint> = (0..50)
        .map(|i| Fingerprint::from_contributions(vec![contribution("RuleId", &format!("R{}", i))]))
        .collect();
    assert_eq!(set.len(), 50);
}

#[test]
fn hash_collision_compares_equal_but_sorts_apart() {
    let contribution = |i: usize| FingerprintContribution::new("RuleId", &format!("R{}", i)).unwrap();
    let mut by_hash: HashMap<i32, Fingerprint> = HashMap::new();

    let (a, b) = (0..400_000)
        .find_map(|i| {
            let fp = Fingerprint::from_contributions(vec![contribution(i)]);
            match by_hash.get(&fp.hash_code()) {
                Some(earlier) => Some((earlier.clone(), fp)),
                None => {
                    by_hash.insert(fp.hash_code(), fp);
                    None
                }
            }
        })
        .expect("two single-contribution fingerprints sharing a hash code");

    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(a.compare_to(&b), Ordering::Equal);
    assert_ne!(a, b);
    assert_ne!(a.cmp(&b), Ordering::Equal);
    assert_eq!(a.cmp(&b), b.cmp(&a).reverse());

    let set: BTreeSet<Fingerprint> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 2);
}
