//! Conditions over an element's position in the tree.
//!
//! Child and descendant walks evaluate the inner condition with the element
//! the walk started from as the context ancestor, which is what
//! [`has_same_type`] compares against. Parent and ancestor walks pass the
//! caller's context through unchanged.

use std::fmt;
use std::sync::Arc;

use crate::condition::condition::{Condition, EvalContext};
use crate::condition::value::ValueCondition;
use crate::element::tree::ElementRef;

pub fn parent(condition: Condition) -> Condition {
    Condition::new(format!("Parent({})", condition), move |e, ctx| {
        e.parent().is_some_and(|p| condition.matches(p, ctx))
    })
}

/// True for the root, or when the parent does not satisfy `condition`.
pub fn not_parent(condition: Condition) -> Condition {
    Condition::new(format!("NotParent({})", condition), move |e, ctx| {
        !e.parent().is_some_and(|p| condition.matches(p, ctx))
    })
}

/// The ancestor exactly `depth` levels up (0 = the element itself, 1 = parent).
pub fn ancestor(depth: usize, condition: Condition) -> Condition {
    Condition::new(format!("Ancestor({}, {})", depth, condition), move |e, ctx| {
        std::iter::once(e)
            .chain(e.ancestors())
            .nth(depth)
            .is_some_and(|a| condition.matches(a, ctx))
    })
}

pub fn any_ancestor(condition: Condition) -> Condition {
    Condition::new(format!("AnyAncestor({})", condition), move |e, ctx| {
        e.ancestors().any(|a| condition.matches(a, ctx))
    })
}

/// Like [`any_ancestor`], but the walk ends at the first ancestor matching
/// `stop`; that ancestor and everything above it are not tested.
pub fn any_ancestor_until(condition: Condition, stop: Condition) -> Condition {
    let description = format!("AnyAncestor({}, until {})", condition, stop);
    Condition::new(description, move |e, ctx| {
        for a in e.ancestors() {
            if stop.matches(a, ctx) {
                return false;
            }
            if condition.matches(a, ctx) {
                return true;
            }
        }
        false
    })
}

pub fn no_ancestor(condition: Condition) -> Condition {
    Condition::new(format!("NoAncestor({})", condition), move |e, ctx| {
        !e.ancestors().any(|a| condition.matches(a, ctx))
    })
}

/// Vacuously true for the root.
pub fn all_ancestors(condition: Condition) -> Condition {
    Condition::new(format!("AllAncestors({})", condition), move |e, ctx| {
        e.ancestors().all(|a| condition.matches(a, ctx))
    })
}

pub fn any_child(condition: Condition) -> Condition {
    Condition::new(format!("AnyChild({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.children().any(|c| condition.matches(c, &inner))
    })
}

pub fn no_child(condition: Condition) -> Condition {
    Condition::new(format!("NoChild({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        !e.children().any(|c| condition.matches(c, &inner))
    })
}

/// Vacuously true for a leaf.
pub fn all_children(condition: Condition) -> Condition {
    Condition::new(format!("AllChildren({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.children().all(|c| condition.matches(c, &inner))
    })
}

pub fn child_count(condition: Condition) -> ValueCondition<usize> {
    ValueCondition::new(format!("ChildCount({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.children().filter(|c| condition.matches(*c, &inner)).count()
    })
}

pub fn any_descendant(condition: Condition) -> Condition {
    Condition::new(format!("AnyDescendant({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.descendants().any(|d| condition.matches(d, &inner))
    })
}

pub fn no_descendant(condition: Condition) -> Condition {
    Condition::new(format!("NoDescendant({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        !e.descendants().any(|d| condition.matches(d, &inner))
    })
}

pub fn all_descendants(condition: Condition) -> Condition {
    Condition::new(format!("AllDescendants({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.descendants().all(|d| condition.matches(d, &inner))
    })
}

pub fn descendant_count(condition: Condition) -> ValueCondition<usize> {
    ValueCondition::new(format!("DescendantCount({})", condition), move |e, _| {
        let inner = EvalContext::with_ancestor(e);
        e.descendants().filter(|d| condition.matches(*d, &inner)).count()
    })
}

/// Same control type as the context ancestor; false without one.
pub fn has_same_type() -> Condition {
    Condition::new("HasSameType", |e, ctx| {
        ctx.ancestor()
            .is_some_and(|a| a.control_type() == e.control_type())
    })
}

/// True iff exactly one of `conditions` matches.
pub fn exactly_one(conditions: impl IntoIterator<Item = Condition>) -> Condition {
    let conditions: Vec<Condition> = conditions.into_iter().collect();
    let description = format!(
        "ExactlyOne({})",
        conditions
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Condition::new(description, move |e, ctx| {
        let mut matched = 0;
        for c in &conditions {
            if c.matches(e, ctx) {
                matched += 1;
                if matched > 1 {
                    return false;
                }
            }
        }
        matched == 1
    })
}

/// Number of matching siblings, or the fact that there is no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingCount {
    NoParent,
    Count(usize),
}

impl fmt::Display for SiblingCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiblingCount::NoParent => write!(f, "no parent"),
            SiblingCount::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Counts siblings (excluding the element itself) that satisfy a condition.
///
/// Numeric comparisons never match an element without a parent; use
/// [`SiblingCountCondition::no_parent`] to test for that case.
#[derive(Clone)]
pub struct SiblingCountCondition {
    condition: Condition,
}

impl SiblingCountCondition {
    pub fn value(&self, element: ElementRef<'_>, ctx: &EvalContext<'_>) -> SiblingCount {
        if element.parent().is_none() {
            return SiblingCount::NoParent;
        }
        SiblingCount::Count(
            element
                .siblings()
                .filter(|s| self.condition.matches(*s, ctx))
                .count(),
        )
    }

    pub fn no_parent(&self) -> Condition {
        Condition::new("SiblingCount: no parent", |e, _| e.parent().is_none())
    }

    fn compare(&self, op: &str, expected: usize, test: fn(usize, usize) -> bool) -> Condition {
        let this = Arc::new(self.clone());
        let description = format!("SiblingCount({}) {} {}", self.condition, op, expected);
        Condition::new(description, move |e, ctx| match this.value(e, ctx) {
            SiblingCount::NoParent => false,
            SiblingCount::Count(n) => test(n, expected),
        })
    }

    pub fn equals(&self, expected: usize) -> Condition {
        self.compare("==", expected, |a, b| a == b)
    }

    pub fn not_equals(&self, expected: usize) -> Condition {
        self.compare("!=", expected, |a, b| a != b)
    }

    pub fn greater_than(&self, expected: usize) -> Condition {
        self.compare(">", expected, |a, b| a > b)
    }

    pub fn at_least(&self, expected: usize) -> Condition {
        self.compare(">=", expected, |a, b| a >= b)
    }

    pub fn less_than(&self, expected: usize) -> Condition {
        self.compare("<", expected, |a, b| a < b)
    }

    pub fn at_most(&self, expected: usize) -> Condition {
        self.compare("<=", expected, |a, b| a <= b)
    }
}

pub fn sibling_count(condition: Condition) -> SiblingCountCondition {
    SiblingCountCondition { condition }
}
