use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use crate::element::control_type::ControlType;
use crate::element::tree::ElementRef;

/// Per-evaluation state threaded through every [`Condition::matches`] call.
///
/// Structural descent (children, descendants) evaluates the inner
/// condition with the element the descent started from as `ancestor`;
/// relative conditions such as `has_same_type` compare against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalContext<'a> {
    ancestor: Option<ElementRef<'a>>,
}

impl<'a> EvalContext<'a> {
    pub fn empty() -> Self {
        Self { ancestor: None }
    }

    pub fn with_ancestor(ancestor: ElementRef<'a>) -> Self {
        Self { ancestor: Some(ancestor) }
    }

    pub fn ancestor(&self) -> Option<ElementRef<'a>> {
        self.ancestor
    }
}

type MatchFn = dyn for<'a> Fn(ElementRef<'a>, &EvalContext<'a>) -> bool + Send + Sync;

/// Immutable boolean predicate over an element and its position in the tree.
///
/// Conditions are cheap to clone and can be shared across threads.
/// They deliberately implement neither `PartialEq` nor `Hash`.
#[derive(Clone)]
pub struct Condition {
    matcher: Arc<MatchFn>,
    description: Arc<str>,
}

impl Condition {
    pub fn new<F>(description: impl Into<String>, matcher: F) -> Self
    where
        F: for<'a> Fn(ElementRef<'a>, &EvalContext<'a>) -> bool + Send + Sync + 'static,
    {
        Self {
            matcher: Arc::new(matcher),
            description: Arc::from(description.into()),
        }
    }

    /// Condition that only looks at the element itself.
    pub fn from_fn<F>(description: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(ElementRef<'a>) -> bool + Send + Sync + 'static,
    {
        Self::new(description, move |e, _| f(e))
    }

    pub fn always() -> Self {
        Self::new("True", |_, _| true)
    }

    pub fn never() -> Self {
        Self::new("False", |_, _| false)
    }

    pub fn matches(&self, element: ElementRef<'_>, ctx: &EvalContext<'_>) -> bool {
        (self.matcher)(element, ctx)
    }

    /// Evaluate with an empty context.
    pub fn matches_element(&self, element: ElementRef<'_>) -> bool {
        self.matches(element, &EvalContext::empty())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Same predicate, different description.
    pub fn described_as(self, description: impl Into<String>) -> Self {
        Self {
            matcher: self.matcher,
            description: Arc::from(description.into()),
        }
    }

    pub fn and(self, other: Condition) -> Self {
        let description = format!("({}) AND ({})", self.description, other.description);
        Self::new(description, move |e, ctx| self.matches(e, ctx) && other.matches(e, ctx))
    }

    pub fn or(self, other: Condition) -> Self {
        let description = format!("({}) OR ({})", self.description, other.description);
        Self::new(description, move |e, ctx| self.matches(e, ctx) || other.matches(e, ctx))
    }

    pub fn negate(self) -> Self {
        let description = format!("NOT ({})", self.description);
        Self::new(description, move |e, ctx| !self.matches(e, ctx))
    }

    /// True when every condition matches (true for an empty list).
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        let conditions: Vec<Condition> = conditions.into_iter().collect();
        let description = join_descriptions(&conditions, " AND ");
        Self::new(description, move |e, ctx| conditions.iter().all(|c| c.matches(e, ctx)))
    }

    /// True when any condition matches (false for an empty list).
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        let conditions: Vec<Condition> = conditions.into_iter().collect();
        let description = join_descriptions(&conditions, " OR ");
        Self::new(description, move |e, ctx| conditions.iter().any(|c| c.matches(e, ctx)))
    }
}

fn join_descriptions(conditions: &[Condition], separator: &str) -> String {
    conditions
        .iter()
        .map(|c| format!("({})", c.description))
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.description).finish()
    }
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        self.and(rhs)
    }
}

impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        self.or(rhs)
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.negate()
    }
}

impl From<ControlType> for Condition {
    fn from(control_type: ControlType) -> Self {
        Condition::from_fn(format!("ControlType = {}", control_type), move |e| {
            e.control_type() == control_type
        })
    }
}
