use std::fmt;
use std::sync::Arc;

use crate::condition::condition::{Condition, EvalContext};
use crate::element::tree::ElementRef;

type ValueFn<T> = dyn for<'a> Fn(ElementRef<'a>, &EvalContext<'a>) -> T + Send + Sync;

/// An expression producing a value per element, turned into a [`Condition`]
/// by comparing it against a constant.
pub struct ValueCondition<T> {
    getter: Arc<ValueFn<T>>,
    description: Arc<str>,
}

impl<T> Clone for ValueCondition<T> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            description: Arc::clone(&self.description),
        }
    }
}

impl<T> ValueCondition<T>
where
    T: PartialOrd + fmt::Display + Copy + Send + Sync + 'static,
{
    pub fn new<F>(description: impl Into<String>, getter: F) -> Self
    where
        F: for<'a> Fn(ElementRef<'a>, &EvalContext<'a>) -> T + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            description: Arc::from(description.into()),
        }
    }

    pub fn value(&self, element: ElementRef<'_>, ctx: &EvalContext<'_>) -> T {
        (self.getter)(element, ctx)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn compare(&self, op: &str, expected: T, test: fn(&T, &T) -> bool) -> Condition {
        let this = self.clone();
        Condition::new(format!("{} {} {}", self.description, op, expected), move |e, ctx| {
            test(&this.value(e, ctx), &expected)
        })
    }

    pub fn equals(&self, expected: T) -> Condition {
        self.compare("==", expected, |a, b| a == b)
    }

    pub fn not_equals(&self, expected: T) -> Condition {
        self.compare("!=", expected, |a, b| a != b)
    }

    pub fn greater_than(&self, expected: T) -> Condition {
        self.compare(">", expected, |a, b| a > b)
    }

    pub fn at_least(&self, expected: T) -> Condition {
        self.compare(">=", expected, |a, b| a >= b)
    }

    pub fn less_than(&self, expected: T) -> Condition {
        self.compare("<", expected, |a, b| a < b)
    }

    pub fn at_most(&self, expected: T) -> Condition {
        self.compare("<=", expected, |a, b| a <= b)
    }
}

impl<T> fmt::Debug for ValueCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueCondition").field(&self.description).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::builder::ElementBuilder;
    use crate::element::control_type::ControlType;

    #[test]
    fn comparisons() {
        let tree = ElementBuilder::new(ControlType::List)
            .child(ElementBuilder::new(ControlType::ListItem))
            .child(ElementBuilder::new(ControlType::ListItem))
            .build();
        let list = tree.root().unwrap();
        let count = ValueCondition::new("ChildCount", |e, _| e.child_count());

        assert!(count.equals(2).matches_element(list));
        assert!(count.not_equals(3).matches_element(list));
        assert!(count.greater_than(1).matches_element(list));
        assert!(count.at_least(2).matches_element(list));
        assert!(!count.less_than(2).matches_element(list));
        assert!(count.at_most(2).matches_element(list));
        assert_eq!(count.greater_than(1).to_string(), "ChildCount > 1");
    }
}
