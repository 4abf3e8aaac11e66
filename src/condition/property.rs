//! Typed property wrappers and the conditions derived from them.
//!
//! A wrapper names one property of an element and knows how to read it;
//! the methods build [`Condition`]s over that value. Missing values never
//! satisfy a comparison.

use std::fmt;

use regex::Regex;

use crate::condition::condition::Condition;
use crate::condition::value::ValueCondition;
use crate::element::control_type::PropertyId;
use crate::element::element_model::Rect;
use crate::element::tree::ElementRef;

#[derive(Debug, Clone, Copy)]
pub struct StringProperty {
    id: PropertyId,
}

impl StringProperty {
    pub const fn new(id: PropertyId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn value<'a>(&self, element: ElementRef<'a>) -> Option<&'a str> {
        element.string_property(self.id)
    }

    fn test(&self, description: String, f: fn(Option<&str>) -> bool) -> Condition {
        let id = self.id;
        Condition::from_fn(description, move |e| f(e.string_property(id)))
    }

    pub fn exists(&self) -> Condition {
        self.test(format!("{} exists", self.id), |v| v.is_some())
    }

    pub fn is_null_or_empty(&self) -> Condition {
        self.test(format!("{} is null or empty", self.id), |v| {
            v.is_none_or(str::is_empty)
        })
    }

    pub fn is_empty(&self) -> Condition {
        self.test(format!("{} is empty", self.id), |v| v == Some(""))
    }

    /// Non-empty and made of whitespace only.
    pub fn is_whitespace(&self) -> Condition {
        self.test(format!("{} is whitespace", self.id), |v| {
            v.is_some_and(|s| !s.is_empty() && s.trim().is_empty())
        })
    }

    pub fn is_null_or_whitespace(&self) -> Condition {
        self.test(format!("{} is null or whitespace", self.id), |v| {
            v.is_none_or(|s| s.trim().is_empty())
        })
    }

    pub fn is_equal_to(&self, expected: &str) -> Condition {
        let id = self.id;
        let expected = expected.to_string();
        Condition::from_fn(format!("{} = '{}'", id, expected), move |e| {
            e.string_property(id) == Some(expected.as_str())
        })
    }

    pub fn is_no_case_equal_to(&self, expected: &str) -> Condition {
        let id = self.id;
        let expected = expected.to_lowercase();
        Condition::from_fn(format!("{} = '{}' (ignore case)", id, expected), move |e| {
            e.string_property(id)
                .is_some_and(|v| v.to_lowercase() == expected)
        })
    }

    pub fn includes(&self, substring: &str) -> Condition {
        let id = self.id;
        let substring = substring.to_string();
        Condition::from_fn(format!("{} includes '{}'", id, substring), move |e| {
            e.string_property(id)
                .is_some_and(|v| v.contains(substring.as_str()))
        })
    }

    pub fn matches_regex(&self, pattern: &str) -> Result<Condition, regex::Error> {
        let id = self.id;
        let regex = Regex::new(pattern)?;
        Ok(Condition::from_fn(format!("{} =~ /{}/", id, pattern), move |e| {
            e.string_property(id).is_some_and(|v| regex.is_match(v))
        }))
    }

    /// Character count, 0 when missing.
    pub fn length(&self) -> ValueCondition<usize> {
        let id = self.id;
        ValueCondition::new(format!("{}.Length", id), move |e, _| {
            e.string_property(id).map_or(0, |v| v.chars().count())
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntProperty {
    id: PropertyId,
}

impl IntProperty {
    pub const fn new(id: PropertyId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn value(&self, element: ElementRef<'_>) -> Option<i32> {
        element.int_property(self.id)
    }

    fn compare(&self, op: &str, expected: i32, test: fn(i32, i32) -> bool) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} {} {}", id, op, expected), move |e| {
            e.int_property(id).is_some_and(|v| test(v, expected))
        })
    }

    pub fn exists(&self) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} exists", id), move |e| e.int_property(id).is_some())
    }

    pub fn is(&self, expected: i32) -> Condition {
        self.compare("==", expected, |a, b| a == b)
    }

    pub fn is_not(&self, expected: i32) -> Condition {
        self.compare("!=", expected, |a, b| a != b)
    }

    pub fn greater_than(&self, expected: i32) -> Condition {
        self.compare(">", expected, |a, b| a > b)
    }

    pub fn less_than(&self, expected: i32) -> Condition {
        self.compare("<", expected, |a, b| a < b)
    }

    /// Inclusive on both ends.
    pub fn in_range(&self, min: i32, max: i32) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} in [{}, {}]", id, min, max), move |e| {
            e.int_property(id).is_some_and(|v| (min..=max).contains(&v))
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoolProperty {
    id: PropertyId,
}

impl BoolProperty {
    pub const fn new(id: PropertyId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn value(&self, element: ElementRef<'_>) -> Option<bool> {
        element.bool_property(self.id)
    }

    pub fn exists(&self) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} exists", id), move |e| e.bool_property(id).is_some())
    }

    pub fn is_true(&self) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} = true", id), move |e| e.bool_property(id) == Some(true))
    }

    pub fn is_false(&self) -> Condition {
        let id = self.id;
        Condition::from_fn(format!("{} = false", id), move |e| {
            e.bool_property(id) == Some(false)
        })
    }
}

/// Property whose value is one of a closed set of variants.
pub struct EnumProperty<T> {
    name: &'static str,
    getter: for<'a> fn(ElementRef<'a>) -> Option<T>,
}

impl<T> Clone for EnumProperty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnumProperty<T> {}

impl<T> EnumProperty<T>
where
    T: Copy + PartialEq + fmt::Display + Send + Sync + 'static,
{
    pub const fn new(name: &'static str, getter: for<'a> fn(ElementRef<'a>) -> Option<T>) -> Self {
        Self { name, getter }
    }

    pub fn value(&self, element: ElementRef<'_>) -> Option<T> {
        (self.getter)(element)
    }

    pub fn exists(&self) -> Condition {
        let getter = self.getter;
        Condition::from_fn(format!("{} exists", self.name), move |e| getter(e).is_some())
    }

    pub fn is(&self, expected: T) -> Condition {
        let getter = self.getter;
        Condition::from_fn(format!("{} = {}", self.name, expected), move |e| {
            getter(e) == Some(expected)
        })
    }

    pub fn is_not(&self, expected: T) -> Condition {
        let getter = self.getter;
        Condition::from_fn(format!("{} != {}", self.name, expected), move |e| {
            getter(e).is_some_and(|v| v != expected)
        })
    }

    pub fn is_one_of(&self, expected: &[T]) -> Condition {
        let getter = self.getter;
        let expected = expected.to_vec();
        let names: Vec<String> = expected.iter().map(|v| v.to_string()).collect();
        Condition::from_fn(format!("{} in [{}]", self.name, names.join(", ")), move |e| {
            getter(e).is_some_and(|v| expected.contains(&v))
        })
    }
}

impl<T> fmt::Debug for EnumProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumProperty").field(&self.name).finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RectangleProperty {
    id: PropertyId,
}

impl RectangleProperty {
    pub const fn new(id: PropertyId) -> Self {
        Self { id }
    }

    pub fn value(&self, element: ElementRef<'_>) -> Option<Rect> {
        element.property(self.id).and_then(|v| v.as_rect())
    }

    fn test(&self, description: String, f: fn(Option<Rect>) -> bool) -> Condition {
        let this = *self;
        Condition::from_fn(description, move |e| f(this.value(e)))
    }

    pub fn exists(&self) -> Condition {
        self.test(format!("{} exists", self.id), |r| r.is_some())
    }

    pub fn is_empty(&self) -> Condition {
        self.test(format!("{} is empty", self.id), |r| r.is_some_and(|r| r.is_empty()))
    }

    pub fn is_all_zeros(&self) -> Condition {
        self.test(format!("{} is all zeros", self.id), |r| r.is_some_and(|r| r.is_all_zeros()))
    }

    /// Present with a positive area.
    pub fn is_valid(&self) -> Condition {
        self.test(format!("{} is valid", self.id), |r| r.is_some_and(|r| !r.is_empty()))
    }

    /// Fully inside the parent's rectangle; true when either side has no rectangle.
    pub fn contained_in_parent(&self) -> Condition {
        let this = *self;
        Condition::from_fn(format!("{} contained in parent", self.id), move |e| {
            let Some(parent) = e.parent() else {
                return true;
            };
            match (this.value(parent), this.value(e)) {
                (Some(outer), Some(inner)) => outer.contains(&inner),
                _ => true,
            }
        })
    }
}
