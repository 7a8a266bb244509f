//! Conditions and the recursive structural evaluator.

use patmatch_value::Structured;
use std::fmt;
use tracing::trace;

pub type Predicate<'a, V> = Box<dyn Fn(&V) -> bool + 'a>;

/// A rule deciding whether a value matches.
pub enum Condition<'a, V> {
    /// Tested directly against the value.
    Predicate(Predicate<'a, V>),
    /// Matched field by field against a keyed value.
    Template(Template<'a, V>),
}

/// A keyed mapping from field name to nested condition.
///
/// Only the keys listed here are checked; any other fields on the value are
/// ignored. Entries are evaluated in insertion order.
pub struct Template<'a, V> {
    entries: Vec<(String, Condition<'a, V>)>,
}

/// Result of evaluating a condition. A match carries the value it was
/// evaluated against.
pub enum Outcome<'v, V> {
    Match(&'v V),
    NoMatch,
}

impl<'a, V> Condition<'a, V> {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&V) -> bool + 'a,
    {
        Condition::Predicate(Box::new(f))
    }
}

impl<'a, V: Structured> Condition<'a, V> {
    pub fn test(&self, value: &V) -> bool {
        match self {
            Condition::Predicate(p) => p(value),
            Condition::Template(t) => t.test(value),
        }
    }
}

impl<'a, V, F> From<F> for Condition<'a, V>
where
    F: Fn(&V) -> bool + 'a,
{
    fn from(f: F) -> Self {
        Condition::predicate(f)
    }
}

impl<'a, V> From<Template<'a, V>> for Condition<'a, V> {
    fn from(template: Template<'a, V>) -> Self {
        Condition::Template(template)
    }
}

impl<V> fmt::Debug for Condition<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
            Condition::Template(t) => f.debug_tuple("Template").field(t).finish(),
        }
    }
}

impl<'a, V> Template<'a, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a field check. Re-adding a key replaces its condition in place.
    pub fn field(
        mut self,
        key: impl Into<String>,
        condition: impl Into<Condition<'a, V>>,
    ) -> Self {
        let key = key.into();
        let condition = condition.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = condition,
            None => self.entries.push((key, condition)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<'a, V: Structured> Template<'a, V> {
    fn test(&self, value: &V) -> bool {
        self.entries.iter().all(|(key, condition)| match value.field(key) {
            Some(field) => {
                let ok = condition.test(field);
                if !ok {
                    trace!(key = %key, "template field rejected");
                }
                ok
            }
            None => {
                trace!(key = %key, kind = value.kind(), "template key not accessible");
                false
            }
        })
    }
}

impl<V> Default for Template<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Template<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, c)| (k, c)))
            .finish()
    }
}

impl<'v, V> Outcome<'v, V> {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match(_))
    }

    pub fn value(self) -> Option<&'v V> {
        match self {
            Outcome::Match(v) => Some(v),
            Outcome::NoMatch => None,
        }
    }
}

impl<V> Clone for Outcome<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Outcome<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Outcome<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Match(v) => f.debug_tuple("Match").field(v).finish(),
            Outcome::NoMatch => f.write_str("NoMatch"),
        }
    }
}

/// Evaluates `condition` against `value`.
///
/// Predicates are called with the value. Templates look up each of their
/// keys on the value and evaluate the nested condition against the field;
/// a key the value cannot provide (absent, or the value is not keyed at
/// all) fails the template. An empty template matches anything.
pub fn evaluate<'v, V>(condition: &Condition<'_, V>, value: &'v V) -> Outcome<'v, V>
where
    V: Structured,
{
    if condition.test(value) {
        Outcome::Match(value)
    } else {
        Outcome::NoMatch
    }
}
