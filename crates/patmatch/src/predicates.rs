//! Ready-made leaf conditions.

use crate::condition::Condition;
#[cfg(feature = "regex")]
use crate::error::{MatchError, Result};
use patmatch_value::Structured;

pub fn always<'a, V: 'a>() -> Condition<'a, V> {
    Condition::predicate(|_: &V| true)
}

pub fn never<'a, V: 'a>() -> Condition<'a, V> {
    Condition::predicate(|_: &V| false)
}

/// Matches any value. Inside a template this only requires the key to be
/// present.
pub fn exists<'a, V: 'a>() -> Condition<'a, V> {
    always()
}

pub fn eq<'a, V, T>(target: T) -> Condition<'a, V>
where
    V: PartialEq + 'a,
    T: Into<V>,
{
    let target = target.into();
    Condition::predicate(move |value: &V| *value == target)
}

pub fn is_null<'a, V: Structured + 'a>() -> Condition<'a, V> {
    of_kind("null")
}

/// Matches values whose [`Structured::kind`] is `kind`.
pub fn of_kind<'a, V: Structured + 'a>(kind: &'a str) -> Condition<'a, V> {
    Condition::predicate(move |value: &V| value.kind() == kind)
}

pub fn not<'a, V, C>(condition: C) -> Condition<'a, V>
where
    V: Structured + 'a,
    C: Into<Condition<'a, V>>,
{
    let condition = condition.into();
    Condition::predicate(move |value: &V| !condition.test(value))
}

/// Applies `pred` to numbers. Anything else fails.
pub fn number<'a, V, F>(pred: F) -> Condition<'a, V>
where
    V: Structured + 'a,
    F: Fn(f64) -> bool + 'a,
{
    Condition::predicate(move |value: &V| value.as_f64().map_or(false, &pred))
}

/// Applies `pred` to strings. Anything else fails.
pub fn text<'a, V, F>(pred: F) -> Condition<'a, V>
where
    V: Structured + 'a,
    F: Fn(&str) -> bool + 'a,
{
    Condition::predicate(move |value: &V| value.as_text().map_or(false, &pred))
}

pub fn contains<'a, V: Structured + 'a>(needle: impl Into<String>) -> Condition<'a, V> {
    let needle = needle.into();
    text(move |s| s.contains(needle.as_str()))
}

pub fn starts_with<'a, V: Structured + 'a>(prefix: impl Into<String>) -> Condition<'a, V> {
    let prefix = prefix.into();
    text(move |s| s.starts_with(prefix.as_str()))
}

pub fn ends_with<'a, V: Structured + 'a>(suffix: impl Into<String>) -> Condition<'a, V> {
    let suffix = suffix.into();
    text(move |s| s.ends_with(suffix.as_str()))
}

/// Matches strings against a regular expression. The pattern is compiled
/// once, here.
#[cfg(feature = "regex")]
pub fn matches<'a, V: Structured + 'a>(pattern: &str) -> Result<Condition<'a, V>> {
    let re = regex::Regex::new(pattern).map_err(|e| MatchError::InvalidRegex(e.to_string()))?;
    Ok(text(move |s| re.is_match(s)))
}
