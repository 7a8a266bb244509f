//! Array quantifiers. Each returns an ordinary predicate condition, so they
//! nest inside templates and inside each other.

use crate::condition::Condition;
use patmatch_value::Structured;

fn collect<'a, V, I>(conditions: I) -> Vec<Condition<'a, V>>
where
    I: IntoIterator,
    I::Item: Into<Condition<'a, V>>,
{
    conditions.into_iter().map(Into::into).collect()
}

/// Matches arrays in which every element satisfies every condition.
///
/// Non-arrays never match. With no conditions, or for an empty array, any
/// array matches.
pub fn all_of<'a, V, I>(conditions: I) -> Condition<'a, V>
where
    V: Structured + 'a,
    I: IntoIterator,
    I::Item: Into<Condition<'a, V>>,
{
    let conditions = collect(conditions);
    Condition::predicate(move |value: &V| {
        value.elements().map_or(false, |items| {
            conditions
                .iter()
                .all(|condition| items.iter().all(|item| condition.test(item)))
        })
    })
}

/// Matches arrays in which at least one element satisfies at least one
/// condition.
///
/// Non-arrays never match, nor do empty arrays or an empty condition list.
pub fn any_of<'a, V, I>(conditions: I) -> Condition<'a, V>
where
    V: Structured + 'a,
    I: IntoIterator,
    I::Item: Into<Condition<'a, V>>,
{
    let conditions = collect(conditions);
    Condition::predicate(move |value: &V| {
        value.elements().map_or(false, |items| {
            conditions
                .iter()
                .any(|condition| items.iter().any(|item| condition.test(item)))
        })
    })
}

/// Matches arrays containing an element equal to `target`.
///
/// Equality is the value type's `PartialEq`. For [`Value`](crate::Value) and
/// `serde_json::Value` that is deep structural equality: an object matches
/// any element with the same keys and equal values, and `NaN` matches
/// nothing.
pub fn includes<'a, V, T>(target: T) -> Condition<'a, V>
where
    V: Structured + PartialEq + 'a,
    T: Into<V>,
{
    let target = target.into();
    Condition::predicate(move |value: &V| {
        value
            .elements()
            .map_or(false, |items| items.contains(&target))
    })
}
