//! First-match dispatch over an ordered list of cases.

use crate::condition::{evaluate, Condition, Outcome};
use crate::error::{MatchError, Result};
use crate::predicates::always;
use patmatch_value::Structured;
use std::fmt;
use tracing::trace;

/// A condition paired with the callback to run when it matches.
pub struct Case<'a, V, R> {
    condition: Condition<'a, V>,
    callback: Box<dyn Fn(&V) -> R + 'a>,
}

impl<V, R> fmt::Debug for Case<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

/// Builds a case from a condition (a closure, [`Condition`] or
/// [`Template`](crate::Template)) and a callback.
pub fn when<'a, V, R, C, F>(condition: C, callback: F) -> Case<'a, V, R>
where
    C: Into<Condition<'a, V>>,
    F: Fn(&V) -> R + 'a,
{
    Case {
        condition: condition.into(),
        callback: Box::new(callback),
    }
}

/// A case that matches every value. Whatever follows it is unreachable.
pub fn other_wise<'a, V, R, F>(callback: F) -> Case<'a, V, R>
where
    V: 'a,
    F: Fn(&V) -> R + 'a,
{
    when(always(), callback)
}

/// A value bound for matching; see [`pattern_match`].
#[derive(Debug)]
pub struct Subject<'v, V> {
    value: &'v V,
}

impl<V> Clone for Subject<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Subject<'_, V> {}

/// Binds `value` so it can be matched against a list of cases.
///
/// ```
/// use patmatch::{other_wise, pattern_match, when, Value};
///
/// let n = Value::from(12);
/// let size = pattern_match(&n).cases(&[
///     when(|v: &Value| v.as_number().map_or(false, |n| n > 10.0), |_| "big"),
///     other_wise(|_| "small"),
/// ]);
/// assert_eq!(size, Some("big"));
/// ```
pub fn pattern_match<V: Structured>(value: &V) -> Subject<'_, V> {
    Subject { value }
}

impl<'v, V: Structured> Subject<'v, V> {
    pub fn value(&self) -> &'v V {
        self.value
    }

    /// Index of the first case whose condition matches, without running any
    /// callback.
    pub fn matching<R>(&self, cases: &[Case<'_, V, R>]) -> Option<usize> {
        cases
            .iter()
            .position(|case| evaluate(&case.condition, self.value).is_match())
    }

    /// Runs the callback of the first matching case and returns its result.
    /// Later cases are not evaluated. `None` if no case matches.
    pub fn cases<R>(&self, cases: &[Case<'_, V, R>]) -> Option<R> {
        for (index, case) in cases.iter().enumerate() {
            if let Outcome::Match(value) = evaluate(&case.condition, self.value) {
                trace!(case = index, "case matched");
                return Some((case.callback)(value));
            }
        }
        trace!(tried = cases.len(), kind = self.value.kind(), "no case matched");
        None
    }

    /// Like [`cases`](Self::cases), but a miss is a [`MatchError::NoMatch`].
    pub fn exhaustive<R>(&self, cases: &[Case<'_, V, R>]) -> Result<R> {
        self.cases(cases).ok_or(MatchError::NoMatch {
            kind: self.value.kind(),
        })
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::Template;
    use patmatch_value::Value;
    use serde_json::json;
    use std::cell::RefCell;

    fn positive(v: &Value) -> bool {
        v.as_number().map_or(false, |n| n > 0.0)
    }

    #[test]
    fn test_first_match_wins() {
        let v = Value::from(5);
        let first = pattern_match(&v).cases(&[
            when(positive, |_| "c1"),
            when(positive, |_| "c2"),
        ]);
        assert_eq!(first, Some("c1"));

        let swapped = pattern_match(&v).cases(&[
            when(positive, |_| "c2"),
            when(positive, |_| "c1"),
        ]);
        assert_eq!(swapped, Some("c2"));
    }

    #[test]
    fn test_only_first_callback_runs() {
        let log = RefCell::new(Vec::new());
        let v = Value::from(5);
        pattern_match(&v).cases(&[
            when(positive, |_| log.borrow_mut().push("c1")),
            when(positive, |_| log.borrow_mut().push("c2")),
            other_wise(|_| log.borrow_mut().push("fallback")),
        ]);
        assert_eq!(*log.borrow(), vec!["c1"]);
    }

    #[test]
    fn test_later_conditions_not_evaluated() {
        let evaluated = RefCell::new(0);
        let v = Value::from(1);
        let result = pattern_match(&v).cases(&[
            when(positive, |_| 1),
            when(
                |_: &Value| {
                    *evaluated.borrow_mut() += 1;
                    true
                },
                |_| 2,
            ),
        ]);
        assert_eq!(result, Some(1));
        assert_eq!(*evaluated.borrow(), 0);
    }

    #[test]
    fn test_empty_case_list() {
        for v in [Value::Null, Value::from(1), Value::from(json!({"a": 1}))] {
            let cases: [Case<Value, ()>; 0] = [];
            assert_eq!(pattern_match(&v).cases(&cases), None);
            assert_eq!(pattern_match(&v).matching(&cases), None);
        }
    }

    #[test]
    fn test_no_match_returns_none() {
        let v = Value::from(-1);
        assert_eq!(pattern_match(&v).cases(&[when(positive, |_| 1)]), None);
    }

    #[test]
    fn test_other_wise_catches_everything() {
        for v in [
            Value::Null,
            Value::from("x"),
            Value::array([1, 2]),
            Value::from(json!({"k": {"n": 1}})),
        ] {
            let seen = pattern_match(&v).cases(&[other_wise(|v: &Value| v.clone())]);
            assert_eq!(seen, Some(v.clone()));
        }
    }

    #[test]
    fn test_early_other_wise_wins() {
        let v = Value::from(5);
        let result = pattern_match(&v).cases(&[
            other_wise(|_| "fallback"),
            when(positive, |_| "positive"),
        ]);
        assert_eq!(result, Some("fallback"));
    }

    #[test]
    fn test_callback_receives_value() {
        let v = Value::from(json!({"type": "square", "side": 3}));
        let area = pattern_match(&v).cases(&[when(
            Template::new().field("type", |t: &Value| t.as_text() == Some("square")),
            |s: &Value| s.get("side").and_then(Value::as_number).map(|n| n * n),
        )]);
        assert_eq!(area, Some(Ok(9.0)));
    }

    #[test]
    fn test_matching_reports_index() {
        let v = Value::from(json!({"a": 1}));
        let cases = [
            when(Template::new().field("b", |_: &Value| true), |_| ()),
            when(Template::new().field("a", |_: &Value| true), |_| ()),
            other_wise(|_| ()),
        ];
        assert_eq!(pattern_match(&v).matching(&cases), Some(1));
    }

    #[test]
    fn test_exhaustive() {
        let v = Value::from("text");
        let hit = pattern_match(&v).exhaustive(&[other_wise(|_| 1)]);
        assert_eq!(hit, Ok(1));

        let miss = pattern_match(&v).exhaustive(&[when(positive, |_| 1)]);
        assert_eq!(miss, Err(MatchError::NoMatch { kind: "string" }));
        assert_eq!(
            miss.unwrap_err().to_string(),
            "no case matched value of type string"
        );
    }

    #[test]
    fn test_deterministic() {
        let v = Value::from(json!({"n": 3}));
        let cases = [
            when(Template::new().field("n", positive), |v: &Value| v.clone()),
            other_wise(|_| Value::Null),
        ];
        let first = pattern_match(&v).cases(&cases);
        for _ in 0..10 {
            assert_eq!(pattern_match(&v).cases(&cases), first);
        }
    }

    #[test]
    #[should_panic(expected = "callback failed")]
    fn test_callback_panic_propagates() {
        let v = Value::Null;
        pattern_match(&v).cases(&[other_wise(|_| -> () { panic!("callback failed") })]);
    }
}
