//! Declarative first-match pattern matching over dynamic values.
//!
//! A value is bound with [`pattern_match`] and tested against an ordered
//! list of cases built with [`when`] and [`other_wise`]. The callback of the
//! first case whose condition matches is run and its result returned.
//!
//! Conditions are either predicates (closures over the value) or
//! [`Template`]s: keyed mappings from field name to nested condition, which
//! check only the fields they name. A template never panics on values that
//! lack a field or are not keyed at all; it just does not match.
//!
//! # Example
//!
//! ```
//! use patmatch::{eq, exists, number, other_wise, pattern_match, when, Template, Value};
//! use std::f64::consts::PI;
//!
//! let shape = Value::object([
//!     ("type", Value::from("circle")),
//!     ("radius", Value::from(5.0)),
//! ]);
//!
//! let area = pattern_match(&shape).cases(&[
//!     when(
//!         Template::new().field("type", eq("circle")).field("radius", exists()),
//!         |c: &Value| PI * c.get("radius").and_then(Value::as_number).unwrap_or(0.0).powi(2),
//!     ),
//!     when(
//!         Template::new().field("type", eq("square")).field("side", number(|n| n > 0.0)),
//!         |s: &Value| s.get("side").and_then(Value::as_number).unwrap_or(0.0).powi(2),
//!     ),
//!     other_wise(|_| 0.0),
//! ]);
//!
//! assert_eq!(area, Some(PI * 25.0));
//! ```

mod combinators;
mod condition;
mod dispatch;
mod error;
mod predicates;

pub use combinators::{all_of, any_of, includes};
pub use condition::{evaluate, Condition, Outcome, Predicate, Template};
pub use dispatch::{other_wise, pattern_match, when, Case, Subject};
pub use error::MatchError;
#[cfg(feature = "regex")]
pub use predicates::matches;
pub use predicates::{
    always, contains, ends_with, eq, exists, is_null, never, not, number, of_kind, starts_with,
    text,
};
pub use patmatch_value::{Structured, Value, ValueError};
