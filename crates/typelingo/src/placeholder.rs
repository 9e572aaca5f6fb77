//! Placeholder scanning and substitution.
//!
//! A placeholder is a `{name}` token where `name` is one or more characters
//! other than `{` and `}`. There are no escape sequences: a brace that does
//! not open a complete placeholder is literal text.
//!
//! # Known quirk
//!
//! [`substitute`] fills only the **first** occurrence of each placeholder.
//! A template such as `"{x} and {x}"` rendered with `x = "A"` produces
//! `"A and {x}"`. Existing message catalogs rely on this, so it is kept;
//! [`crate::MessageResolver::lint`] reports templates that repeat a
//! placeholder.
//!
//! # Value formatting
//!
//! Values are inserted using their [`Display`](std::fmt::Display) form.
//! Floats follow Rust's formatting rather than JavaScript's: infinities
//! render as `inf` / `-inf`, not-a-number as `NaN`, and large magnitudes as
//! full decimal digits (`1e21` renders as `1000000000000000000000`).

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::types::Params;

/// Extract the placeholder names of a template, in source order.
///
/// Repeated placeholders appear once per occurrence.
///
/// ```
/// use typelingo::placeholder::placeholders;
///
/// assert_eq!(placeholders("{a} and {b} and {a}"), vec!["a", "b", "a"]);
/// assert!(placeholders("no braces, {} or { here").is_empty());
/// ```
pub fn placeholders(template: &str) -> Vec<String> {
    let mut input = template;
    let segments: Vec<Option<String>> = repeat(0.., segment)
        .parse_next(&mut input)
        .unwrap_or_default();
    segments.into_iter().flatten().collect()
}

/// Substitute parameters into a template.
///
/// Parameters are applied in insertion order. For each one, the first
/// occurrence of the literal `{key}` is replaced by the value's display form.
/// Later occurrences of the same placeholder are left untouched, and a
/// replacement value is never rescanned for its own key.
///
/// ```
/// use typelingo::Params;
/// use typelingo::placeholder::substitute;
///
/// let params = Params::new().with("x", "A");
/// assert_eq!(substitute("{x} and {x}", &params), "A and {x}");
/// ```
pub fn substitute(template: &str, params: &Params) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let token = format!("{{{key}}}");
        result = result.replacen(&token, &value.to_string(), 1);
    }
    result
}

/// Parse one segment: a placeholder name, or a single literal character.
fn segment(input: &mut &str) -> ModalResult<Option<String>> {
    alt((placeholder.map(Some), any.value(None))).parse_next(input)
}

/// Parse a placeholder: `{` name `}`.
fn placeholder(input: &mut &str) -> ModalResult<String> {
    delimited('{', take_while(1.., |c: char| c != '{' && c != '}'), '}')
        .map(str::to_string)
        .parse_next(input)
}
