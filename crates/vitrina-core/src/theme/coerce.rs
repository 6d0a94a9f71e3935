//! Leaf-level guards: accept a raw value only when it has the expected type
//! and domain, otherwise return the fallback. None of these ever fail.

use super::raw::RawNode;
use super::types::{FontSize, SchemaEnum};

/// Returns whatever `accept` extracts from `raw`, or `fallback`.
pub fn coerce<'a, T, F>(raw: RawNode<'a>, fallback: T, accept: F) -> T
where
    F: FnOnce(RawNode<'a>) -> Option<T>,
{
    accept(raw).unwrap_or(fallback)
}

#[must_use]
pub fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

fn non_blank(raw: RawNode<'_>) -> Option<String> {
    raw.as_str().filter(|s| is_non_blank(s)).map(str::to_owned)
}

/// Non-empty, non-blank strings only.
#[must_use]
pub fn string(raw: RawNode<'_>, fallback: &str) -> String {
    non_blank(raw).unwrap_or_else(|| fallback.to_owned())
}

#[must_use]
pub fn optional_string(raw: RawNode<'_>, fallback: Option<&str>) -> Option<String> {
    non_blank(raw).or_else(|| fallback.map(str::to_owned))
}

/// Literal booleans only; `"true"` and `1` are rejected.
#[must_use]
pub fn boolean(raw: RawNode<'_>, fallback: bool) -> bool {
    coerce(raw, fallback, RawNode::as_bool)
}

#[must_use]
pub fn optional_boolean(raw: RawNode<'_>, fallback: Option<bool>) -> Option<bool> {
    raw.as_bool().or(fallback)
}

/// Exact member of `T`'s wire spellings.
#[must_use]
pub fn enumeration<T: SchemaEnum>(raw: RawNode<'_>, fallback: T) -> T {
    coerce(raw, fallback, enum_member)
}

#[must_use]
pub fn optional_enumeration<T: SchemaEnum>(raw: RawNode<'_>, fallback: Option<T>) -> Option<T> {
    enum_member(raw).or(fallback)
}

/// The member spelled by `raw`, if any.
#[must_use]
pub fn enum_member<T: SchemaEnum>(raw: RawNode<'_>) -> Option<T> {
    raw.as_str().and_then(T::from_wire)
}

/// Finite numbers only; numeric strings are rejected.
#[must_use]
pub fn number(raw: RawNode<'_>, fallback: f64) -> f64 {
    coerce(raw, fallback, RawNode::as_f64)
}

/// A non-blank size token or a finite pixel size.
#[must_use]
pub fn font_size(raw: RawNode<'_>, fallback: &FontSize) -> FontSize {
    non_blank(raw)
        .map(FontSize::Token)
        .or_else(|| raw.as_f64().map(FontSize::Px))
        .unwrap_or_else(|| fallback.clone())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::theme::types::ButtonShape;

    fn node(v: &Value) -> RawNode<'_> {
        RawNode::new(v)
    }

    #[test]
    fn string_rejects_blank_and_non_strings() {
        assert_eq!(string(node(&json!("#fff")), "x"), "#fff");
        assert_eq!(string(node(&json!("   ")), "x"), "x");
        assert_eq!(string(node(&json!("")), "x"), "x");
        assert_eq!(string(node(&json!(12)), "x"), "x");
        assert_eq!(string(RawNode::missing(), "x"), "x");
    }

    #[test]
    fn string_keeps_surrounding_whitespace_of_valid_values() {
        assert_eq!(string(node(&json!(" Inter ")), "x"), " Inter ");
    }

    #[test]
    fn boolean_accepts_only_literals() {
        assert!(!boolean(node(&json!(false)), true));
        assert!(boolean(node(&json!("false")), true));
        assert!(!boolean(node(&json!(1)), false));
        assert!(boolean(node(&Value::Null), true));
    }

    #[test]
    fn enumeration_falls_back_on_foreign_values() {
        assert_eq!(
            enumeration(node(&json!("square")), ButtonShape::Circle),
            ButtonShape::Square
        );
        assert_eq!(
            enumeration(node(&json!("hexagon")), ButtonShape::Circle),
            ButtonShape::Circle
        );
        assert_eq!(
            enumeration(node(&json!(["square"])), ButtonShape::Rounded),
            ButtonShape::Rounded
        );
    }

    #[test]
    fn number_requires_a_json_number() {
        assert!((number(node(&json!(16)), 12.0) - 16.0).abs() < f64::EPSILON);
        assert!((number(node(&json!("16")), 12.0) - 12.0).abs() < f64::EPSILON);
        assert!((number(node(&json!(null)), 12.0) - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn font_size_accepts_tokens_and_numbers() {
        let fallback = FontSize::token("sm");
        assert_eq!(font_size(node(&json!("3xl")), &fallback), FontSize::token("3xl"));
        assert_eq!(font_size(node(&json!(18)), &fallback), FontSize::Px(18.0));
        assert_eq!(font_size(node(&json!(true)), &fallback), fallback);
    }

    #[test]
    fn optional_leaves_prefer_raw_then_fallback() {
        assert_eq!(optional_boolean(node(&json!(true)), None), Some(true));
        assert_eq!(optional_boolean(node(&json!("yes")), None), None);
        assert_eq!(optional_boolean(RawNode::missing(), Some(false)), Some(false));
        assert_eq!(
            optional_string(node(&json!("#123")), None).as_deref(),
            Some("#123")
        );
        assert_eq!(optional_string(node(&json!(" ")), None), None);
    }
}
