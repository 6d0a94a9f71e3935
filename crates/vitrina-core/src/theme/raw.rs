//! Permissive read-only view over an untrusted JSON document.
//!
//! A [`RawNode`] is a possibly-missing position in the document. Walking into
//! a field of something that is not an object yields a missing node rather
//! than an error, so callers can describe a full path and only inspect the
//! leaf.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawNode<'a>(Option<&'a Value>);

impl<'a> RawNode<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    #[must_use]
    pub const fn missing() -> Self {
        Self(None)
    }

    /// Child node at `key`; missing unless `self` is an object holding `key`.
    #[must_use]
    pub fn field(self, key: &str) -> RawNode<'a> {
        Self(self.0.and_then(|v| v.as_object()).and_then(|m| m.get(key)))
    }

    /// Follows `path` one key at a time.
    #[must_use]
    pub fn path(self, path: &[&str]) -> RawNode<'a> {
        path.iter().fold(self, |node, key| node.field(key))
    }

    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        self.0
    }

    /// `true` for anything other than an absent key or JSON `null`.
    #[must_use]
    pub fn is_present(self) -> bool {
        !matches!(self.0, None | Some(Value::Null))
    }

    #[must_use]
    pub fn as_object(self) -> Option<&'a Map<String, Value>> {
        self.0.and_then(Value::as_object)
    }

    #[must_use]
    pub fn is_object(self) -> bool {
        self.as_object().is_some()
    }

    #[must_use]
    pub fn as_str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    #[must_use]
    pub fn as_bool(self) -> Option<bool> {
        self.0.and_then(Value::as_bool)
    }

    /// Numeric value, rejecting anything that is not finite.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        self.0.and_then(Value::as_f64).filter(|n| n.is_finite())
    }

    #[must_use]
    pub fn as_array(self) -> Option<&'a Vec<Value>> {
        self.0.and_then(Value::as_array)
    }

    /// JSON type name, for diagnostics.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self.0 {
            None => "missing",
            Some(Value::Null) => "null",
            Some(Value::Bool(_)) => "boolean",
            Some(Value::Number(_)) => "number",
            Some(Value::String(_)) => "string",
            Some(Value::Array(_)) => "array",
            Some(Value::Object(_)) => "object",
        }
    }
}
