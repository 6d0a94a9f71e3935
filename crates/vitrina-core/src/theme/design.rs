//! Adapter for documents saved by the first design editor.
//!
//! That editor stored a flat `DesignConfig`:
//!
//! ```json
//! { "colors": {...}, "fonts": {...}, "profile": {...}, "socialLinks": [...],
//!   "checkout": {...}, "cardStyle": {...}, "backgroundImage": "https://..." }
//! ```
//!
//! [`adapt`] rewrites it into the modern layout so the same walker handles
//! both. Values are moved across untouched; validation stays in the walker.

use serde_json::{json, Map, Value};

use super::coerce::is_non_blank;

const MODERN_SECTIONS: [&str; 3] = ["header", "cards", "global"];
const DESIGN_SECTIONS: [&str; 7] = [
    "colors",
    "fonts",
    "cardStyle",
    "socialLinks",
    "profile",
    "checkout",
    "backgroundImage",
];

/// `true` when `object` has none of the modern top-level sections but at
/// least one key only the old editor wrote.
pub(crate) fn is_design_layout(object: &Map<String, Value>) -> bool {
    !MODERN_SECTIONS.iter().any(|key| object.contains_key(*key))
        && DESIGN_SECTIONS.iter().any(|key| object.contains_key(*key))
}

/// Value at `path`, or `null` when any step is missing.
fn at(object: &Map<String, Value>, path: &[&str]) -> Value {
    let Some((first, rest)) = path.split_first() else {
        return Value::Null;
    };
    rest.iter()
        .try_fold(object.get(*first), |node, key| {
            node.and_then(Value::as_object).map(|m| m.get(*key))
        })
        .flatten()
        .cloned()
        .unwrap_or(Value::Null)
}

/// First of `candidates` that is neither missing nor `null`.
fn first_present(candidates: [Value; 2]) -> Value {
    candidates
        .into_iter()
        .find(|v| !v.is_null())
        .unwrap_or(Value::Null)
}

pub(crate) fn adapt(object: &Map<String, Value>) -> Value {
    let heading_font = at(object, &["fonts", "heading"]);
    let body_font = at(object, &["fonts", "body"]);

    let global = match object.get("backgroundImage").and_then(Value::as_str) {
        Some(url) if is_non_blank(url) => json!({
            "backgroundType": "image",
            "backgroundValue": url,
        }),
        _ => json!({
            "backgroundType": "solid",
            "backgroundValue": at(object, &["colors", "background"]),
        }),
    };

    json!({
        "header": {
            "title": {
                "fontFamily": heading_font,
                "color": at(object, &["colors", "text"]),
            },
            "subtitle": { "fontFamily": heading_font },
            "bio": { "fontFamily": body_font },
            "socialLinks": at(object, &["socialLinks"]),
        },
        "cards": {
            "background": at(object, &["colors", "cardBackground"]),
            "cornerRadius": at(object, &["cardStyle", "borderRadius"]),
            "productTitle": {
                "color": at(object, &["cardStyle", "titleColor"]),
                "fontFamily": body_font,
            },
            "productPrice": {
                "color": at(object, &["cardStyle", "priceColor"]),
                "fontFamily": body_font,
            },
            "addButton": {
                "bgColor": first_present([
                    at(object, &["cardStyle", "buttonColor"]),
                    at(object, &["colors", "primary"]),
                ]),
                "iconColor": at(object, &["cardStyle", "buttonTextColor"]),
            },
        },
        "global": global,
        "checkout": at(object, &["checkout"]),
        "profile": at(object, &["profile"]),
        "btn_shape": at(object, &["btn_shape"]),
    })
}
