//! Upgrade path from the flat `design_*` profile columns.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Design columns of a `profiles` row from before themes were stored as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyColumns {
    pub design_bg_color: Option<String>,
    pub design_title_text: Option<String>,
    pub design_subtitle_text: Option<String>,
    pub design_title_color: Option<String>,
    /// CSS font stack, e.g. `"'Open Sans', sans-serif"`.
    pub design_font: Option<String>,
    pub design_card_style: Option<String>,
}

impl LegacyColumns {
    /// First family of the stored font stack, unquoted. Defaults to `Inter`.
    #[must_use]
    pub fn primary_font(&self) -> String {
        let stack = self
            .design_font
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Inter");
        stack
            .split(',')
            .next()
            .unwrap_or_default()
            .replace(['\'', '"'], "")
            .trim()
            .to_owned()
    }
}

/// `true` for a missing, `null` or `{}` theme document.
#[must_use]
pub fn is_empty_config(modern: Option<&Value>) -> bool {
    match modern {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Returns the document the normalizer should read.
///
/// A non-empty `modern` document is returned unchanged. Otherwise a minimal
/// modern-shaped document is synthesized from the legacy columns; fields
/// the row lacks come out as `null` and fall back to defaults downstream.
#[must_use]
pub fn bridge_legacy(modern: Option<&Value>, legacy: &LegacyColumns) -> Value {
    if !is_empty_config(modern) {
        return modern.cloned().unwrap_or(Value::Null);
    }

    let font = legacy.primary_font();
    tracing::debug!(font = %font, "synthesizing theme config from legacy design columns");

    json!({
        "global": {
            "backgroundValue": legacy.design_bg_color,
        },
        "header": {
            "title": {
                "color": legacy.design_title_color,
                "fontFamily": font,
            },
            "subtitle": {
                "fontFamily": font,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(bg: Option<&str>, font: Option<&str>) -> LegacyColumns {
        LegacyColumns {
            design_bg_color: bg.map(str::to_owned),
            design_font: font.map(str::to_owned),
            ..LegacyColumns::default()
        }
    }

    #[test]
    fn primary_font_strips_quotes_and_fallbacks() {
        assert_eq!(
            columns(None, Some("'Open Sans', sans-serif")).primary_font(),
            "Open Sans"
        );
        assert_eq!(
            columns(None, Some("\"Playfair Display\"")).primary_font(),
            "Playfair Display"
        );
        assert_eq!(columns(None, None).primary_font(), "Inter");
        assert_eq!(columns(None, Some("")).primary_font(), "Inter");
    }

    #[test]
    fn empty_config_detection() {
        assert!(is_empty_config(None));
        assert!(is_empty_config(Some(&Value::Null)));
        assert!(is_empty_config(Some(&json!({}))));
        assert!(!is_empty_config(Some(&json!({ "header": {} }))));
        assert!(!is_empty_config(Some(&json!("garbage"))));
    }

    #[test]
    fn non_empty_modern_document_passes_through() {
        let modern = json!({ "global": { "backgroundValue": "#000" } });
        let bridged = bridge_legacy(Some(&modern), &columns(Some("#112233"), None));
        assert_eq!(bridged, modern);
    }

    #[test]
    fn empty_modern_document_is_synthesized_from_columns() {
        let bridged = bridge_legacy(Some(&json!({})), &columns(Some("#112233"), Some("Lato")));
        assert_eq!(bridged["global"]["backgroundValue"], json!("#112233"));
        assert_eq!(bridged["header"]["title"]["fontFamily"], json!("Lato"));
        assert_eq!(bridged["header"]["subtitle"]["fontFamily"], json!("Lato"));
        assert_eq!(bridged["header"]["title"]["color"], Value::Null);
    }
}
