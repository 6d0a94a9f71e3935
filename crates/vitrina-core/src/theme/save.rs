//! Preparing a merchant-submitted theme for persistence.

use serde::Serialize;
use serde_json::Value;

use super::coerce::is_non_blank;
use super::ids::IdSource;
use super::normalize::normalize;
use super::types::{BackgroundType, ThemeConfig};

/// What a "save design" writes: the whole document plus the profile
/// columns derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSave {
    pub config: ThemeConfig,
    /// New `profiles.shop_name`, when the merchant set one in the editor.
    pub shop_name: Option<String>,
    pub avatar_border_color: Option<String>,
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Normalizes `raw` and extracts the derived columns.
///
/// An image background whose value is not an `http(s)` URL is replaced by
/// the default background.
pub fn prepare_save(raw: &Value, defaults: &ThemeConfig, ids: &mut dyn IdSource) -> ThemeSave {
    let mut config = normalize(raw, defaults, ids);

    if config.global.background_type == BackgroundType::Image
        && !is_http_url(&config.global.background_value)
    {
        tracing::warn!(
            value = %config.global.background_value,
            "discarding background image that is not an http(s) URL"
        );
        config.global = defaults.global.clone();
    }

    let shop_name = Some(config.profile.shop_name.clone()).filter(|s| is_non_blank(s));
    let avatar_border_color = config.profile.avatar_border_color.clone();

    ThemeSave {
        config,
        shop_name,
        avatar_border_color,
    }
}
