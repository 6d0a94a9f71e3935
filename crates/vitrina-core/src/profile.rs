//! Repair of raw merchant profile rows.
//!
//! Rows written by older versions of the dashboard may lack a slug, carry
//! the placeholder shop name, or store their design in the flat `design_*`
//! columns instead of a theme document. [`repair_profile`] turns any of
//! them into a [`ProfileRecord`] the storefront can use directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::coerce::{self, is_non_blank};
use crate::theme::raw::RawNode;
use crate::theme::{
    bridge_legacy, is_empty_config, normalize, IdSource, ThemeConfig, UuidIds, DEFAULT_THEME,
};

pub use crate::theme::LegacyColumns;

/// Id given to a row that has none.
pub const UNKNOWN_PROFILE_ID: &str = "unknown-user";
/// Placeholder shop name assigned at sign-up.
pub const DEFAULT_SHOP_NAME: &str = "Mi Tienda";
/// Placeholder username assigned at sign-up.
pub const DEFAULT_USERNAME: &str = "usuario";

/// A merchant profile with every field populated and the theme normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub shop_name: String,
    pub username: String,
    pub whatsapp: Option<String>,
    pub is_pro: bool,
    pub slug: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub avatar_border_color: Option<String>,
    #[serde(flatten)]
    pub legacy: LegacyColumns,
    pub theme: ThemeConfig,
}

impl ProfileRecord {
    /// The theme as the public storefront renders it: empty identity fields
    /// of the theme's profile section are filled from the row.
    #[must_use]
    pub fn storefront_theme(&self) -> ThemeConfig {
        let mut theme = self.theme.clone();
        let profile = &mut theme.profile;

        if !is_non_blank(&profile.display_name) {
            profile.display_name.clone_from(&self.shop_name);
        }
        if !is_non_blank(&profile.shop_name) {
            profile.shop_name.clone_from(&self.shop_name);
        }
        if !is_non_blank(&profile.avatar_url) {
            if let Some(url) = &self.avatar_url {
                profile.avatar_url.clone_from(url);
            }
        }
        if profile.avatar_border_color.is_none() {
            profile
                .avatar_border_color
                .clone_from(&self.avatar_border_color);
        }

        theme
    }
}

/// [`repair_profile_with`] against [`DEFAULT_THEME`] with random link ids.
#[must_use]
pub fn repair_profile(raw: &Value) -> ProfileRecord {
    repair_profile_with(raw, &DEFAULT_THEME, &mut UuidIds)
}

/// Builds a [`ProfileRecord`] from a raw `profiles` row.
///
/// Every column is coerced on its own. A missing slug is derived from the
/// username, then the email's local part, then the id; the placeholder shop
/// name is replaced by a title made from the slug. The theme comes from
/// `theme_config`, then `design_config`, then the legacy design columns.
pub fn repair_profile_with(
    raw: &Value,
    defaults: &ThemeConfig,
    ids: &mut dyn IdSource,
) -> ProfileRecord {
    let row = RawNode::new(raw);
    if !row.is_object() && row.is_present() {
        tracing::warn!(kind = row.kind(), "profile row is not an object");
    }

    let id = coerce::string(row.field("id"), UNKNOWN_PROFILE_ID);
    let username = coerce::string(row.field("username"), DEFAULT_USERNAME);
    let email = coerce::optional_string(row.field("email"), None);

    let slug = coerce::optional_string(row.field("slug"), None)
        .unwrap_or_else(|| derive_slug(&username, email.as_deref(), &id));

    let mut shop_name = coerce::string(row.field("shop_name"), DEFAULT_SHOP_NAME);
    if shop_name == DEFAULT_SHOP_NAME {
        shop_name = shop_name_from_slug(&slug);
    }

    let legacy = LegacyColumns {
        design_bg_color: coerce::optional_string(row.field("design_bg_color"), None),
        design_title_text: coerce::optional_string(row.field("design_title_text"), None),
        design_subtitle_text: coerce::optional_string(row.field("design_subtitle_text"), None),
        design_title_color: coerce::optional_string(row.field("design_title_color"), None),
        design_font: coerce::optional_string(row.field("design_font"), None),
        design_card_style: coerce::optional_string(row.field("design_card_style"), None),
    };

    let modern = [row.field("theme_config"), row.field("design_config")]
        .into_iter()
        .filter_map(RawNode::value)
        .find(|value| value.is_object() && !is_empty_config(Some(value)));
    let theme = normalize(&bridge_legacy(modern, &legacy), defaults, ids);

    ProfileRecord {
        id,
        updated_at: row
            .field("updated_at")
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|ts| ts.with_timezone(&Utc)),
        shop_name,
        username,
        whatsapp: coerce::optional_string(row.field("whatsapp"), None),
        is_pro: coerce::boolean(row.field("is_pro"), false),
        slug,
        email,
        avatar_url: coerce::optional_string(row.field("avatar_url"), None),
        avatar_border_color: coerce::optional_string(row.field("avatar_border_color"), None),
        legacy,
        theme,
    }
}

fn derive_slug(username: &str, email: Option<&str>, id: &str) -> String {
    if username != DEFAULT_USERNAME {
        return username.to_owned();
    }
    email
        .and_then(|e| e.split('@').next())
        .filter(|local| is_non_blank(local))
        .map_or_else(|| id.to_owned(), str::to_owned)
}

/// `"dulces-ana"` becomes `"Dulces ana"`.
fn shop_name_from_slug(slug: &str) -> String {
    let mut chars = slug.chars();
    let Some(first) = chars.next() else {
        return DEFAULT_SHOP_NAME.to_owned();
    };
    first
        .to_uppercase()
        .chain(chars)
        .collect::<String>()
        .replace('-', " ")
}
