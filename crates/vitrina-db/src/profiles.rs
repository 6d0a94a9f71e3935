//! Database operations for the `profiles` table.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;
use vitrina_core::{repair_profile_with, IdSource, ProfileRecord, ThemeConfig, ThemeSave};

use crate::DbError;

const PROFILE_COLUMNS: &str = "id, email, username, slug, shop_name, whatsapp, is_pro, \
     avatar_url, avatar_border_color, design_bg_color, design_title_text, \
     design_subtitle_text, design_title_color, design_font, design_card_style, \
     theme_config, design_config, updated_at";

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `profiles` table, as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
    pub slug: Option<String>,
    pub shop_name: Option<String>,
    pub whatsapp: Option<String>,
    pub is_pro: bool,
    pub avatar_url: Option<String>,
    pub avatar_border_color: Option<String>,
    pub design_bg_color: Option<String>,
    pub design_title_text: Option<String>,
    pub design_subtitle_text: Option<String>,
    pub design_title_color: Option<String>,
    pub design_font: Option<String>,
    pub design_card_style: Option<String>,
    pub theme_config: Option<Value>,
    pub design_config: Option<Value>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    /// The row as the JSON object profile repair consumes.
    #[must_use]
    pub fn to_raw(&self) -> Value {
        json!({
            "id": self.id.to_string(),
            "email": self.email,
            "username": self.username,
            "slug": self.slug,
            "shop_name": self.shop_name,
            "whatsapp": self.whatsapp,
            "is_pro": self.is_pro,
            "avatar_url": self.avatar_url,
            "avatar_border_color": self.avatar_border_color,
            "design_bg_color": self.design_bg_color,
            "design_title_text": self.design_title_text,
            "design_subtitle_text": self.design_subtitle_text,
            "design_title_color": self.design_title_color,
            "design_font": self.design_font,
            "design_card_style": self.design_card_style,
            "theme_config": self.theme_config,
            "design_config": self.design_config,
            "updated_at": self.updated_at.map(|ts| ts.to_rfc3339()),
        })
    }

    #[must_use]
    pub fn repair(&self, defaults: &ThemeConfig, ids: &mut dyn IdSource) -> ProfileRecord {
        repair_profile_with(&self.to_raw(), defaults, ids)
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Get a profile by primary key.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_profile_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRow>, DbError> {
    Ok(sqlx::query_as::<_, ProfileRow>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

/// Get a profile by its public storefront slug.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_profile_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<ProfileRow>, DbError> {
    Ok(sqlx::query_as::<_, ProfileRow>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?)
}

/// Replace a profile's theme wholesale.
///
/// Writes `theme_config`, clears the superseded `design_config`, and updates
/// the derived `shop_name` and `avatar_border_color` columns when the save
/// carries them. Concurrent saves are not coordinated; the last one wins.
/// Returns the new `updated_at`.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no profile has `id`, [`DbError::Json`]
/// if the theme cannot be encoded, or [`DbError::Sqlx`] on query failure.
pub async fn save_theme(
    pool: &PgPool,
    id: Uuid,
    save: &ThemeSave,
) -> Result<DateTime<Utc>, DbError> {
    let config = serde_json::to_value(&save.config)?;

    let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
        "UPDATE profiles SET \
           theme_config        = $2, \
           design_config       = NULL, \
           shop_name           = COALESCE($3, shop_name), \
           avatar_border_color = COALESCE($4, avatar_border_color), \
           updated_at          = NOW() \
         WHERE id = $1 \
         RETURNING updated_at",
    )
    .bind(id)
    .bind(config)
    .bind(save.shop_name.as_deref())
    .bind(save.avatar_border_color.as_deref())
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    tracing::info!(profile_id = %id, "saved theme config");
    Ok(updated_at)
}
