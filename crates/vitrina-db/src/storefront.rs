//! Assembles what a public storefront page needs from a profile row.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;
use vitrina_core::{ProfileRecord, ThemeConfig, UuidIds};

use crate::profiles::{get_profile_by_id, get_profile_by_slug};
use crate::DbError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    Id(Uuid),
    Slug(String),
}

impl std::fmt::Display for ProfileLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id:{id}"),
            Self::Slug(slug) => write!(f, "slug:{slug}"),
        }
    }
}

/// A render-ready theme and the repaired profile behind it.
///
/// `profile` is `None` when no row matched; `theme` is then the defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Storefront {
    pub theme: ThemeConfig,
    pub profile: Option<ProfileRecord>,
}

/// Load a profile and its safe theme.
///
/// A missing profile is not an error: it yields `defaults` and no profile.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_safe_storefront(
    pool: &PgPool,
    lookup: &ProfileLookup,
    defaults: &ThemeConfig,
) -> Result<Storefront, DbError> {
    let row = match lookup {
        ProfileLookup::Id(id) => get_profile_by_id(pool, *id).await?,
        ProfileLookup::Slug(slug) => get_profile_by_slug(pool, slug).await?,
    };

    let Some(row) = row else {
        tracing::warn!(lookup = %lookup, "profile not found; serving default theme");
        return Ok(Storefront {
            theme: defaults.clone(),
            profile: None,
        });
    };

    let profile = row.repair(defaults, &mut UuidIds);
    Ok(Storefront {
        theme: profile.storefront_theme(),
        profile: Some(profile),
    })
}
