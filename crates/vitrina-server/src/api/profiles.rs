//! Theme read/write for the merchant dashboard. Bearer-protected.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use vitrina_core::{prepare_save, ThemeConfig, UuidIds};
use vitrina_db::ProfileLookup;

use crate::middleware::RequestId;

use super::{json_body, map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProfileThemeResponse {
    pub profile_id: Uuid,
    pub theme: ThemeConfig,
    pub updated_at: Option<DateTime<Utc>>,
}

fn parse_profile_id(req_id: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::new(
            req_id,
            "validation_error",
            format!("profile id must be a UUID, got '{raw}'"),
        )
    })
}

/// GET /api/v1/profiles/{id}/theme — the repaired theme as the editor loads it.
pub(super) async fn get_theme(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProfileThemeResponse>>, ApiError> {
    let profile_id = parse_profile_id(&req_id.0, &id)?;

    let storefront = vitrina_db::get_safe_storefront(
        &state.pool,
        &ProfileLookup::Id(profile_id),
        &state.defaults,
    )
    .await
    .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let Some(profile) = storefront.profile else {
        return Err(ApiError::new(req_id.0, "not_found", "profile not found"));
    };

    Ok(Json(ApiResponse {
        data: ProfileThemeResponse {
            profile_id,
            theme: profile.theme,
            updated_at: profile.updated_at,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// PUT /api/v1/profiles/{id}/theme — replace the stored theme wholesale.
pub(super) async fn put_theme(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ApiResponse<ProfileThemeResponse>>, ApiError> {
    let profile_id = parse_profile_id(&req_id.0, &id)?;
    let raw = json_body(&req_id.0, body)?;

    let save = prepare_save(&raw, &state.defaults, &mut UuidIds);
    let updated_at = vitrina_db::save_theme(&state.pool, profile_id, &save)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ProfileThemeResponse {
            profile_id,
            theme: save.config,
            updated_at: Some(updated_at),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
