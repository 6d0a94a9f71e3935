//! GET /api/v1/storefronts/{slug} — public storefront bootstrap.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use vitrina_db::ProfileLookup;

use crate::middleware::RequestId;

use super::themes::NormalizedTheme;
use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StorefrontResponse {
    pub slug: String,
    pub shop_name: String,
    pub is_pro: bool,
    pub whatsapp: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub theme: NormalizedTheme,
}

pub(super) async fn get_storefront(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<StorefrontResponse>>, ApiError> {
    let storefront =
        vitrina_db::get_safe_storefront(&state.pool, &ProfileLookup::Slug(slug), &state.defaults)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let Some(profile) = storefront.profile else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            "storefront not found",
        ));
    };

    Ok(Json(ApiResponse {
        data: StorefrontResponse {
            slug: profile.slug,
            shop_name: profile.shop_name,
            is_pro: profile.is_pro,
            whatsapp: profile.whatsapp,
            avatar_url: profile.avatar_url,
            theme: NormalizedTheme::new(storefront.theme),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
