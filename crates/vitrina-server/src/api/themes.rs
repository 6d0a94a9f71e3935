//! POST /api/v1/themes/normalize — preview what a stored document renders as.

use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use serde::Serialize;
use serde_json::Value;
use vitrina_core::{google_fonts_url, normalize, used_fonts, ThemeConfig, UuidIds};

use crate::middleware::RequestId;

use super::{json_body, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct NormalizedTheme {
    pub theme: ThemeConfig,
    pub fonts: Vec<String>,
    pub fonts_url: Option<String>,
}

impl NormalizedTheme {
    pub(super) fn new(theme: ThemeConfig) -> Self {
        let fonts = used_fonts(&theme);
        let fonts_url = google_fonts_url(&fonts);
        Self {
            theme,
            fonts,
            fonts_url,
        }
    }
}

/// Any JSON body is accepted; only a body that is not JSON at all is rejected.
pub(super) async fn normalize_theme(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<NormalizedTheme>>, ApiError> {
    let raw = json_body(&req_id.0, body)?;
    let theme = normalize(&raw, &state.defaults, &mut UuidIds);

    Ok(Json(ApiResponse {
        data: NormalizedTheme::new(theme),
        meta: ResponseMeta::new(req_id.0),
    }))
}
