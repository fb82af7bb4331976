//! Handlers that stream files out of the asset bundle.

use crate::api::common::service_error_to_http;
use crate::errors::ServiceError;
use crate::state::AppState;
use crate::ui::assets::{Asset, AssetError, SHELL_PATH};
use axum::{
    extract::{Extension, Path},
    http::header,
    response::{IntoResponse, Response},
};

const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";
const SHELL_CACHE_CONTROL: &str = "no-cache";

/// Serves a file from under the static mount.
pub async fn serve_static(
    Extension(state): Extension<AppState>,
    Path(path): Path<String>,
) -> Response {
    match state.assets.open(&format!("/{}", path)) {
        Ok(asset) => asset_response(asset, ASSET_CACHE_CONTROL),
        Err(e) => asset_error_response(e),
    }
}

/// Serves `/favicon.ico` from the bundle root.
pub async fn serve_favicon(Extension(state): Extension<AppState>) -> Response {
    match state.assets.open_root("/favicon.ico") {
        Ok(asset) => asset_response(asset, ASSET_CACHE_CONTROL),
        Err(e) => asset_error_response(e),
    }
}

/// Serves the application shell. Used as the router fallback, so it answers
/// for any method and any path.
pub async fn serve_shell(Extension(state): Extension<AppState>) -> Response {
    match state.assets.open(SHELL_PATH) {
        Ok(asset) => asset_response(asset, SHELL_CACHE_CONTROL),
        Err(e) => {
            tracing::error!("Application shell missing from bundle: {}", e);
            asset_error_response(e)
        }
    }
}

fn asset_response(asset: Asset, cache_control: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, asset.mime_type),
            (header::CACHE_CONTROL, cache_control.to_string()),
        ],
        asset.data.into_owned(),
    )
        .into_response()
}

fn asset_error_response(error: AssetError) -> Response {
    match error {
        AssetError::NotFound(path) => {
            service_error_to_http(ServiceError::not_found("Asset", path)).into_response()
        }
    }
}
