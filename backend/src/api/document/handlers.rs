//! Handler for the document listing.
//!
//! Documents come from the `DocumentStorer` in `AppState`; a storage failure
//! is logged and reported as a 500.

use crate::api::common::{ApiError, service_error_to_http};
use crate::database::models::Document;
use crate::errors::ServiceError;
use crate::state::AppState;
use axum::extract::{Extension, Json};

/// Lists the documents visible to the web client.
#[axum::debug_handler]
pub async fn list_documents(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    state
        .documents
        .list_documents()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Unable to list documents: {}", e);
            service_error_to_http(ServiceError::internal_error("Unable to list documents."))
        })
}
