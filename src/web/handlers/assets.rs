use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;

use crate::{models::AssetResponse, utils::state::AppState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Unknown asset key: {0}")]
    UnknownKey(String),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AssetError::UnknownKey(_) => StatusCode::NOT_FOUND,
        };

        (status_code, self.to_string()).into_response()
    }
}

/// Resolve a canonical asset key to its single configured URL.
pub async fn resolve_asset(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AssetResponse>, AssetError> {
    let url = state
        .assets
        .resolve(&key)
        .ok_or_else(|| AssetError::UnknownKey(key.clone()))?
        .to_string();

    Ok(Json(AssetResponse { key, url }))
}
