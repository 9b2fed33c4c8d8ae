use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid query parameter: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Fatal errors raised while preparing the catalog, before the listener is bound
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path:?}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unexpected catalog layout in {path:?}: expected an array or an object with a `results` array")]
    CatalogShape { path: PathBuf },
}
