use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> axum::response::Response {
        use WaitlistError::*;
        let status_code = match self {
            InvalidEmail(_) => StatusCode::BAD_REQUEST,
        };

        (status_code, self.to_string()).into_response()
    }
}
