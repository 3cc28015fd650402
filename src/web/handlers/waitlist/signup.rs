use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    models::{SignupRequest, SignupResponse},
    utils::state::AppState,
};

use super::error::WaitlistError;

/// Handler registering a new signup on the waitlist.
///
/// A duplicate is an expected outcome, reported in the body rather than as
/// an error. The forwarding result is deliberately not exposed here.
pub async fn add_signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, WaitlistError> {
    let email = payload.email.trim();
    if !is_valid_email(email) {
        return Err(WaitlistError::InvalidEmail(email.to_string()));
    }

    let outcome = state.waitlist.add_signup(email).await;

    let status = if outcome.already_exists {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((
        status,
        Json(SignupResponse {
            success: outcome.success,
            already_exists: outcome.already_exists,
        }),
    ))
}

// Minimal shape check; the external sinks remain the authority on
// deliverability.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
