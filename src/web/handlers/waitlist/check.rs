use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{models::CheckResponse, utils::state::AppState};

/// Whether an email already has a waitlist record.
pub async fn check_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    let signed_up = state.waitlist.is_signed_up(&email).await;

    Json(CheckResponse {
        email: email.trim().to_lowercase(),
        signed_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test::test_app_state;

    #[tokio::test]
    async fn test_known_email_reports_signed_up() {
        let state = test_app_state();
        state.waitlist.add_signup("user@example.com").await;

        let response = check_email(State(state), Path("User@Example.com".to_string()))
            .await
            .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: CheckResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.signed_up);
        assert_eq!(parsed.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_unknown_email_reports_not_signed_up() {
        let response = check_email(
            State(test_app_state()),
            Path("nobody@example.com".to_string()),
        )
        .await
        .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: CheckResponse = serde_json::from_slice(&body).unwrap();
        assert!(!parsed.signed_up);
    }
}
