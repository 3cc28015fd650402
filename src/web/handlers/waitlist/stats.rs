use axum::{extract::State, response::IntoResponse, Json};

use crate::{models::StatsResponse, utils::state::AppState, waitlist::format_signup_count};

/// Current waitlist statistics plus the compact display form of the total.
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.waitlist.get_stats().await;

    Json(StatsResponse {
        total_signups: stats.total_signups,
        recent_signups: stats.recent_signups,
        formatted_total: format_signup_count(stats.total_signups),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test::test_app_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_stats_reflect_signups() {
        let state = test_app_state();
        state.waitlist.add_signup("a@example.com").await;
        state.waitlist.add_signup("b@example.com").await;

        let response = get_stats(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: StatsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.total_signups, 2);
        assert_eq!(parsed.recent_signups, 2);
        assert_eq!(parsed.formatted_total, "2");
    }

    #[tokio::test]
    async fn test_stats_on_empty_ledger() {
        let response = get_stats(State(test_app_state())).await.into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: StatsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.total_signups, 0);
        assert_eq!(parsed.formatted_total, "0");
    }
}
