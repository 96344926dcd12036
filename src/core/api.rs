//! REST API handlers for the landing page
//!
//! - GET /api/waitlist/settings - Waitlist timing used by the signup form

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use super::waitlist::WaitlistSettings;

/// Shared state for the landing API
#[derive(Clone, Debug, Default)]
pub struct ApiState {
    pub waitlist: WaitlistSettings,
}

impl ApiState {
    pub fn new(waitlist: WaitlistSettings) -> Self {
        Self { waitlist }
    }
}

/// Create the landing API router
///
/// Routes:
/// - `GET /api/waitlist/settings` - Current [`WaitlistSettings`] as JSON
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/waitlist/settings", get(get_waitlist_settings))
        .with_state(state)
}

/// GET /api/waitlist/settings
async fn get_waitlist_settings(State(state): State<ApiState>) -> impl IntoResponse {
    tracing::trace!("Serving waitlist settings");
    Json(state.waitlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_waitlist_settings_endpoint() {
        let settings = WaitlistSettings {
            simulated_delay_ms: 800,
            submit_timeout_ms: Some(4000),
        };
        let app = api_router(ApiState::new(settings));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/waitlist/settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: WaitlistSettings = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, settings);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = api_router(ApiState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/waitlist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
