//! Unpaid-notification endpoint.
//!
//! Triggered by an external scheduler. Every response carries the same
//! CORS headers so browser clients can call it directly.

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::job::run_unpaid_check;
use crate::state::AppState;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

const CORS_HEADERS: [(HeaderName, &str); 2] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
];

/// Outcome of a successful run
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifyResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 1)]
    pub notifications_created: u64,
    pub timestamp: DateTime<Utc>,
}

/// Failed run
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifyErrorResponse {
    pub error: String,
}

/// Create notification routes
pub fn notify_routes() -> Router<AppState> {
    Router::new().route(
        "/notify-unpaid",
        get(notify_unpaid).post(notify_unpaid).options(preflight),
    )
}

/// Raise notifications for the current month's unpaid payments
#[utoipa::path(
    post,
    path = "/notify-unpaid",
    tag = "Notifications",
    responses(
        (status = 200, description = "Notifications raised", body = NotifyResponse),
        (status = 500, description = "Query or insert failed", body = NotifyErrorResponse)
    )
)]
pub async fn notify_unpaid(State(state): State<AppState>) -> Response {
    let month = state.clock.current_month();

    match run_unpaid_check(state.store.as_ref(), &month).await {
        Ok(created) => (
            StatusCode::OK,
            CORS_HEADERS,
            Json(NotifyResponse {
                success: true,
                notifications_created: created,
                timestamp: Utc::now(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, %month, "Unpaid check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORS_HEADERS,
                Json(NotifyErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// CORS preflight; never touches the store
pub async fn preflight() -> Response {
    (StatusCode::OK, CORS_HEADERS, "ok").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use tower::ServiceExt;
    use uuid::Uuid;

    use common::AppError;
    use domain::BillingMonth;

    use crate::clock::FixedClock;
    use crate::store::{MockNotificationStore, UnpaidPayment};

    fn router(store: MockNotificationStore) -> Router {
        let clock = FixedClock(BillingMonth::parse("2024-05").unwrap());
        let state = AppState::new(Arc::new(store), Arc::new(clock));
        notify_routes().with_state(state)
    }

    async fn call(app: Router, method: Method) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/notify-unpaid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    fn assert_cors(headers: &axum::http::HeaderMap) {
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
    }

    #[tokio::test]
    async fn preflight_answers_ok_without_store() {
        let mut store = MockNotificationStore::new();
        store.expect_unpaid_payments().never();
        store.expect_insert_notifications().never();

        let (status, headers, body) = call(router(store), Method::OPTIONS).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
        assert_cors(&headers);
    }

    #[tokio::test]
    async fn success_reports_created_count() {
        let mut store = MockNotificationStore::new();
        store.expect_unpaid_payments().returning(|m| {
            Ok(vec![UnpaidPayment {
                payment_id: Uuid::new_v4(),
                house_code: "A1".to_string(),
                month: m.clone(),
            }])
        });
        store
            .expect_insert_notifications()
            .times(1)
            .returning(|rows| Ok(rows.len() as u64));

        let (status, headers, body) = call(router(store), Method::POST).await;

        assert_eq!(status, StatusCode::OK);
        assert_cors(&headers);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["notifications_created"], 1);
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn query_failure_is_a_500_with_error_text() {
        let mut store = MockNotificationStore::new();
        store
            .expect_unpaid_payments()
            .returning(|_| Err(AppError::internal("relation \"payments\" does not exist")));
        store.expect_insert_notifications().never();

        let (status, headers, body) = call(router(store), Method::GET).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&headers);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "relation \"payments\" does not exist");
        assert!(json.get("success").is_none());
    }
}
