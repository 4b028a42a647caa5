//! Axum route handlers for the signup API.

use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use signup_core::{ActivityDirectory, Catalog};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Directory = Arc<ActivityDirectory>;

/// Where `GET /` sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

// ── Request / response types ──────────────────────────────────────────────────

/// Query string of the signup and unregister endpoints.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation returned by successful signup and unregister calls.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over `directory`, serving static assets
/// from `static_dir`.
pub fn create_router(directory: Directory, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — temporary redirect to the static front page.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /activities` — every activity keyed by name.
pub async fn list_activities(State(directory): State<Directory>) -> Json<Catalog> {
    Json(directory.list_activities())
}

/// `POST /activities/{name}/signup?email=...` — add a participant.
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity is unknown (404) or
/// the email is already signed up (400), and [`GatewayError::InvalidRequest`]
/// if the `email` parameter is missing (422).
pub async fn signup(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Query(EmailQuery { email }) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let message = directory.signup(&name, &email)?;
    Ok(Json(MessageResponse { message }))
}

/// `DELETE /activities/{name}/unregister?email=...` — remove a participant.
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity is unknown (404) or
/// the email is not registered (400), and [`GatewayError::InvalidRequest`]
/// if the `email` parameter is missing (422).
pub async fn unregister(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Query(EmailQuery { email }) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let message = directory.unregister(&name, &email)?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(Arc::new(ActivityDirectory::seeded()), FsPath::new("static"))
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match test_router().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let req = match Request::builder().uri("/").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match test_router().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok());
        assert_eq!(location, Some(INDEX_PATH));
    }

    #[test]
    fn message_response_serializes_message_field() {
        let body = MessageResponse { message: "Signed up a@x.edu for Chess Club".to_owned() };
        let json = match serde_json::to_string(&body) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"Signed up a@x.edu for Chess Club"}"#);
    }
}
