mod assessment;
mod chat;
mod dashboard;
mod health;
mod plan;
mod report;
mod students;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use uuid::Uuid;

use crate::response::{json_error, AppError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let healthcheck_endpoint = normalize_healthcheck_endpoint(
        std::env::var("HEALTHCHECK_ENDPOINT")
            .ok()
            .as_deref()
            .unwrap_or("/health"),
    );

    let mut app = Router::new();

    app = app.nest("/api/students", students::router());
    app = app.nest("/api/assessment", assessment::router());
    app = app.nest("/api/dashboard", dashboard::router());
    app = app.nest("/api/plan", plan::router());
    app = app.nest("/api/chat", chat::router());
    app = app.nest("/api/report", report::router());

    let mut health_paths: Vec<String> = Vec::new();
    health_paths.push("/health".to_string());
    if healthcheck_endpoint.as_str() != "/health" {
        health_paths.push(healthcheck_endpoint);
    }
    if !health_paths.iter().any(|path| path == "/api/health") {
        health_paths.push("/api/health".to_string());
    }

    for path in &health_paths {
        app = app.nest(path.as_str(), health::router());
    }

    app.fallback(fallback_handler).with_state(state)
}

fn normalize_healthcheck_endpoint(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "/health".to_string();
    }

    let with_slash = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if with_slash != "/" {
        with_slash.trim_end_matches('/').to_string()
    } else {
        "/".to_string()
    }
}

/// Parse a `:studentId` path segment, rejecting anything that is not a UUID
/// before the store is consulted.
pub(crate) fn parse_student_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request("Invalid student id"))
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found").into_response()
}
