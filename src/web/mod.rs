pub mod dashboard;
pub mod phases;
pub mod plan;

use crate::state::SharedState;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

/// Success/error envelope shared by every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct ApiHealth {
    status: &'static str,
    version: &'static str,
    timestamp: chrono::DateTime<Utc>,
}

async fn api_health() -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(state))
}

fn api_routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(api_health))
        .merge(plan::router(state.clone()))
        .merge(phases::router(state.clone()))
        .merge(dashboard::router(state))
}
