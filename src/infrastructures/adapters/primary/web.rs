use crate::infrastructures::adapters::primary::tools::{
    ToolDescriptor, ToolDispatchError, ToolRouter, tool_descriptors,
};
use crate::infrastructures::adapters::secondary::external_apis::github::GitHubApiAdapter;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Structure to hold application state (AppState)
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<ToolRouter<GitHubApiAdapter>>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

#[tracing::instrument(name = "list_tools")]
async fn list_tools() -> Json<Vec<ToolDescriptor>> {
    Json(tool_descriptors())
}

#[axum::debug_handler]
async fn call_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolCallRequest>,
) -> Response {
    match state.tools.dispatch(&request.name, request.arguments).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(error @ ToolDispatchError::UnknownTool(_)) => {
            tracing::warn!("Rejected tool call: {}", error);
            (StatusCode::NOT_FOUND, error.to_string()).into_response()
        }
        Err(error) => {
            tracing::warn!("Rejected tool call: {}", error);
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}

#[tracing::instrument(name = "health_check")]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .route("/health", get(health_check))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
