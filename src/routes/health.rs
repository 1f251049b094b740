use crate::models::dto::Message;
use axum::{response::IntoResponse, Json};
use serde_json::json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(index_handler, health_checker_handler))]
/// Defines the OpenAPI spec for the index and health endpoints
pub struct HealthApi;

/// Index handler; the response body is a fixed greeting kept for
/// compatibility with existing clients
#[utoipa::path(
    get,
    path = "/",
    tag = "HEALTH",
    responses(
        (status = 200, description = "Greeting")
    )
)]
pub async fn index_handler() -> impl IntoResponse {
    Json(json!({ "Hello": "World" }))
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "HEALTH",
    responses(
        (status = 200, description = "Success", body = Message)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(Message::new("OK, I'm alive!"))
}
