use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::Database;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 503, description = "Database is unreachable")
    ),
    tag = "health"
)]
pub async fn health_check(State(db): State<Database>) -> Response {
    match sqlx::query("SELECT 1").execute(db.pool()).await {
        Ok(_) => Json(json!({ "status": "ok", "database": "up" })).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "down" })),
            )
                .into_response()
        }
    }
}
