use std::time::Duration;

use axum::{Router, routing::get};
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{athletes, categories, health, training_centers};
use crate::middleware::auth::ApiKeys;
use crate::openapi::ApiDoc;

/// Assemble the full application router
pub fn app(db: Database, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/athletes", athletes::routes::routes(api_keys.clone()))
        .nest("/categories", categories::routes::routes(api_keys.clone()))
        .nest(
            "/training-centers",
            training_centers::routes::routes(api_keys),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
