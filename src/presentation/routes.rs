// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    analyze_trends, generate_script, generate_tags, generate_thumbnail, generate_titles,
    health_check, history, landing_modules, landing_page, list_tools, navigate_modules,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// JSON bodies are compressed by the response builders, so no CompressionLayer here
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/tools", get(list_tools))
        .route("/tools/titles", post(generate_titles))
        .route("/tools/script", post(generate_script))
        .route("/tools/tags", post(generate_tags))
        .route("/tools/trends", post(analyze_trends))
        .route("/tools/thumbnail", post(generate_thumbnail))
        .route("/history", get(history))
        .route("/landing", get(landing_page))
        .route("/landing/modules", get(landing_modules))
        .route("/landing/modules/navigate", post(navigate_modules))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
