// Main entry point - Dependency injection and server setup
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use mago_tube::application::content_tools_service::{ContentToolsService, ToolModels};
use mago_tube::application::generative_model::GenerativeModel;
use mago_tube::application::landing_service::LandingService;
use mago_tube::application::result_history::ResultHistory;
use mago_tube::infrastructure::config::{load_app_config, load_landing_config};
use mago_tube::infrastructure::gemini_client::GeminiClient;
use mago_tube::presentation::app_state::AppState;
use mago_tube::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let landing_content = load_landing_config()?;

    if app_config.gemini.api_key.is_none() {
        tracing::warn!("no Gemini API key configured; tool requests will fail");
    }

    // Create model client (infrastructure layer)
    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(&app_config.gemini)?);

    // Create services (application layer)
    let history = ResultHistory::new(app_config.history.capacity);
    let tools_service = ContentToolsService::new(
        model,
        ToolModels::from(&app_config.gemini),
        app_config.tools.clone(),
        history,
    );
    let landing_service = LandingService::new(landing_content)?;

    // Create application state
    let state = Arc::new(AppState {
        tools_service,
        landing_service,
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr = app_config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "starting mago-tube service");

    axum::serve(listener, app).await?;

    Ok(())
}
