// HTTP request handlers
use crate::application::content_tools_service::ToolError;
use crate::application::landing_service::CarouselInput;
use crate::domain::tool::{tool_catalog, ToolId, ToolPayload};
use crate::infrastructure::http_response::{accepts_brotli, bytes_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

#[derive(Deserialize)]
pub struct TitlesRequest {
    pub topic: String,
    pub tone: Option<String>,
}

#[derive(Deserialize)]
pub struct ScriptRequest {
    pub title: String,
    pub duration: Option<String>,
}

#[derive(Deserialize)]
pub struct ThumbnailQuery {
    /// `image` returns the decoded image bytes instead of the JSON result
    pub format: Option<String>,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct CarouselQuery {
    pub active: Option<usize>,
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    #[serde(default)]
    pub active: usize,
    #[serde(flatten)]
    pub input: CarouselInput,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

async fn respond<T: Serialize>(status: StatusCode, data: &T, compress: bool) -> Response {
    match json_response(status, data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

pub fn status_for(error: &ToolError) -> StatusCode {
    match error {
        ToolError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ToolError::Model(e) if e.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
        ToolError::Model(_) | ToolError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(tool: ToolId, error: &ToolError) -> Response {
    let status = status_for(error);
    tracing::warn!(tool = %tool, %status, "responding with tool error");
    message_response(status, &error.to_string())
}

/// Stamp, store and send a successful tool payload
async fn recorded(state: &AppState, payload: ToolPayload, compress: bool) -> Response {
    let result = state.tools_service.record(payload).await;
    tracing::info!(tool = %result.tool, id = %result.id, "tool result generated");
    respond(StatusCode::OK, &result, compress).await
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_tools(headers: HeaderMap) -> Response {
    respond(StatusCode::OK, &tool_catalog(), accepts_brotli(&headers)).await
}

pub async fn generate_titles(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<TitlesRequest>,
) -> Response {
    let service = &state.tools_service;
    let tone = body
        .tone
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(service.default_tone());

    match service.generate_titles(&body.topic, tone).await {
        Ok(titles) => recorded(&state, ToolPayload::Titles { titles }, accepts_brotli(&headers)).await,
        Err(e) => error_response(ToolId::Titles, &e),
    }
}

pub async fn generate_script(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScriptRequest>,
) -> Response {
    let service = &state.tools_service;
    let duration = body
        .duration
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(service.default_duration());

    match service.generate_script(&body.title, duration).await {
        Ok(markdown) => recorded(&state, ToolPayload::Script { markdown }, accepts_brotli(&headers)).await,
        Err(e) => error_response(ToolId::Script, &e),
    }
}

pub async fn generate_tags(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<TopicRequest>,
) -> Response {
    match state.tools_service.generate_tags(&body.topic).await {
        Ok(tags) => recorded(&state, ToolPayload::Tags { tags }, accepts_brotli(&headers)).await,
        Err(e) => error_response(ToolId::Tags, &e),
    }
}

pub async fn analyze_trends(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<TopicRequest>,
) -> Response {
    match state.tools_service.analyze_trends(&body.topic).await {
        Ok(points) => recorded(&state, ToolPayload::Trends { points }, accepts_brotli(&headers)).await,
        Err(e) => error_response(ToolId::Trends, &e),
    }
}

pub async fn generate_thumbnail(
    Query(query): Query<ThumbnailQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<TopicRequest>,
) -> Response {
    let concept = match state.tools_service.generate_thumbnail_concept(&body.topic).await {
        Ok(concept) => concept,
        Err(e) => return error_response(ToolId::Thumbnail, &e),
    };

    if query.format.as_deref() != Some("image") {
        return recorded(&state, ToolPayload::Thumbnail { concept }, accepts_brotli(&headers)).await;
    }

    let image = concept.decode_image().zip(concept.mime_type.clone());
    let has_image = concept.has_image();
    state.tools_service.record(ToolPayload::Thumbnail { concept }).await;

    match image {
        Some((bytes, mime_type)) => {
            bytes_response(&mime_type, bytes).unwrap_or_else(|status| status.into_response())
        }
        None if has_image => message_response(StatusCode::BAD_GATEWAY, "model returned an undecodable image"),
        None => message_response(StatusCode::NOT_FOUND, "model returned no image"),
    }
}

pub async fn history(
    Query(query): Query<HistoryQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let limit = query.limit.unwrap_or(usize::MAX);
    let results = state.tools_service.history().recent(limit).await;
    respond(StatusCode::OK, &results, accepts_brotli(&headers)).await
}

pub async fn landing_page(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(StatusCode::OK, &state.landing_service.page(), accepts_brotli(&headers)).await
}

pub async fn landing_modules(
    Query(query): Query<CarouselQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let view = state.landing_service.carousel(query.active.unwrap_or(0));
    respond(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

pub async fn navigate_modules(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(body): Json<NavigateRequest>,
) -> Response {
    let view = state.landing_service.navigate(body.active, &body.input);
    respond(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generative_model::ModelError;

    #[test]
    fn test_status_mapping() {
        let invalid = ToolError::InvalidInput("topic must not be empty".to_string());
        assert_eq!(status_for(&invalid), StatusCode::BAD_REQUEST);

        let limited = ToolError::Model(ModelError::Status {
            status: 429,
            body: "quota".to_string(),
        });
        assert_eq!(status_for(&limited), StatusCode::TOO_MANY_REQUESTS);

        let upstream = ToolError::Model(ModelError::Status {
            status: 500,
            body: String::new(),
        });
        assert_eq!(status_for(&upstream), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&ToolError::Model(ModelError::MissingCredentials)), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&ToolError::MalformedResponse("eof".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_navigate_request_flattens_action() {
        let body: NavigateRequest = serde_json::from_str(r#"{"active":2,"action":"key","key":"ArrowLeft"}"#).unwrap();
        assert_eq!(body.active, 2);
        assert!(matches!(body.input, CarouselInput::Key { ref key } if key == "ArrowLeft"));
    }
}
