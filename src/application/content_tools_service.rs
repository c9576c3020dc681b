// Content tools service - One remote generation per tool, shaped for the caller
use crate::application::generative_model::{
    GenerationConfig, GenerationRequest, GenerativeModel, ModelError,
};
use crate::application::prompts;
use crate::application::result_history::ResultHistory;
use crate::domain::tool::{GeneratedResult, ThumbnailConcept, ToolId, ToolPayload, TrendDataPoint};
use crate::infrastructure::config::{
    prepare_template, FailurePolicy, GeminiSettings, OnEmpty, OnError, ToolsConfig,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•\d.]+\s+").expect("valid list marker pattern"));

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// Model identifiers used by the tools
#[derive(Debug, Clone)]
pub struct ToolModels {
    pub text: String,
    pub image: String,
    pub reasoning: String,
}

impl From<&GeminiSettings> for ToolModels {
    fn from(settings: &GeminiSettings) -> Self {
        Self {
            text: settings.text_model.clone(),
            image: settings.image_model.clone(),
            reasoning: settings.reasoning_model.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ContentToolsService {
    model: Arc<dyn GenerativeModel>,
    models: ToolModels,
    tools: ToolsConfig,
    history: ResultHistory,
}

impl ContentToolsService {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        models: ToolModels,
        tools: ToolsConfig,
        history: ResultHistory,
    ) -> Self {
        Self {
            model,
            models,
            tools,
            history,
        }
    }

    pub fn default_tone(&self) -> &str {
        &self.tools.default_tone
    }

    pub fn default_duration(&self) -> &str {
        &self.tools.default_duration
    }

    pub fn history(&self) -> &ResultHistory {
        &self.history
    }

    /// Ten candidate titles in model order, list markers stripped
    pub async fn generate_titles(&self, topic: &str, tone: &str) -> Result<Vec<String>, ToolError> {
        let topic = require("topic", topic)?;
        let policy = &self.tools.titles;

        let request = GenerationRequest::new(&self.models.text, prompts::titles_prompt(topic, tone))
            .with_config(GenerationConfig {
                temperature: Some(self.tools.title_temperature),
                candidate_count: Some(1),
                ..Default::default()
            });

        let outcome = self.generate_text(request).await.map(|text| {
            if text.trim().is_empty() {
                placeholder(policy, &[("topic", topic)]).into_iter().collect()
            } else {
                parse_titles(&text)
            }
        });

        settle(ToolId::Titles, policy, outcome, Vec::new)
    }

    /// Markdown script, or the configured placeholder when the model sends nothing
    pub async fn generate_script(&self, title: &str, duration: &str) -> Result<String, ToolError> {
        let title = require("title", title)?;
        let policy = &self.tools.script;

        let request = GenerationRequest::new(&self.models.text, prompts::script_prompt(title, duration));
        let empty = || placeholder(policy, &[("title", title)]).unwrap_or_default();

        let outcome = self
            .generate_text(request)
            .await
            .map(|text| if text.is_empty() { empty() } else { text });

        settle(ToolId::Script, policy, outcome, empty)
    }

    /// Comma-separated SEO tags, trimmed, model order, no dedup
    pub async fn generate_tags(&self, topic: &str) -> Result<Vec<String>, ToolError> {
        let topic = require("topic", topic)?;
        let policy = &self.tools.tags;

        let request = GenerationRequest::new(&self.models.text, prompts::tags_prompt(topic));
        let outcome = self.generate_text(request).await.map(|text| {
            if text.trim().is_empty() {
                placeholder(policy, &[("topic", topic)]).into_iter().collect()
            } else {
                parse_tags(&text)
            }
        });

        settle(ToolId::Tags, policy, outcome, Vec::new)
    }

    /// Six months of estimated interest/competition, requested in JSON mode.
    ///
    /// Parse failures go through the same policy as transport failures.
    pub async fn analyze_trends(&self, topic: &str) -> Result<Vec<TrendDataPoint>, ToolError> {
        let topic = require("topic", topic)?;
        let policy = &self.tools.trends;

        let request = GenerationRequest::new(&self.models.reasoning, prompts::trends_prompt(topic))
            .with_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompts::trends_schema()),
                ..Default::default()
            });

        let outcome = match self.generate_text(request).await {
            Ok(text) => parse_trends(&text),
            Err(e) => Err(e),
        };

        settle(ToolId::Trends, policy, outcome, Vec::new)
    }

    /// Describe a thumbnail, then render it. A reply without image data is a partial success.
    pub async fn generate_thumbnail_concept(&self, topic: &str) -> Result<ThumbnailConcept, ToolError> {
        let topic = require("topic", topic)?;
        let policy = &self.tools.thumbnail;
        let fallback_prompt = || placeholder(policy, &[("topic", topic)]).unwrap_or_default();

        let outcome = self.thumbnail_pipeline(topic, &fallback_prompt).await;

        settle(ToolId::Thumbnail, policy, outcome, || ThumbnailConcept {
            prompt: fallback_prompt(),
            image_base64: None,
            mime_type: None,
        })
    }

    async fn thumbnail_pipeline(
        &self,
        topic: &str,
        fallback_prompt: &(dyn Fn() -> String + Sync),
    ) -> Result<ThumbnailConcept, ToolError> {
        let description = self
            .generate_text(GenerationRequest::new(
                &self.models.text,
                prompts::thumbnail_description_prompt(topic),
            ))
            .await?;
        let image_prompt = if description.is_empty() {
            fallback_prompt()
        } else {
            description
        };

        tracing::debug!(topic, prompt_len = image_prompt.len(), "requesting thumbnail image");

        let response = self
            .model
            .generate(GenerationRequest::new(&self.models.image, image_prompt.clone()))
            .await?;

        let image = response.first_inline_data();
        if image.is_none() {
            tracing::warn!(topic, "image model returned no inline image data");
        }

        Ok(ThumbnailConcept {
            prompt: image_prompt,
            image_base64: image.map(|i| i.data.clone()),
            mime_type: image.map(|i| i.mime_type.clone()),
        })
    }

    /// Stamp a payload and keep it in the recent-results log
    pub async fn record(&self, payload: ToolPayload) -> GeneratedResult {
        let result = GeneratedResult::new(payload, chrono::Utc::now().timestamp_millis());
        self.history.record(result.clone()).await;
        result
    }

    async fn generate_text(&self, request: GenerationRequest) -> Result<String, ToolError> {
        let model = request.model.clone();
        let response = self.model.generate(request).await?;
        let text = response.text();
        tracing::debug!(model = %model, text_len = text.len(), "model replied");
        Ok(text)
    }
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

fn placeholder(policy: &FailurePolicy, vars: &[(&str, &str)]) -> Option<String> {
    match &policy.on_empty {
        OnEmpty::Empty => None,
        OnEmpty::Placeholder { text } => Some(prepare_template(text, vars)),
    }
}

fn settle<T>(
    tool: ToolId,
    policy: &FailurePolicy,
    outcome: Result<T, ToolError>,
    empty: impl FnOnce() -> T,
) -> Result<T, ToolError> {
    match outcome {
        Ok(value) => Ok(value),
        Err(e) => match policy.on_error {
            OnError::Propagate => {
                tracing::error!(tool = %tool, error = %e, "tool request failed");
                Err(e)
            }
            OnError::Degrade => {
                tracing::warn!(tool = %tool, error = %e, "tool request failed, returning empty result");
                Ok(empty())
            }
        },
    }
}

pub fn parse_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| LIST_MARKER.replace(line, "").into_owned())
        .collect()
}

pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// An empty reply counts as an empty array
pub fn parse_trends(text: &str) -> Result<Vec<TrendDataPoint>, ToolError> {
    let json = if text.trim().is_empty() { "[]" } else { text };
    serde_json::from_str(json).map_err(|e| ToolError::MalformedResponse(e.to_string()))
}
