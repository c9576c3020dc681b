// Port for the hosted generative model
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to model failed: {0}")]
    Transport(String),

    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode model response: {0}")]
    Decode(String),

    #[error("no API key configured for the generative model")]
    MissingCredentials,
}

impl ModelError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ModelError::Status { status: 429, .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Object,
    Array,
}

/// Declared output shape for JSON-mode generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    pub fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn array(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// Object whose listed properties are all required
    pub fn object(properties: Vec<(&str, ResponseSchema)>) -> Self {
        let required = properties.iter().map(|(name, _)| name.to_string()).collect();
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required,
            ..Self::scalar(SchemaType::Object)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<ResponseSchema>,
}

impl GenerationConfig {
    pub fn is_empty(&self) -> bool {
        *self == GenerationConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub config: GenerationConfig,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload exactly as sent by the model
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    InlineData(InlineData),
}

/// Content parts of the first candidate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    pub parts: Vec<ContentPart>,
}

impl GenerationResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![ContentPart::Text(text.into())],
        }
    }

    /// Concatenated text parts; empty when the model sent none
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                ContentPart::Text(t) => Some(t.as_str()),
                ContentPart::InlineData(_) => None,
            })
            .collect()
    }

    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts.iter().find_map(|p| match p {
            ContentPart::InlineData(data) => Some(data),
            ContentPart::Text(_) => None,
        })
    }
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Run one generation round trip. No retries.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ModelError>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued outcomes in order and records every request it receives.
    #[derive(Default)]
    pub struct ScriptedModel {
        outcomes: Mutex<VecDeque<Result<GenerationResponse, ModelError>>>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedModel {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply_text(self, text: &str) -> Self {
            self.reply(Ok(GenerationResponse::from_text(text)))
        }

        pub fn reply(self, outcome: Result<GenerationResponse, ModelError>) -> Self {
            self.outcomes.lock().unwrap().push_back(outcome);
            self
        }

        pub fn fail(self, error: ModelError) -> Self {
            self.reply(Err(error))
        }

        pub fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ModelError> {
            self.requests.lock().unwrap().push(request);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ModelError::Transport("no scripted reply left".to_string())))
        }
    }
}
