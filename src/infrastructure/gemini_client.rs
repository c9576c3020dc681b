// Gemini generateContent client
use crate::application::generative_model::{
    ContentPart, GenerationConfig, GenerationRequest, GenerationResponse, GenerativeModel,
    InlineData, ModelError,
};
use crate::infrastructure::config::GeminiSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<&'a GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

impl GeminiClient {
    /// Built once at startup from configuration; `reqwest::Client` is cheap to clone.
    pub fn new(settings: &GeminiSettings) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| ModelError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, model)
    }

    fn build_body<'a>(request: &'a GenerationRequest) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: (!request.config.is_empty()).then_some(&request.config),
        }
    }

    fn into_response(data: GenerateContentResponse) -> GenerationResponse {
        let parts = data
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match (part.inline_data, part.text) {
                (Some(inline), _) => Some(ContentPart::InlineData(InlineData {
                    mime_type: inline.mime_type,
                    data: inline.data,
                })),
                (None, Some(text)) => Some(ContentPart::Text(text)),
                (None, None) => None,
            })
            .collect();

        GenerationResponse { parts }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ModelError> {
        let api_key = self.api_key.as_deref().ok_or(ModelError::MissingCredentials)?;
        let url = self.endpoint(&request.model);
        let body = Self::build_body(&request);

        tracing::debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            json_mode = request.config.response_schema.is_some(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %request.model, error = %e, "generateContent request failed");
                ModelError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(model = %request.model, status, "generateContent returned an error status");
            return Err(ModelError::Status { status, body });
        }

        let data = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        tracing::debug!(
            model = %request.model,
            candidates = data.candidates.len(),
            "received generateContent response"
        );

        Ok(Self::into_response(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generative_model::{ResponseSchema, SchemaType};

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = GeminiSettings {
            api_base_url: "http://localhost:9999/v1beta/".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&settings).unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_body_omits_empty_generation_config() {
        let request = GenerationRequest::new("m", "olá");
        let json = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "olá");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_body_carries_json_mode() {
        let request = GenerationRequest::new("m", "p").with_config(GenerationConfig {
            temperature: Some(0.5),
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(ResponseSchema::array(ResponseSchema::scalar(SchemaType::String))),
            ..Default::default()
        });
        let json = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();

        let config = &json["generationConfig"];
        assert_eq!(config["temperature"], 0.5);
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "ARRAY");
        assert!(config.get("candidateCount").is_none());
    }

    #[test]
    fn test_response_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [
                    {"text": "Here is the image"},
                    {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}},
                    {"thought": true}
                ]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let data: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let response = GeminiClient::into_response(data);

        assert_eq!(response.parts.len(), 2);
        assert_eq!(response.text(), "Here is the image");
        assert_eq!(response.first_inline_data().unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let data: GenerateContentResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        let response = GeminiClient::into_response(data);
        assert!(response.parts.is_empty());
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let client = GeminiClient::new(&GeminiSettings::default()).unwrap();
        let result = client.generate(GenerationRequest::new("m", "p")).await;
        assert!(matches!(result, Err(ModelError::MissingCredentials)));
    }
}
