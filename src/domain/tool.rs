// Content tool domain models
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Dashboard,
    Titles,
    Script,
    Tags,
    Thumbnail,
    Trends,
}

impl ToolId {
    pub const ALL: [ToolId; 6] = [
        ToolId::Dashboard,
        ToolId::Titles,
        ToolId::Script,
        ToolId::Tags,
        ToolId::Thumbnail,
        ToolId::Trends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Dashboard => "dashboard",
            ToolId::Titles => "titles",
            ToolId::Script => "script",
            ToolId::Tags => "tags",
            ToolId::Thumbnail => "thumbnail",
            ToolId::Trends => "trends",
        }
    }

    /// Label shown in the dashboard sidebar
    pub fn label(&self) -> &'static str {
        match self {
            ToolId::Dashboard => "Painel",
            ToolId::Titles => "Gerador de Títulos",
            ToolId::Script => "Roteiro Mágico",
            ToolId::Tags => "Gerador de Tags",
            ToolId::Thumbnail => "Thumbnails",
            ToolId::Trends => "Tendências",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub label: &'static str,
}

pub fn tool_catalog() -> Vec<ToolDescriptor> {
    ToolId::ALL
        .iter()
        .map(|id| ToolDescriptor {
            id: *id,
            label: id.label(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub month: String,
    pub interest: f64,
    pub competition: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbnailConcept {
    pub prompt: String,
    #[serde(rename = "imageBase64", skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ThumbnailConcept {
    pub fn has_image(&self) -> bool {
        self.image_base64.is_some()
    }

    /// Raw image bytes; `None` when no image was produced or the payload is not valid base64
    pub fn decode_image(&self) -> Option<Vec<u8>> {
        let data = self.image_base64.as_deref()?;
        STANDARD.decode(data.trim()).ok()
    }
}

/// Typed payload attached to a generated result, one shape per tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum ToolPayload {
    Titles { titles: Vec<String> },
    Script { markdown: String },
    Tags { tags: Vec<String> },
    Trends { points: Vec<TrendDataPoint> },
    Thumbnail { concept: ThumbnailConcept },
}

impl ToolPayload {
    pub fn tool_id(&self) -> ToolId {
        match self {
            ToolPayload::Titles { .. } => ToolId::Titles,
            ToolPayload::Script { .. } => ToolId::Script,
            ToolPayload::Tags { .. } => ToolId::Tags,
            ToolPayload::Trends { .. } => ToolId::Trends,
            ToolPayload::Thumbnail { .. } => ToolId::Thumbnail,
        }
    }

    /// Plain-text rendition used as the result's `content`
    fn summary(&self) -> String {
        match self {
            ToolPayload::Titles { titles } => titles.join("\n"),
            ToolPayload::Script { markdown } => markdown.clone(),
            ToolPayload::Tags { tags } => tags.join(", "),
            ToolPayload::Trends { points } => points
                .iter()
                .map(|p| format!("{}: interest {} / competition {}", p.month, p.interest, p.competition))
                .collect::<Vec<_>>()
                .join("\n"),
            ToolPayload::Thumbnail { concept } => concept.prompt.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResult {
    pub id: String,
    #[serde(rename = "type")]
    pub tool: ToolId,
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ToolPayload>,
}

impl GeneratedResult {
    pub fn new(payload: ToolPayload, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tool: payload.tool_id(),
            content: payload.summary(),
            timestamp,
            metadata: Some(payload),
        }
    }
}
