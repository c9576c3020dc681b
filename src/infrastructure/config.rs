use crate::domain::landing::LandingContent;
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub reasoning_model: String,
    pub timeout_seconds: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            reasoning_model: "gemini-2.5-flash".to_string(),
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OnError {
    /// Hand the error back to the caller
    Propagate,
    /// Log it and answer with the operation's empty result
    Degrade,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnEmpty {
    Empty,
    /// `${topic}` and `${title}` are substituted
    Placeholder { text: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FailurePolicy {
    pub on_error: OnError,
    pub on_empty: OnEmpty,
}

impl FailurePolicy {
    pub fn propagate() -> Self {
        Self {
            on_error: OnError::Propagate,
            on_empty: OnEmpty::Empty,
        }
    }

    pub fn degrade() -> Self {
        Self {
            on_error: OnError::Degrade,
            on_empty: OnEmpty::Empty,
        }
    }

    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.on_empty = OnEmpty::Placeholder {
            text: text.to_string(),
        };
        self
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(from = "ToolsOverrides")]
pub struct ToolsConfig {
    pub default_tone: String,
    pub default_duration: String,
    pub title_temperature: f32,
    pub titles: FailurePolicy,
    pub script: FailurePolicy,
    pub tags: FailurePolicy,
    pub trends: FailurePolicy,
    pub thumbnail: FailurePolicy,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tone: "Empolgante".to_string(),
            default_duration: "8-10 minutos".to_string(),
            title_temperature: 0.8,
            titles: FailurePolicy::propagate(),
            script: FailurePolicy::propagate().with_placeholder("Erro ao gerar roteiro."),
            tags: FailurePolicy::propagate(),
            trends: FailurePolicy::degrade(),
            thumbnail: FailurePolicy::propagate()
                .with_placeholder("A viral youtube thumbnail about ${topic}"),
        }
    }
}

/// Partial `[tools.<op>]` table; unset fields keep that tool's default.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PolicyOverride {
    on_error: Option<OnError>,
    on_empty: Option<OnEmpty>,
}

impl PolicyOverride {
    fn apply(self, base: FailurePolicy) -> FailurePolicy {
        FailurePolicy {
            on_error: self.on_error.unwrap_or(base.on_error),
            on_empty: self.on_empty.unwrap_or(base.on_empty),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ToolsOverrides {
    default_tone: Option<String>,
    default_duration: Option<String>,
    title_temperature: Option<f32>,
    titles: PolicyOverride,
    script: PolicyOverride,
    tags: PolicyOverride,
    trends: PolicyOverride,
    thumbnail: PolicyOverride,
}

impl From<ToolsOverrides> for ToolsConfig {
    fn from(overrides: ToolsOverrides) -> Self {
        let base = ToolsConfig::default();
        Self {
            default_tone: overrides.default_tone.unwrap_or(base.default_tone),
            default_duration: overrides.default_duration.unwrap_or(base.default_duration),
            title_temperature: overrides.title_temperature.unwrap_or(base.title_temperature),
            titles: overrides.titles.apply(base.titles),
            script: overrides.script.apply(base.script),
            tags: overrides.tags.apply(base.tags),
            trends: overrides.trends.apply(base.trends),
            thumbnail: overrides.thumbnail.apply(base.thumbnail),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistorySettings {
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

/// Load `config/app.toml` (optional) with `MAGO__SECTION__KEY` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("MAGO").separator("__"))
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;
    if app_config.gemini.api_key.is_none() {
        app_config.gemini.api_key = std::env::var("API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    Ok(app_config)
}

pub fn load_landing_config() -> anyhow::Result<LandingContent> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/landing"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a template
pub fn prepare_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
