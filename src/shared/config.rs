//! Application configuration. API credentials, endpoint, per-call-site sampling.

use crate::domain::DomainError;
use crate::usecases::insight_service::{InsightSettings, SamplingSettings};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AI_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Completion endpoint
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key. Read from JOURNEY_INSIGHTS_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from JOURNEY_INSIGHTS_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from JOURNEY_INSIGHTS_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// HTTP client timeout in seconds; 0 disables it. Read from JOURNEY_INSIGHTS_AI_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_request_timeout_secs: Option<u64>,

    /// Use the mock completion adapter instead of the remote endpoint. Read from JOURNEY_INSIGHTS_AI_MOCK.
    #[serde(default)]
    pub ai_mock: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Call-site sampling
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub summary_max_tokens: Option<u32>,
    #[serde(default)]
    pub summary_temperature: Option<f32>,
    #[serde(default)]
    pub sentiment_max_tokens: Option<u32>,
    #[serde(default)]
    pub sentiment_temperature: Option<f32>,
    #[serde(default)]
    pub insights_max_tokens: Option<u32>,
    #[serde(default)]
    pub insights_temperature: Option<f32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("JOURNEY_INSIGHTS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("JOURNEY_INSIGHTS").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the AI API key if configured and non-blank.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API key or fails. Called once at startup.
    pub fn require_ai_api_key(&self) -> Result<String, DomainError> {
        self.ai_api_key().ok_or_else(|| {
            DomainError::Config(
                "Set JOURNEY_INSIGHTS_AI_API_KEY (env or .env) to enable insight generation"
                    .to_string(),
            )
        })
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Returns the HTTP timeout. `None` when explicitly set to 0.
    pub fn ai_request_timeout(&self) -> Option<Duration> {
        match self
            .ai_request_timeout_secs
            .unwrap_or(DEFAULT_AI_REQUEST_TIMEOUT_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn is_ai_mock(&self) -> bool {
        self.ai_mock.unwrap_or(false)
    }

    /// Per-call-site sampling, falling back to the built-in defaults.
    pub fn insight_settings(&self) -> InsightSettings {
        let defaults = InsightSettings::default();
        InsightSettings {
            session_summary: SamplingSettings {
                max_tokens: self
                    .summary_max_tokens
                    .unwrap_or(defaults.session_summary.max_tokens),
                temperature: self
                    .summary_temperature
                    .unwrap_or(defaults.session_summary.temperature),
            },
            sentiment: SamplingSettings {
                max_tokens: self
                    .sentiment_max_tokens
                    .unwrap_or(defaults.sentiment.max_tokens),
                temperature: self
                    .sentiment_temperature
                    .unwrap_or(defaults.sentiment.temperature),
            },
            personal_insights: SamplingSettings {
                max_tokens: self
                    .insights_max_tokens
                    .unwrap_or(defaults.personal_insights.max_tokens),
                temperature: self
                    .insights_temperature
                    .unwrap_or(defaults.personal_insights.temperature),
            },
        }
    }
}
