//! Data models and structures
//!
//! Defines the core data structures for campaigns, provider selection, and
//! API interactions with the OpenAI chat endpoint.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One generated caption plus its image pairing.
///
/// `image_url` serializes as JSON `null` when no resolved image link was
/// requested or available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub text: String,
    pub image_query: String,
    pub image_url: Option<String>,
}

/// Final output of one invocation: the topic plus its ordered variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub topic: String,
    pub variants: Vec<Variant>,
}

impl Campaign {
    pub fn new(topic: String, variants: Vec<Variant>) -> Self {
        Self { topic, variants }
    }
}

/// Closed set of text providers selectable via `--llm-provider`/`LLM_PROVIDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Stub,
    Google,
    OpenAi,
    Anthropic,
}

impl LlmProvider {
    /// Parse a provider name; common aliases are accepted.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            "google" | "gemini" => Ok(Self::Google),
            "openai" => Ok(Self::OpenAi),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            other => Err(Error::Config(format!(
                "Unknown LLM provider '{}'. Expected stub|google|openai|anthropic",
                other
            ))),
        }
    }
}

/// Image lookup strategy selectable via `--image-bank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBank {
    Unsplash,
    Suggest,
}

impl ImageBank {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "unsplash" => Ok(Self::Unsplash),
            "suggest" => Ok(Self::Suggest),
            other => Err(Error::Config(format!(
                "Unknown image bank '{}'. Expected unsplash|suggest",
                other
            ))),
        }
    }
}

// OpenAI API Request/Response models
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_completion_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub unsplash_access_key: Option<String>,
    pub llm_provider: String,
    pub llm_model: String,
}

/// Read an environment variable, treating empty/whitespace values as unset.
fn env_opt(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and environment variables.
    ///
    /// API keys are optional at this point; whether a missing key is an error
    /// depends on the provider/bank selection and is decided at client
    /// construction time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            google_api_key: env_opt("GOOGLE_API_KEY"),
            openai_api_key: env_opt("OPENAI_API_KEY"),
            unsplash_access_key: env_opt("UNSPLASH_ACCESS_KEY"),
            llm_provider: env_opt("LLM_PROVIDER").unwrap_or_else(|| "google".to_string()),
            llm_model: env_opt("LLM_MODEL").unwrap_or_else(|| "gemini-1".to_string()),
        }
    }

    /// Apply CLI-level overrides on top of the environment configuration.
    pub fn with_overrides(mut self, provider: Option<String>, model: Option<String>) -> Self {
        if let Some(provider) = provider {
            self.llm_provider = provider;
        }
        if let Some(model) = model {
            self.llm_model = model;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_serializes_missing_url_as_null() {
        let variant = Variant {
            text: "Buy now and save! #Deal".to_string(),
            image_query: "coffee shop".to_string(),
            image_url: None,
        };

        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains("\"image_url\":null"));

        let deserialized: Variant = serde_json::from_str(&json).unwrap();
        assert!(deserialized.image_url.is_none());
    }

    #[test]
    fn test_campaign_round_trip() {
        let campaign = Campaign::new(
            "launch sale".to_string(),
            vec![Variant {
                text: "Big savings today!".to_string(),
                image_query: "launch sale banner".to_string(),
                image_url: Some("https://images.example.com/1.jpg".to_string()),
            }],
        );

        let json = serde_json::to_string(&campaign).unwrap();
        let deserialized: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.topic, "launch sale");
        assert_eq!(deserialized.variants.len(), 1);
    }

    #[test]
    fn test_provider_parse_accepts_aliases() {
        assert_eq!(LlmProvider::parse("google").unwrap(), LlmProvider::Google);
        assert_eq!(LlmProvider::parse("Gemini").unwrap(), LlmProvider::Google);
        assert_eq!(LlmProvider::parse("openai").unwrap(), LlmProvider::OpenAi);
        assert_eq!(LlmProvider::parse("claude").unwrap(), LlmProvider::Anthropic);
        assert_eq!(LlmProvider::parse("stub").unwrap(), LlmProvider::Stub);
    }

    #[test]
    fn test_provider_parse_rejects_unknown_names() {
        let err = LlmProvider::parse("mistral").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_image_bank_parse() {
        assert_eq!(ImageBank::parse("unsplash").unwrap(), ImageBank::Unsplash);
        assert_eq!(ImageBank::parse("suggest").unwrap(), ImageBank::Suggest);
        assert!(matches!(
            ImageBank::parse("pexels").unwrap_err(),
            Error::Config(_)
        ));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config {
            google_api_key: None,
            openai_api_key: None,
            unsplash_access_key: None,
            llm_provider: "google".to_string(),
            llm_model: "gemini-1".to_string(),
        };

        let config = config.with_overrides(Some("openai".to_string()), None);
        assert_eq!(config.llm_provider, "openai");
        assert_eq!(config.llm_model, "gemini-1");
    }
}
