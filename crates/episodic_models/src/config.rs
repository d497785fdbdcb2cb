//! Configuration for the text-generation API connection

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Maximum tokens generated per alternative.
pub const PROMPT_MAX_TOKENS: u32 = 50;

/// Configuration for the text-generation API connection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrompterConfig {
    /// Base URL of the API (e.g., "https://api.deepseek.com")
    pub base_url: String,
    /// Model identifier to use for generation
    pub model: String,
    /// API key sent as a bearer token
    pub api_key: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl PrompterConfig {
    /// Create a new configuration with the default token budget
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            max_tokens: PROMPT_MAX_TOKENS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `DEEPSEEK_BASE_URL` (default: "https://api.deepseek.com")
    /// - `DEEPSEEK_MODEL` (default: "deepseek-chat")
    /// - `DEEPSEEK_API_KEY` (optional; requests fail without it)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DEEPSEEK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            base_url,
            model,
            api_key,
            max_tokens: PROMPT_MAX_TOKENS,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Chat completions endpoint for this configuration
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}
