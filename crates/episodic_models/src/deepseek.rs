use crate::{ChatCompletionRequest, ChatCompletionResponse, Message, PrompterConfig};
use async_trait::async_trait;
use episodic_error::{EpisodicResult, PrompterError, PrompterErrorKind};
use episodic_interface::Prompter;
use tracing::instrument;

/// Prefix prepended to every system prompt.
pub const SYSTEM_PROMPT_PREFIX: &str = "You work with podcast episodes' titles and descriptions. ";

/// Client for an OpenAI-compatible chat completions API
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct DeepSeekPrompter {
    /// Connection settings
    config: PrompterConfig,
    /// Shared HTTP client
    client: reqwest::Client,
}

impl DeepSeekPrompter {
    /// Create a new prompter
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: PrompterConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a new prompter sharing an existing HTTP client
    pub fn with_client(config: PrompterConfig, client: reqwest::Client) -> Self {
        tracing::debug!("Creating prompter");
        Self { config, client }
    }

    /// Build the request sent for one prompt
    pub fn build_request(&self, system: &str, user: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message::system(format!("{}{}", SYSTEM_PROMPT_PREFIX, system)),
                Message::user(user),
            ],
            max_tokens: Some(self.config.max_tokens),
        }
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, PrompterError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            tracing::error!("No API key configured");
            PrompterError::new(PrompterErrorKind::Configuration(
                "DEEPSEEK_API_KEY not set".into(),
            ))
        })?;

        let url = self.config.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                PrompterError::new(PrompterErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "API returned error");
            return Err(PrompterError::new(PrompterErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            PrompterError::new(PrompterErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl Prompter for DeepSeekPrompter {
    #[instrument(skip(self, system, user))]
    async fn prompt(&self, system: &str, user: &str) -> EpisodicResult<String> {
        let request = self.build_request(system, user);
        let response = self.chat_completion(&request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PrompterError::new(PrompterErrorKind::EmptyCompletion))?;

        Ok(content.trim().to_string())
    }
}
