use reqwest::Client;

use crate::config::constants::OPENAI_BASE_URL;
use crate::constants::prompts::QUESTION_TEMPLATE_PREFIX;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::QandaResult;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::config::generation_config::GenerationConfig;
use crate::structs::prompt_request::PromptRequest;

#[derive(Clone)]
pub struct OpenAIProvider {
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    pub fn new() -> Self {
        Self {
            base_url: OPENAI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn get_openai_messages(&self, request: &PromptRequest) -> Vec<OpenAIMessage> {
        vec![
            OpenAIMessage::system(request.system_instruction.clone()),
            OpenAIMessage::user(format!(
                "{}{}",
                QUESTION_TEMPLATE_PREFIX, request.user_question
            )),
        ]
    }

    fn get_request(&self, request: &PromptRequest, config: &GenerationConfig) -> OpenAIRequest {
        OpenAIRequest {
            model: config.model.clone(),
            messages: self.get_openai_messages(request),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    async fn make_request(
        &self,
        config: &GenerationConfig,
        request_body: OpenAIRequest,
    ) -> Result<reqwest::Response, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::RemoteServiceError(e.to_string()))
    }

    /// Sends one chat completion request and returns the decoded text.
    ///
    /// The config is validated first; an out-of-range value means no
    /// network call is made. A rejected credential surfaces as
    /// `AuthenticationError`, everything else as `RemoteServiceError`.
    /// Failures are not retried.
    pub async fn complete(
        &self,
        request: &PromptRequest,
        config: &GenerationConfig,
    ) -> QandaResult<String> {
        config.validate()?;

        let request_body = self.get_request(request, config);
        log::debug!("📦 Request model: {}", request_body.model);

        let response = self.make_request(config, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                _ => AiProviderError::RemoteServiceError(format!("HTTP {}: {}", status, error_text)),
            }
            .into());
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::RemoteServiceError(e.to_string()))?;

        let content = json
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| AiProviderError::RemoteServiceError("No content in response".to_string()))?;

        Ok(content.to_string())
    }
}

impl Default for OpenAIProvider {
    fn default() -> Self {
        Self::new()
    }
}
