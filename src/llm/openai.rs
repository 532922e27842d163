use super::{calculate_tokens, check_status, log_performance, LLM, TEMPERATURE};
use crate::config::BackendSettings;
use crate::error::ReadmeGenError;
use crate::prompt::SYSTEM_PROMPT;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Instant;

/// Client for OpenAI-style `/chat/completions` endpoints. Groq exposes the
/// same API, so the Llama backend uses this too with a different base URL.
#[derive(Clone)]
pub struct OpenAI {
    provider: String,
    api_key: String,
    settings: BackendSettings,
    client: Client,
}

impl OpenAI {
    pub fn new(provider: &str, api_key: &str, settings: BackendSettings) -> Self {
        OpenAI {
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            settings,
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> String {
        format!("{} ({})", self.provider, self.settings.model)
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.settings.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": self.settings.max_tokens,
            "temperature": TEMPERATURE
        })
    }

    fn parse_response(&self, response: &Value) -> Result<String, ReadmeGenError> {
        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                ReadmeGenError::LlmError(format!(
                    "{} response has no choices[0].message.content",
                    self.provider
                ))
            })
    }
}

#[async_trait]
impl LLM for OpenAI {
    async fn generate(&self, prompt: &str) -> Result<String, ReadmeGenError> {
        let start_time = Instant::now();
        let input_tokens = calculate_tokens(prompt);
        let url = format!("{}/chat/completions", self.settings.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status(&self.provider, status, &body)?;

        let output = self.parse_response(&serde_json::from_str(&body)?)?;
        let output_tokens = calculate_tokens(&output);

        log_performance(&self.model_name(), start_time, input_tokens, output_tokens);

        Ok(output)
    }

    fn model_name(&self) -> String {
        self.model_name()
    }
}
