use super::{calculate_tokens, check_status, log_performance, LLM, TEMPERATURE};
use crate::config::BackendSettings;
use crate::error::ReadmeGenError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Instant;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Clone)]
pub struct Claude {
    api_key: String,
    settings: BackendSettings,
    client: Client,
}

impl Claude {
    pub fn new(api_key: &str, settings: BackendSettings) -> Self {
        Claude {
            api_key: api_key.to_string(),
            settings,
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> String {
        format!("Claude ({})", self.settings.model)
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "temperature": TEMPERATURE,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        })
    }

    fn parse_response(response: &Value) -> Result<String, ReadmeGenError> {
        response["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                ReadmeGenError::LlmError("Claude response has no content[0].text".to_string())
            })
    }
}

#[async_trait]
impl LLM for Claude {
    async fn generate(&self, prompt: &str) -> Result<String, ReadmeGenError> {
        let start_time = Instant::now();
        let input_tokens = calculate_tokens(prompt);
        let url = format!("{}/messages", self.settings.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status("Claude", status, &body)?;

        let output = Self::parse_response(&serde_json::from_str(&body)?)?;
        let output_tokens = calculate_tokens(&output);

        log_performance(&self.model_name(), start_time, input_tokens, output_tokens);

        Ok(output)
    }

    fn model_name(&self) -> String {
        self.model_name()
    }
}
