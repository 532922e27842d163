mod claude;
mod openai;

pub use claude::Claude;
pub use openai::OpenAI;

use crate::config::{BackendSettings, Config, Credentials};
use crate::error::ReadmeGenError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Every backend is asked for deterministic output.
pub const TEMPERATURE: f32 = 0.0;

#[async_trait]
pub trait LLM: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ReadmeGenError>;
    fn model_name(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    #[value(name = "claude")]
    Claude,
    #[value(name = "openai")]
    OpenAI,
    /// Llama served through Groq's OpenAI-compatible API.
    #[value(name = "llama")]
    Llama,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Claude => "claude",
            Backend::OpenAI => "openai",
            Backend::Llama => "llama",
        }
    }

    pub fn api_key_var(&self) -> &'static str {
        match self {
            Backend::Claude => "ANTHROPIC_API_KEY",
            Backend::OpenAI => "OPENAI_API_KEY",
            Backend::Llama => "GROQ_API_KEY",
        }
    }

    pub fn default_settings(&self) -> BackendSettings {
        let (model, base_url) = match self {
            Backend::Claude => ("claude-3-sonnet-20240229", "https://api.anthropic.com/v1"),
            Backend::OpenAI => ("gpt-4o", "https://api.openai.com/v1"),
            Backend::Llama => ("llama-3.1-70b-versatile", "https://api.groq.com/openai/v1"),
        };
        BackendSettings {
            model: model.to_string(),
            max_tokens: 1500,
            base_url: base_url.to_string(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ReadmeGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "claude" => Ok(Backend::Claude),
            "openai" => Ok(Backend::OpenAI),
            "llama" => Ok(Backend::Llama),
            other => Err(ReadmeGenError::ConfigError(format!(
                "Unsupported model: {} (expected one of claude, openai, llama)",
                other
            ))),
        }
    }
}

pub fn calculate_tokens(text: &str) -> usize {
    // Rough whitespace count; only used for the performance log line.
    text.split_whitespace().count()
}

pub fn log_performance(
    model: &str,
    start_time: Instant,
    input_tokens: usize,
    output_tokens: usize,
) {
    let duration = start_time.elapsed();
    let total_tokens = input_tokens + output_tokens;
    let tokens_per_second = total_tokens as f64 / duration.as_secs_f64();

    info!(
        "{} - Total duration: {:?}, Input tokens: {}, Output tokens: {}, Total tokens: {}, Tokens per second: {:.2}",
        model, duration, input_tokens, output_tokens, total_tokens, tokens_per_second
    );
}

/// Turns a non-success HTTP status into the matching error. 401 and 403 mean
/// the credential was rejected.
pub(crate) fn check_status(
    provider: &str,
    status: StatusCode,
    body: &str,
) -> Result<(), ReadmeGenError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ReadmeGenError::AuthError(format!(
            "{} rejected the API key ({}): {}",
            provider, status, body
        )));
    }
    Err(ReadmeGenError::LlmError(format!(
        "{} returned {}: {}",
        provider, status, body
    )))
}

pub fn get_llm(
    backend: Backend,
    config: &Config,
    credentials: &Credentials,
) -> Result<Box<dyn LLM>, ReadmeGenError> {
    let api_key = credentials.api_key(backend).ok_or_else(|| {
        ReadmeGenError::AuthError(format!(
            "{} is not set; export it or add it to .env",
            backend.api_key_var()
        ))
    })?;
    let settings = config.backend_settings(backend);
    debug!(
        "Selected backend {} (model {}, max_tokens {}, url {})",
        backend, settings.model, settings.max_tokens, settings.base_url
    );

    match backend {
        Backend::Claude => Ok(Box::new(Claude::new(api_key, settings))),
        Backend::OpenAI => Ok(Box::new(OpenAI::new("OpenAI", api_key, settings))),
        Backend::Llama => Ok(Box::new(OpenAI::new("Groq", api_key, settings))),
    }
}
