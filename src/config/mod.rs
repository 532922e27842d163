use crate::error::ReadmeGenError;
use crate::llm::Backend;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "readme-gen.toml";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub llm_provider: Option<Backend>,
    pub claude: Option<BackendConfig>,
    pub openai: Option<BackendConfig>,
    pub llama: Option<BackendConfig>,
}

/// Per-backend overrides read from the config file. Unset fields fall back
/// to the backend's defaults.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct BackendConfig {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub base_url: Option<String>,
}

/// Fully resolved request parameters for one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
}

impl Config {
    /// Loads the config file at `path`. A missing file yields the defaults
    /// unless `required` is set, in which case it is an I/O error.
    pub fn load(path: &Path, required: bool) -> Result<Self, ReadmeGenError> {
        match fs::read_to_string(path) {
            Ok(config_str) => {
                debug!("Loaded config from {}", path.display());
                Self::from_toml_str(&config_str)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ReadmeGenError> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }

    /// Picks the backend: CLI flag, then the `LLM_PROVIDER` value, then the
    /// config file, then Claude.
    pub fn resolve_backend(
        &self,
        cli: Option<Backend>,
        env_value: Option<&str>,
    ) -> Result<Backend, ReadmeGenError> {
        if let Some(backend) = cli {
            return Ok(backend);
        }
        if let Some(value) = env_value {
            return value.parse();
        }
        Ok(self.llm_provider.unwrap_or_default())
    }

    pub fn backend_settings(&self, backend: Backend) -> BackendSettings {
        let overrides = match backend {
            Backend::Claude => self.claude.as_ref(),
            Backend::OpenAI => self.openai.as_ref(),
            Backend::Llama => self.llama.as_ref(),
        };
        let defaults = backend.default_settings();
        match overrides {
            Some(o) => BackendSettings {
                model: o.model.clone().unwrap_or(defaults.model),
                max_tokens: o.max_tokens.unwrap_or(defaults.max_tokens),
                base_url: o
                    .base_url
                    .as_deref()
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
            },
            None => defaults,
        }
    }
}

/// API keys, read once at startup and handed to the adapters.
#[derive(Default, Clone)]
pub struct Credentials {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Credentials {
            anthropic_api_key: read(Backend::Claude.api_key_var()),
            openai_api_key: read(Backend::OpenAI.api_key_var()),
            groq_api_key: read(Backend::Llama.api_key_var()),
        }
    }

    pub fn api_key(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Claude => self.anthropic_api_key.as_deref(),
            Backend::OpenAI => self.openai_api_key.as_deref(),
            Backend::Llama => self.groq_api_key.as_deref(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = |key: &Option<String>| if key.is_some() { "set" } else { "unset" };
        f.debug_struct("Credentials")
            .field("anthropic_api_key", &state(&self.anthropic_api_key))
            .field("openai_api_key", &state(&self.openai_api_key))
            .field("groq_api_key", &state(&self.groq_api_key))
            .finish()
    }
}
