use std::fmt;

#[derive(Debug)]
pub enum ReadmeGenError {
    IoError(std::io::Error),
    ConfigError(String),
    AuthError(String),
    LlmError(String),
}

impl std::error::Error for ReadmeGenError {}

impl fmt::Display for ReadmeGenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadmeGenError::IoError(err) => write!(f, "IO error: {}", err),
            ReadmeGenError::ConfigError(err) => write!(f, "Configuration error: {}", err),
            ReadmeGenError::AuthError(err) => write!(f, "Authentication error: {}", err),
            ReadmeGenError::LlmError(err) => write!(f, "LLM error: {}", err),
        }
    }
}

impl From<std::io::Error> for ReadmeGenError {
    fn from(err: std::io::Error) -> Self {
        ReadmeGenError::IoError(err)
    }
}

impl From<reqwest::Error> for ReadmeGenError {
    fn from(err: reqwest::Error) -> Self {
        ReadmeGenError::LlmError(err.to_string())
    }
}

impl From<serde_json::Error> for ReadmeGenError {
    fn from(err: serde_json::Error) -> Self {
        ReadmeGenError::LlmError(format!("malformed response: {}", err))
    }
}

impl From<toml::de::Error> for ReadmeGenError {
    fn from(err: toml::de::Error) -> Self {
        ReadmeGenError::ConfigError(err.to_string())
    }
}
