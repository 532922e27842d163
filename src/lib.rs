pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompt;
pub mod readme;
pub mod utils;

pub use config::{Config, Credentials};
pub use error::ReadmeGenError;
pub use generator::{generate_readme, GenerationOutcome};
pub use llm::{Backend, LLM};
