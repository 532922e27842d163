use crate::error::ReadmeGenError;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const README_FILENAME: &str = "README.md";

fn readme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<readme>(.*?)</readme>").expect("valid readme regex"))
}

/// Returns the trimmed text between the first `<readme>` and the next
/// `</readme>`, or `None` when the reply has no such block.
pub fn extract_readme(raw: &str) -> Option<String> {
    readme_pattern()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Directory the README goes into: the parent of the absolutized input path.
pub fn readme_directory(input: &Path) -> Result<PathBuf, ReadmeGenError> {
    let absolute = std::path::absolute(input)?;
    absolute.parent().map(Path::to_path_buf).ok_or_else(|| {
        ReadmeGenError::ConfigError(format!("{} has no parent directory", absolute.display()))
    })
}

/// Writes `body` to `dir/README.md`, replacing whatever is there.
pub fn write_readme(body: &str, dir: &Path) -> Result<PathBuf, ReadmeGenError> {
    let readme_path = dir.join(README_FILENAME);
    debug!("Writing {} bytes to {}", body.len(), readme_path.display());
    fs::write(&readme_path, body)?;
    Ok(readme_path)
}
