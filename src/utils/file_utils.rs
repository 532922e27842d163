use crate::error::ReadmeGenError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Reads the whole file as UTF-8 text. The content is passed on unmodified,
/// whatever its size.
pub fn read_file_content(file_path: &Path) -> Result<String, ReadmeGenError> {
    info!("Reading {}", file_path.display());
    let content = fs::read_to_string(file_path)?;
    debug!("Read {} bytes from {}", content.len(), file_path.display());
    Ok(content)
}
