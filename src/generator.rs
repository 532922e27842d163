use crate::error::ReadmeGenError;
use crate::llm::LLM;
use crate::prompt::build_prompt;
use crate::readme::{extract_readme, readme_directory, write_readme};
use crate::utils::read_file_content;
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub struct GenerationOutcome {
    /// The backend's reply, untouched.
    pub raw_response: String,
    /// Where the README was written; `None` when the reply had no
    /// `<readme>` block.
    pub readme_path: Option<PathBuf>,
}

/// Runs one generation: read `file_path`, prompt the backend once, and write
/// the tagged part of the reply to `README.md` next to the input file.
///
/// `pb` only ticks while the backend request is in flight and is finished
/// on every return path.
pub async fn generate_readme(
    file_path: &Path,
    llm: &dyn LLM,
    pb: &ProgressBar,
) -> Result<GenerationOutcome, ReadmeGenError> {
    let result = run_pipeline(file_path, llm, pb).await;
    if !pb.is_finished() {
        pb.finish_and_clear();
    }
    result
}

async fn run_pipeline(
    file_path: &Path,
    llm: &dyn LLM,
    pb: &ProgressBar,
) -> Result<GenerationOutcome, ReadmeGenError> {
    let source = read_file_content(file_path)?;
    let target_dir = readme_directory(file_path)?;
    let prompt = build_prompt(&source);

    pb.set_message(format!("Waiting for {}...", llm.model_name()));
    pb.enable_steady_tick(SPINNER_TICK);
    let raw_response = llm.generate(&prompt).await;
    pb.finish_and_clear();
    let raw_response = raw_response?;

    let readme_path = match extract_readme(&raw_response) {
        Some(body) => {
            let path = write_readme(&body, &target_dir)?;
            info!(
                "README.md file has been created successfully in {}",
                target_dir.display()
            );
            Some(path)
        }
        None => {
            warn!("No README content found in the API response.");
            None
        }
    };

    Ok(GenerationOutcome {
        raw_response,
        readme_path,
    })
}
