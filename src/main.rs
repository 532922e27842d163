use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use readme_gen::{
    config::{Config, Credentials, DEFAULT_CONFIG_PATH},
    generate_readme,
    llm::{get_llm, Backend},
    ReadmeGenError,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the backend replied but without a `<readme>` block.
const EXIT_NO_README: u8 = 2;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generate README.md from a given codebase file.", long_about = None)]
struct Args {
    /// Path to the file containing the codebase
    file_path: PathBuf,

    /// AI model to use for generation [default: claude]
    #[clap(short, long, value_enum)]
    model: Option<Backend>,

    /// Optional TOML file with per-model overrides
    #[clap(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, ReadmeGenError> {
    let config = match &args.config {
        Some(path) => Config::load(path, true)?,
        None => Config::load(&PathBuf::from(DEFAULT_CONFIG_PATH), false)?,
    };
    let env_provider = env::var("LLM_PROVIDER").ok();
    let backend = config.resolve_backend(args.model, env_provider.as_deref())?;
    let credentials = Credentials::from_env();

    let llm = get_llm(backend, &config, &credentials)?;
    info!("Using LLM model: {}", llm.model_name());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    let outcome = generate_readme(&args.file_path, llm.as_ref(), &pb).await?;

    let code = match &outcome.readme_path {
        Some(path) => {
            let dir = path.parent().unwrap_or(path.as_path());
            println!(
                "README.md file has been created successfully in {}",
                dir.display()
            );
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No README content found in the API response.");
            ExitCode::from(EXIT_NO_README)
        }
    };

    println!("{}", outcome.raw_response);

    Ok(code)
}
