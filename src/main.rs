//! `chroma-merge` — strip a solid-color background from a few images and
//! composite them into one.
//!
//! Run with:
//!   cargo run --release -- [IMAGES...]
//! With no image arguments the configured input folder is scanned.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chroma_merge::{compose_and_save, select_images, Config, MergeMethod};

#[derive(Parser, Debug)]
#[command(name = "chroma-merge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Images to merge. Defaults to scanning INPUT_FOLDER from the config.
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Config document (JSON).
    #[arg(short, long, default_value = chroma_merge::config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: PathBuf,

    /// Fail instead of using defaults when the config is missing or malformed.
    #[arg(long)]
    strict_config: bool,

    /// Override MERGE_METHOD: weighted, simple or grid.
    #[arg(short, long, value_name = "NAME")]
    method: Option<String>,

    /// Override OUTPUT_FOLDER.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("chroma_merge={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let mut config = if args.strict_config {
        Config::load(&args.config)?
    } else {
        Config::load_or_default(&args.config)
    };

    if let Some(name) = &args.method {
        // Parse here so a typo is reported as such, not as a config problem.
        let method: MergeMethod = name.parse()?;
        config.merge_method = method.as_str().to_owned();
    }

    let paths = select_images(&args.images, &config.input_folder, config.max_images)
        .context("No images to work on")?;

    let output_folder = args.output.clone().unwrap_or_else(|| config.output_folder.clone());
    let saved = compose_and_save(&paths, &config, &output_folder)
        .context("Failed to compose images")?;

    println!("Merged {} image(s) -> {}", paths.len(), saved.display());
    Ok(())
}
