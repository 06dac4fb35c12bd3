/// chroma-merge tuner
///
/// Live HSV threshold tuning in the browser. The page holds six sliders
/// (lower/upper H, S, V); every slider move re-masks and re-composites the
/// whole image set and redraws the preview.
///
/// Run with:
///   cargo run --bin tuner --release -- [IMAGES...]
/// Then open http://127.0.0.1:7878
///
/// Keys on the page:
///   s   — save the bounds into the config document
///   Esc — quit
/// Closing the tab also ends the session, unless the page comes back
/// (reload) within a couple of seconds.

mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tiny_http::Server;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chroma_merge::{select_images, Config, Control, TunerSession};

use state::TunerState;

/// Upper bound on how long one poll blocks waiting for the browser.
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "tuner")]
#[command(version, about = "Tune HSV background bounds with a live preview", long_about = None)]
struct Args {
    /// Images to preview. Defaults to scanning INPUT_FOLDER from the config.
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Config document (JSON); saved bounds are written back here.
    #[arg(short, long, default_value = chroma_merge::config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: PathBuf,

    /// Address the preview page is served on.
    #[arg(long, default_value = "127.0.0.1:7878", value_name = "ADDR")]
    bind: String,

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
                .unwrap_or_else(|_| format!("chroma_merge={log_level},tuner={log_level}").into()),
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
    // The tuner writes back into this file, so it must parse. A missing one
    // is seeded with the defaults.
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(chroma_merge::Error::ConfigRead { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            let config = Config::default();
            config.save(&args.config).context("Failed to write default config")?;
            info!(path = %args.config.display(), "wrote default config");
            config
        }
        Err(e) => return Err(e).context("Failed to load config"),
    };

    let paths = select_images(&args.images, &config.input_folder, config.max_images)
        .context("No images to work on")?;
    let session = TunerSession::open(&paths, &config, &args.config)
        .context("Failed to open images")?;

    let server = Server::http(args.bind.as_str())
        .map_err(|e| anyhow!("failed to bind {}: {}", args.bind, e))?;

    println!("╔══════════════════════════════════════════════╗");
    println!("║          chroma-merge tuner                  ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{:<37}║", args.bind);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  s : save settings      Esc : quit           ║");
    println!("╚══════════════════════════════════════════════╝");

    let mut state = TunerState::new(session);

    // Single-threaded: each request is handled to completion before the
    // next poll, so the loop is the only reader and writer of `state`.
    loop {
        let control = match server.recv_timeout(TICK) {
            Ok(Some(request)) => routes::dispatch(request, &mut state),
            Ok(None) => Control::Continue,
            Err(e) => return Err(e).context("HTTP server failed"),
        };
        let control = match control {
            Control::Continue => state.poll_closed(Instant::now()),
            exit => exit,
        };
        if let Control::Exit(reason) = control {
            info!(?reason, renders = state.renders, "tuner finished");
            return Ok(());
        }
    }
}
