//! plate-desk - License plate recognition client
//!
//! Picks a vehicle image, posts it to an external recognition service and
//! shows the plate text and confidence it answers with. All detection and
//! OCR happens on the service side.

mod config;
mod dashboard;
mod error;
mod history;
mod recognition;
mod session;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::dashboard::DashboardApp;
use crate::recognition::UploadClient;
use crate::session::{SelectedImage, UploadSession};

/// plate-desk - Upload vehicle images for license plate recognition
#[derive(Parser, Debug)]
#[command(name = "plate-desk")]
#[command(about = "Upload a vehicle image and display the recognized license plate")]
struct Args {
    /// Config file to use instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recognition endpoint, overriding the config file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Image to select on startup
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Submit --image once, print the result and exit without a window
    #[arg(long, requires = "image")]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, config_source) = load_config_or_default(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.service.endpoint = endpoint;
    }

    init_logging(&config);
    match config_source {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("Using default configuration"),
    }

    let initial = args
        .image
        .as_deref()
        .map(SelectedImage::from_path)
        .transpose()?;

    if args.headless {
        return run_headless(&config, initial);
    }

    info!("plate-desk starting...");
    let app = DashboardApp::new(&config, initial)?;
    if let Err(e) = dashboard::app::run_dashboard(app) {
        tracing::error!("Dashboard error: {}", e);
    }
    info!("plate-desk shutdown complete");

    Ok(())
}

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from an explicit path, the default location, or defaults
///
/// An explicit path must load; a broken default file is reported and ignored.
fn load_config_or_default(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = config::load_config(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    if let Ok(path) = storage::default_config_path() {
        if path.exists() {
            match config::load_config(&path) {
                Ok(config) => return Ok((config, Some(path))),
                // Logging is not up yet
                Err(e) => eprintln!("Ignoring unreadable config {:?}: {:#}", path, e),
            }
        }
    }

    Ok((AppConfig::default(), None))
}

/// Submit one image and print the outcome to stdout
fn run_headless(config: &AppConfig, initial: Option<SelectedImage>) -> Result<()> {
    let stdout = std::io::stdout();
    submit_once(config, initial, &mut stdout.lock())
}

/// Submit one image and write the recognized plate to `out`
///
/// Fails with the alert text when nothing is selected or the service
/// rejects the upload.
fn submit_once(config: &AppConfig, initial: Option<SelectedImage>, out: &mut impl Write) -> Result<()> {
    let client = UploadClient::new(&config.service)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let mut session = UploadSession::new();
    if let Some(image) = initial {
        session.select_file(image);
    }

    let request = session
        .submit()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let outcome = runtime.block_on(client.recognize(&request.image));
    session.complete(request.ticket, outcome);

    if let Some(alert) = session.alert() {
        warn!("Headless submission failed");
        anyhow::bail!("{}", alert);
    }

    if let Some(result) = session.result() {
        writeln!(out, "Plate: {}", result.text)?;
        writeln!(out, "Confidence: {}", result.confidence_label())?;
    }

    Ok(())
}
