#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sweetheart_core::logging::LoggingBuilder;
use sweetheart_core::{PageConfig, PageSession};

/// Page session built from the command line, cloned into the app on launch
static SESSION: OnceLock<PageSession> = OnceLock::new();

/// Get the startup session, if main has built one
pub fn initial_session() -> Option<PageSession> {
    SESSION.get().cloned()
}

/// Sweetheart - a little page for someone special
#[derive(Parser, Debug)]
#[command(name = "sweetheart")]
#[command(about = "Floating hearts, a shy button, and the time we've had together")]
struct Args {
    /// JSON file overriding any page setting
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Count time together from this local time (YYYY-MM-DDTHH:MM:SS)
    #[arg(short, long)]
    since: Option<String>,

    /// Log filter, e.g. "sweetheart=debug" (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(ref filter) = args.log {
        logging = logging.with_filter(filter.clone());
    }
    logging.init()?;

    let mut config = match args.config {
        Some(ref path) => PageConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PageConfig::default(),
    };
    if let Some(since) = args.since {
        config.counter.reference = since;
    }

    let session = PageSession::new(config).context("building page session")?;
    let _ = SESSION.set(session);

    tracing::info!("Starting Sweetheart");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Will You Be My Valentine?")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
