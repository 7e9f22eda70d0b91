mod action;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod theme;
mod widgets;

use clap::Parser;
use tokio::sync::mpsc;

use factlens_core::config::{Config, SERVER_ENV};
use factlens_core::platform;
use factlens_core::prefs::Preferences;
use factlens_core::{AnalysisClient, Session, SessionEvent};

/// factlens - fake news detection in the terminal
#[derive(Parser, Debug)]
#[command(name = "factlens")]
#[command(about = "Analyze news text or article URLs against a factlens server", long_about = None)]
struct Args {
    /// Analysis server base URL (overrides config and FACTLENS_SERVER)
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("factlens.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // RUST_LOG overrides; HTTP client internals stay at warn.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("factlens log: {}", log_path.display());

    tracing::info!("factlens starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("config unreadable, using defaults: {}", e);
        Config::default()
    });
    config.apply_overrides(std::env::var(SERVER_ENV).ok(), args.server);
    tracing::info!("analysis server: {}", config.server.base_url);

    // ── Session ──────────────────────────────────────────────────────────────
    let (session_tx, session_rx) = mpsc::channel::<SessionEvent>(1024);
    let client = AnalysisClient::new(&config.server)?;
    let session = Session::new(&config, client, session_tx);

    let prefs_path = Preferences::path();
    let prefs = Preferences::load_from(&prefs_path);

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let state = app_state::AppState::new(session, prefs, prefs_path, config.server.base_url.clone());
    app::App::new(state).run(session_rx).await?;

    Ok(())
}
