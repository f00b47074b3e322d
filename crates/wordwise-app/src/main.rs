use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use wordwise_config::{Config, PhraseMode};

pub mod handlers;
pub mod profile;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

/// Word lookups, a daily word and pronunciation scoring over HTTP
#[derive(Parser, Debug)]
#[command(name = "wordwise", version)]
struct Cli {
    /// JSON config file; environment defaults are used without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Where example phrases come from: live or static
    #[arg(long)]
    phrase_mode: Option<PhraseMode>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(mode) = self.phrase_mode {
            config.phrases.mode = mode;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    tracing::info!(
        "Starting wordwise on {} (phrases: {})",
        config.server.listen_addr(),
        config.phrases.mode
    );

    let state = Arc::new(AppState::from_config(config).context("Failed to build app state")?);

    run(state, shutdown_signal()).await
}

pub async fn run(
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let warmup = tokio::spawn(warm_daily_word(Arc::clone(&state), cancel.clone()));

    let served = server::serve(state, shutdown).await;

    cancel.cancel();
    if let Err(e) = warmup.await {
        tracing::error!("daily word warmup panicked: {e}");
    }

    served
}

/// Generate today's word ahead of the first request
async fn warm_daily_word(state: Arc<AppState>, cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("Daily word warmup cancelled");
        }
        record = state.daily.generate() => {
            tracing::info!("Daily word for {}: {}", record.date, record.daily_word);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
