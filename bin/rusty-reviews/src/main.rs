//! # Rusty-Reviews Binary
//!
//! The entry point that assembles the application from its plugins.

use anyhow::Context;
use configs::{LogFormat, LoggingSettings, Settings};
use rr_api::AppState;
use rr_core::service::ReviewService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rr_sentiment_vader::VaderScorer;
use rr_store_memory::MemoryReviewRepo;

// Requests are handled one at a time on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings.logging)?;

    // 1. Sentiment scorer
    let scorer = match &settings.sentiment.lexicon_path {
        Some(path) => VaderScorer::with_lexicon_file(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => VaderScorer::default(),
    };

    // 2. Seed data
    let seed = rr_seed_csv::load_path(&settings.seed.path).context("failed to load seed reviews")?;

    // 3. Store and service
    let mut service = ReviewService::new(Box::new(MemoryReviewRepo::new()), Box::new(scorer));
    service.load(seed);
    let app = rr_api::router(AppState::new(service));

    let addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on port {}...", settings.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

/// `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(logging: &LoggingSettings) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.filter)
            .with_context(|| format!("invalid log filter '{}'", logging.filter))?,
    };
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
