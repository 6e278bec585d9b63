//! Textsim HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use textsim::config::Config;
use textsim::embedding::{EmbedderConfig, SentenceEmbedder};
use textsim::gateway::{HandlerState, create_router_with_state};
use textsim::scoring::SimilarityScorer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        "Textsim starting"
    );

    let embedder = load_embedder(&config);
    tracing::info!(mode = %embedder.mode(), "Sentence embedder ready");

    let scorer = Arc::new(SimilarityScorer::new(Arc::new(embedder)));
    let app = create_router_with_state(HandlerState::new(scorer, config.debug));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Textsim shutdown complete");
    Ok(())
}

/// A configured model that fails to load leaves the service up with the
/// embedding sub-score degraded to zero.
fn load_embedder(config: &Config) -> SentenceEmbedder {
    let Some(path) = &config.model_path else {
        tracing::warn!("No TEXTSIM_MODEL_PATH configured, running embedder in stub mode");
        return SentenceEmbedder::stub();
    };

    match SentenceEmbedder::load(EmbedderConfig::new(path.clone())) {
        Ok(embedder) => embedder,
        Err(e) => {
            tracing::error!(
                model_path = %path.display(),
                error = %e,
                "Failed to load sentence embedding model, embedding similarity disabled"
            );
            SentenceEmbedder::unavailable(e.to_string())
        }
    }
}

async fn run_health_check() -> i32 {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(Config::default().port);

    let url = format!("http://127.0.0.1:{}/", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
