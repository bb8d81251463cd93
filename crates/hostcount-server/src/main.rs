//! hostcount server
//!
//! Counts requests per serving host in a shared Redis and answers `GET /`
//! with every host's count.
//! - Store address from `REDIS_HOST` (port 6379)
//! - Host identity resolved once at startup
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostcount_core::error::{HostCountError, Result};
use hostcount_server::{app_state::AppState, config, host, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "hostcount-server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::from_env()?;
    let host = host::resolve_local()?;
    let listen: SocketAddr = config::LISTEN_ADDR
        .parse()
        .map_err(|e| HostCountError::Config(format!("listen address: {e}")))?;

    let state = AppState::connect(cfg, host)?;
    let app = router::build_router(state.clone());

    tracing::info!(
        %listen,
        backend = state.store().backend(),
        store = %state.cfg().store.addr(),
        host = %state.counter().host(),
        "hostcount-server starting"
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HostCountError::Internal(format!("bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| HostCountError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
