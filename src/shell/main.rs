use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt};

use localtime::shell::config::Config;
use localtime::shell::http::{normalize_base_path, router};
use localtime::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "localtime=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let app = router(AppState::new(config.timezone), &config.base_path);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        timezone = %config.timezone,
        "Time endpoint: http://{}{}/",
        addr,
        normalize_base_path(&config.base_path)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Time endpoint stopped");
    Ok(())
}

// Kubernetes stops pods with SIGTERM; Ctrl-C covers local runs.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received, draining connections");
}
