use anyhow::Context;
use dotenvy::dotenv;
use roster::logging::init_tracing;
use roster::metrics::{init_metrics, metrics_app};
use roster::router::init_router;
use roster::state::init_app_state;
use roster_config::{CorsConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    init_tracing(&observability)?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state(
        server_config.clone(),
        &DatabaseConfig::from_env(),
        CorsConfig::from_env(),
    )
    .await?;

    if let Some(handle) = init_metrics(&observability)? {
        let metrics_addr = format!("{}:{}", server_config.host, observability.metrics_port);
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(addr = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let addr = server_config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
