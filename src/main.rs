use dotenvy::dotenv;
use tracing::info;
use ziyarat::logging::init_tracing;
use ziyarat::metrics::{init_metrics, metrics_app};
use ziyarat::router::init_router;
use ziyarat::startup::verify_role_matrices;
use ziyarat::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let state = init_app_state();
    verify_role_matrices(&state.rbac_config)?;

    if let Some(handle) = init_metrics()? {
        let metrics_addr = state.server_config.metrics_addr();
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
        info!("Metrics available at http://{}/metrics", metrics_addr);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                tracing::error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let bind_addr = state.server_config.bind_addr();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server running on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
