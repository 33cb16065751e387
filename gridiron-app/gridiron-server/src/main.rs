use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info, warn};

use gridiron_shared::config::AppConfig;
use gridiron_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    let _log_guard = init_telemetry(config.log_format, config.log_dir.as_deref());

    info!("Gridiron server starting ({})...", config.app_env);

    let app = match gridiron_server::create_app() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to build application: {}", e);
            return Err(e.into());
        }
    };

    // Prepare the database file and schema
    if app.database().is_bound() {
        info!("Preparing database at {}...", app.config().instance_path.display());
        app.database().initialize().await?;
    } else if app.database().uri().is_some() {
        warn!("Configured database cannot be opened; database routes will fail");
    }

    let database = app.database().clone();

    // Bind address
    let host: std::net::IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((host, config.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
