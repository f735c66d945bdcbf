use clap::Parser;
use gitlab_sentry_relay::api::build_router;
use gitlab_sentry_relay::cli::CliArgs;
use gitlab_sentry_relay::error::Result;
use gitlab_sentry_relay::logging::{FileLogger, setup_logging};
use gitlab_sentry_relay::{AppState, RelayConfig};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}

async fn serve(config: RelayConfig) -> Result<()> {
    let bind_address = config.bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Relaying push hooks to {} (token validation {})",
        state.config.target_host(),
        if state.config.validation_enabled() { "enabled" } else { "disabled" }
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = CliArgs::parse();

    let file_logger = args.log_dir.clone().map(FileLogger::new);
    let log_guard = match setup_logging(file_logger.as_ref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(args.to_config()).await {
        error!("{}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
