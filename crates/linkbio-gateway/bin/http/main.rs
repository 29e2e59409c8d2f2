mod cli;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};
use clap::Parser;
use linkbio_core::LinkRepository;
use linkbio_gateway::{App, AppState};
use linkbio_storage::{InMemoryRepository, PostgresRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loaded before parsing so `.env` values act as environment defaults.
    let dotenv = dotenvy::dotenv();

    let config = CLI::try_parse()?;
    init_tracing(config.log_format);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {
            info!("no .env file found, using process environment")
        }
        Err(err) => warn!(error = %err, "failed to load .env file"),
    }

    info!(
        listen_addr = %config.listen_addr(),
        storage_backend = %config.storage,
        "starting linkbio gateway"
    );

    let mut postgres = None;
    let repository: Arc<dyn LinkRepository> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(InMemoryRepository::new()),
        StorageBackendArg::Postgres => {
            let repository =
                PostgresRepository::connect(config.pg_connect_options(), config.db_max_connections)
                    .await?;
            repository.migrate().await?;
            info!(
                db_host = %config.db_host,
                db_port = config.db_port,
                db_name = %config.db_name,
                "connected to database"
            );
            postgres = Some(repository.clone());
            Arc::new(repository)
        }
    };

    let app = App::router(AppState::new(repository));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!(listen_addr = %listener.local_addr()?, "serving http");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(repository) = postgres {
        repository.close().await;
    }
    info!("gateway stopped");

    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
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

    info!("shutdown signal received, draining connections");
}
