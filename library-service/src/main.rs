use library_service::config::{BackendType, Config};
use library_service::models::storage::{MemoryBackend, PostgresBackend};
use library_service::services::classify::{ClassifyService, HttpClassifyApi};
use library_service::state::{AppState, Backend};
use library_service::create_router;
use std::sync::Arc;
use tera::Tera;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("library_service=info,tower_http=info")
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let backend: Backend = match config.backend_type {
        BackendType::Postgres => {
            let options = match config.pg_connect_options() {
                Ok(options) => options,
                Err(e) => {
                    error!("Invalid database configuration: {}", e);
                    std::process::exit(1);
                }
            };

            info!("Using PostgreSQL backend");
            let postgres_backend = PostgresBackend::new(options);

            // The liveness middleware reports an unreachable database per
            // request, so a failure here is not fatal.
            match postgres_backend.init_schema().await {
                Ok(()) => info!("Storage backend connection successful"),
                Err(e) => warn!("Could not initialise books table: {}", e),
            }

            Arc::new(postgres_backend)
        }
        BackendType::Memory => {
            info!("Using in-memory backend");
            Arc::new(MemoryBackend::new())
        }
    };

    let templates_glob = format!("{}/**/*.html", config.templates_dir);
    let templates = match Tera::new(&templates_glob) {
        Ok(templates) => templates,
        Err(e) => {
            error!("Failed to parse templates from {}: {}", templates_glob, e);
            std::process::exit(1);
        }
    };

    let classify = ClassifyService::new(
        Arc::new(HttpClassifyApi::new()),
        config.classify_url.clone(),
    );
    let state = AppState::new(backend, classify, templates).with_static_dir(&config.static_dir);
    let app = create_router(state);

    let addr = config.bind_addr();
    info!("Library service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
