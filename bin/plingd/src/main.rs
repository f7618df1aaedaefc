//! `plingd` — the pling notification server binary.
//!
//! Usage:
//!   plingd -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/pling/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use pling_core::Module;
use tracing::info;

use config::{PushMode, ServerConfig};
use routes::AppState;

/// Pling server.
#[derive(Parser, Debug)]
#[command(name = "plingd", about = "pling notification server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides the configured address).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    config::verify_config(&server_config)?;

    let listen = cli
        .listen
        .unwrap_or_else(|| server_config.server.listen.clone());

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let docs: Arc<dyn pling_docstore::DocStore> = Arc::new(
        pling_docstore::RedbStore::open(&data_dir.join("docs.redb"))
            .map_err(|e| anyhow::anyhow!("failed to open document store: {}", e))?,
    );

    // Select the push backend.
    let sender: Arc<dyn pling_push::PushSender> = match server_config.push.mode {
        PushMode::Log => {
            info!("Push backend: log (messages are not delivered)");
            Arc::new(pling_push::LogSender)
        }
        PushMode::Fcm => {
            let mut fcm = pling_push::FcmSender::new(
                server_config.push.project_id.clone(),
                server_config.push.service_token.clone(),
            );
            if !server_config.push.endpoint.is_empty() {
                fcm = fcm.with_endpoint(server_config.push.endpoint.clone());
            }
            info!(
                "Push backend: fcm (project {})",
                server_config.push.project_id
            );
            Arc::new(fcm)
        }
    };

    // Wire the likes module.
    let records = Arc::new(likes::store::DocRecords::new(docs.clone()));
    let notifier = likes::notifier::LikeNotifier::new(records.clone(), records, sender);
    let likes_module = likes::LikesModule::new(notifier);
    info!("Likes module initialized");

    let module_routes = vec![(likes_module.name(), likes_module.routes())];

    // Build application state and router.
    let app_state = AppState { docs };
    let app = routes::build_router(app_state, module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("pling server listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}
