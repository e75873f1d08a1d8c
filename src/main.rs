//! Contact Book - MCP server entry point
//!
//! Serves an in-memory contact book over the Model Context Protocol on stdio.

use anyhow::Result;
use contact_book::observability::init_tracing;
use contact_book::{Config, ContactBookServer, ContactService};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration is loaded first so LOG_LEVEL can seed the log filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    init_tracing(&log_level);

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let service = if config.seed_demo_contacts {
        info!("Seeding demo contacts");
        ContactService::with_demo_contacts()
    } else {
        ContactService::new()
    };

    let server = ContactBookServer::new(service, config.server_name.clone());
    info!("Contact book server '{}' initialized", config.server_name);

    // Run the server (this will block until the client disconnects)
    info!("Starting MCP server with stdio transport");
    contact_book::server::run_server(server).await?;

    info!("Contact book server shutdown complete");
    Ok(())
}
