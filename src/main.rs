use std::{ error::Error as StdError, net::SocketAddr };

use axum::Router;
use dotenvy::dotenv;
use tracing::{ error, info };

use post_editor::{ config::logging::init_logging, initialize_app, Config };

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    dotenv().ok();
    init_logging();

    let config: Config = Config::new().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let app: Router = initialize_app(&config)?;

    let addr: SocketAddr = config.server.socket_addr();
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "post editor listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("shutting down");
}
