//! mirrorbin server binary.
//!
//! Binds a TCP listener on an OS-assigned ephemeral port, prints the chosen
//! port to stdout for the caller to pick up, and serves until stopped. Any
//! failure during listener setup or the serve loop bubbles out of `main`
//! and terminates the process with a non-zero exit; there is deliberately
//! no graceful recovery path.

use tokio::net::TcpListener;

use mirrorbin::config::schema::ServerConfig;
use mirrorbin::http::HttpServer;
use mirrorbin::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("mirrorbin v0.1.0 starting");

    // No config files or environment flags are consulted: the defaults
    // (all interfaces, port 0) are the whole configuration surface.
    let config = ServerConfig::default();
    let addr = config.listener.socket_addr()?;

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    // Test harnesses scrape this line to find the assigned port.
    println!("Using port: {}", local_addr.port());

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
