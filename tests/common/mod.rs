//! Shared helpers for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use mirrorbin::config::schema::ServerConfig;
use mirrorbin::http::HttpServer;

/// Start a mirror server on a loopback ephemeral port and return its
/// address. The serve task runs until the test process exits.
pub async fn spawn_server() -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let addr = config.listener.socket_addr().unwrap();
    let listener = TcpListener::bind(addr).await.unwrap();
    let local_addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    local_addr
}
