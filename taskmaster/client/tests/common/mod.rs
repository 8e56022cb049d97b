#![allow(dead_code)]

use std::net::SocketAddr;
use taskmaster_server::config::Config;

/// Serves a fresh task store backed by an in-memory database on an ephemeral port.
pub async fn spawn_task_store() -> anyhow::Result<SocketAddr> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1".to_string(),
        port: 0,
        client_origin: "http://localhost:3001".to_string(),
    };
    let listener = tokio::net::TcpListener::bind(config.listen_address()).await?;
    let address = listener.local_addr()?;

    let db = taskmaster_server::web::connect_database(&config.database_url).await?;
    let app = taskmaster_server::web::create_app(db, &config)?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(address)
}

pub fn api_url(address: SocketAddr) -> String {
    format!("http://{}", address)
}
