#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::{postgres, testcontainers};

/// Fresh, migrated in-memory database for a single test.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    taskmaster_server::web::connect_database("sqlite::memory:").await
}

pub async fn setup_container() -> anyhow::Result<testcontainers::ContainerAsync<postgres::Postgres>>
{
    let container = postgres::Postgres::default().start().await?;
    Ok(container)
}

pub async fn setup_postgres_db(
    container: &testcontainers::ContainerAsync<postgres::Postgres>,
) -> anyhow::Result<DatabaseConnection> {
    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(5432).await?;
    let db_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
    taskmaster_server::web::connect_database(&db_url).await
}
