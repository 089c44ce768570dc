use std::sync::Arc;

use common::logger::init_logger;
use server::{
    app::{router, run_server, shutdown_signal},
    config::ServerConfig,
    handler::AppState,
    upstream::QuotationClient,
};
use store::SqliteQuotationStore;
use tokio::net::TcpListener;

/// Opens the database and creates the quotations table when absent.
async fn init_store(cfg: &ServerConfig) -> anyhow::Result<Arc<SqliteQuotationStore>> {
    let store = SqliteQuotationStore::connect(&cfg.database_url).await?;
    tracing::info!(database_url = %cfg.database_url, "quotation store ready");

    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("server");

    let cfg = ServerConfig::default();
    cfg.validate()?;

    tracing::info!("Starting quotation server...");

    let store = init_store(&cfg).await?;
    let upstream = QuotationClient::new(cfg.upstream_url.clone(), cfg.upstream_budget)?;

    let state = AppState {
        upstream,
        store: store.clone(),
        persistence_budget: cfg.persistence_budget,
    };

    let listener = TcpListener::bind(&cfg.bind_address).await?;
    run_server(listener, router(state), shutdown_signal()).await?;

    store.close().await;

    Ok(())
}
