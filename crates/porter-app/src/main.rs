use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use porter_app::app::api::routes;
use porter_app::config::ConfigHandler;
use porter_app::seeder::seed_accounts;
use porter_app::store_handler::StoreHandler;
use porter_core::config::load_config;
use porter_store::store::{MemoryAccountStore, MemorySessionStore};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Porter identity gateway");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let accounts = Arc::new(MemoryAccountStore::new());
    let sessions = Arc::new(MemorySessionStore::with_ttl(config.session.ttl()));

    let seeded = seed_accounts(accounts.as_ref(), &config.accounts).await?;
    tracing::info!(seeded, "Account store ready");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(StoreHandler { accounts, sessions })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
