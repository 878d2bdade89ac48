//! Helpdesk Server — application entry point.

use tracing_subscriber::EnvFilter;

use helpdesk_server::api::{self, AppState};
use helpdesk_server::config::ServerConfig;
use helpdesk_service::Helpdesk;
use helpdesk_store::JsonFileStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("helpdesk_server=info".parse().unwrap())
                .add_directive("helpdesk_service=info".parse().unwrap())
                .add_directive("helpdesk_store=info".parse().unwrap()),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Helpdesk server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;

    let store = JsonFileStore::open(&config.data_path).await?;
    let desk = Helpdesk::new(store);

    let bind_addr = config.bind_addr.clone();
    let app = api::router(AppState::new(desk, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Helpdesk server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
