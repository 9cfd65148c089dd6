use dotenvy::dotenv;
use snip::{
    api, config::Config, generator::RandomGenerator, logging, state::AppState, store::LinkStore,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let _guard = logging::init_logging();

    let config = Config::load();

    let store = LinkStore::with_generator(RandomGenerator::default(), config.max_id_attempts);
    let app = api::router(AppState::new(store));

    let listener = TcpListener::bind(&config.server_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
