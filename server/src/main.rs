mod config;

use config::Config;
use feed_client::FeedClient;
use lookup_service::{LookupState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let feeds = FeedClient::new(config.feed_api.clone())?;
    let app = create_router(LookupState {
        feeds,
        template_path: config.template_path.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        endpoint = %config.feed_api.endpoint,
        template = %config.template_path.display(),
        timeout = ?config.feed_api.timeout,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "server=info,lookup_service=info,feed_client=info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        // Keep serving rather than exit immediately
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
