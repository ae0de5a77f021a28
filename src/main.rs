mod config;
mod handlers;
mod models;
mod server;
mod services;

use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use config::Config;
use handlers::FoodDetector;
use server::create_router;
use services::{AzureOpenAIService, CompletionService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("🚀 Starting Food Calorie Detector...");

    let config = Config::from_env()?;

    let completion: Arc<dyn CompletionService> = Arc::new(AzureOpenAIService::new(
        config.endpoint.clone(),
        config.api_key.clone(),
    ));
    log::info!(
        "✅ Completion service initialized for {}",
        config.endpoint.host_str().unwrap_or("<unknown host>")
    );

    let detector = Arc::new(FoodDetector::new(completion));
    let app = create_router(detector);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("🌐 Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("🛑 Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Failed to listen for Ctrl+C: {}", e);
    }
    log::info!("🛑 Shutting down...");
}
