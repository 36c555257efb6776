//! HealthBot Web Server
//!
//! Run with: cargo run -p healthbot-web

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting HealthBot Web Server...");

    let config = healthbot_web::config::Config::load()?;

    // Create app state (loads the embedded knowledge base)
    let state = healthbot_web::state::AppState::new();

    // Build router
    let app = healthbot_web::router::build_router(state);

    let addr = config.server.socket_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
