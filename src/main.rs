mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::auth::{AuthProvider, GoTrueProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;

    // Non-fatal: the relay answers 503 until a provider is configured.
    let auth: Option<Arc<dyn AuthProvider>> = match &config.auth {
        Some(provider) => {
            tracing::info!(base_url = %provider.base_url, "auth provider configured");
            Some(Arc::new(GoTrueProvider::new(provider)?))
        }
        None => {
            tracing::warn!("AUTH_PROVIDER_URL / AUTH_PROVIDER_API_KEY not set; sign-in disabled");
            None
        }
    };

    let state = state::AppState::new(auth);
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "pixelwalls listening");
    axum::serve(listener, app).await?;
    Ok(())
}
