use std::net::SocketAddr;

use smartrail_ai::QueryParserClient;
use smartrail_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartrail_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = smartrail_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting SmartRail API on port {}", config.server.port);

    let mut parser = QueryParserClient::new(config.gemini.api_key.clone())
        .with_model(config.gemini.model.clone());
    if let Some(api_url) = &config.gemini.api_url {
        parser = parser.with_api_url(api_url);
    }

    let state = AppState::new(parser);
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
