#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::identity::IdentityToolkitClient;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let identity = IdentityToolkitClient::new(&config.identity_base_url, &config.identity_token_url, &config.identity_api_key)
        .expect("identity client init failed");
    tracing::info!(base_url = %config.identity_base_url, "identity provider configured");

    let port = config.port;
    let state = state::AppState::new(pool, Arc::new(identity), config);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "devlinks listening");
    axum::serve(listener, app).await.expect("server failed");
}
