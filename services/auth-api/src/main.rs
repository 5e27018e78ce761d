//! Auth API service entry point

mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;
use gatehouse_store::RedisStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(port = config.http_port, "starting auth-api");

    let store = RedisStore::connect(config.store.clone()).await?;
    tracing::info!("connected to session store");

    let state = AppState::new(store, config);
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.http_port));

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route(
            "/user",
            post(handlers::register)
                .get(handlers::list_users)
                .delete(handlers::delete_user),
        )
        .route(
            "/token",
            post(handlers::login).delete(handlers::invalidate),
        )
        .route("/token/{jwt_token}", get(handlers::validate))
        .with_state(state);

    tracing::info!(%addr, "auth-api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
