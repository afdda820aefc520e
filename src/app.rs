/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config 読み込み → 依存生成 (AuthService, RngSource) → Router 組み立て
 * - Middleware の適用 (CORS / HTTP / Bearer)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::services::{auth::build_auth_service, mock::RngSource};
use crate::state::AppState;
use crate::{api, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,insights_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost with stderr.
        tracing::error!(?info, "panic");

        // development: crash the whole process; production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    if config.uses_insecure_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; using the insecure development default. Never run this in production."
        );
    }

    tracing::info!(
        "starting API in {:?} mode on {} (alg={:?}, cors={:?})",
        config.app_env,
        config.addr,
        config.jwt_algorithm,
        config.cors_allowed_origins
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Build process-level services once and inject them into the shared state.
pub fn build_state(config: &Config) -> Result<AppState, ConfigError> {
    let auth = build_auth_service(config)?;
    let rng = RngSource::from_seed(config.mock_rng_seed);

    Ok(AppState::new(auth, rng))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = api::routes(state.clone()).with_state(state);
    let router = middleware::cors::apply(router, config);

    middleware::http::apply(router)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
