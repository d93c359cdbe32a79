//! # campusd — campus API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct one repository and one service per resource type
//! - Build the bearer-token authenticator from the configured users
//! - Bind to a TCP port and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use campus_adapter_http_axum::auth::{Authenticator, Principal};
use campus_adapter_http_axum::state::AppState;
use campus_adapter_storage_sqlite_sqlx::{Config as DatabaseConfig, SqliteRepository};
use campus_app::services::ResourceService;
use campus_domain::article::Article;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to initialise database")?;
    let pool = db.pool().clone();
    tracing::info!(url = config.database_url(), "database ready");

    // Services
    let menu_items = ResourceService::new(SqliteRepository::<DiningCommonsMenuItem>::new(
        pool.clone(),
    ));
    let help_requests = ResourceService::new(SqliteRepository::<HelpRequest>::new(pool.clone()));
    let menu_item_reviews =
        ResourceService::new(SqliteRepository::<MenuItemReview>::new(pool.clone()));
    let recommendation_requests =
        ResourceService::new(SqliteRepository::<RecommendationRequest>::new(pool.clone()));
    let articles = ResourceService::new(SqliteRepository::<Article>::new(pool));

    // Auth
    if config.auth.users.is_empty() {
        tracing::warn!("no users configured, every API request will be denied");
    }
    let authenticator = Authenticator::new(config.auth.users.iter().map(|user| {
        (
            user.token.clone(),
            Principal {
                email: user.email.clone(),
                admin: user.admin,
            },
        )
    }));

    // HTTP
    let state = AppState::new(
        menu_items,
        help_requests,
        menu_item_reviews,
        recommendation_requests,
        articles,
        authenticator,
    );
    let app = campus_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("campusd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("campusd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
