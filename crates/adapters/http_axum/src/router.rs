//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use campus_app::ports::Repository;
use campus_domain::article::Article;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;

use crate::auth::authenticate;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Every request passes through [`authenticate`] before reaching a handler.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<IR, HR, VR, RR, AR>(state: AppState<IR, HR, VR, RR, AR>) -> Router
where
    IR: Repository<DiningCommonsMenuItem> + Send + Sync + 'static,
    HR: Repository<HelpRequest> + Send + Sync + 'static,
    VR: Repository<MenuItemReview> + Send + Sync + 'static,
    RR: Repository<RecommendationRequest> + Send + Sync + 'static,
    AR: Repository<Article> + Send + Sync + 'static,
{
    let authenticator = Arc::clone(&state.authenticator);

    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes(state))
        .layer(middleware::from_fn_with_state(authenticator, authenticate))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
