//! JSON REST API handlers.
//!
//! Every resource is served by the same generic handlers in [`resource`],
//! mounted once per namespace. [`current_user`] reports the caller's
//! identity and roles; [`admin`] lists every configured caller.

pub mod admin;
pub mod current_user;
pub mod resource;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use campus_app::ports::Repository;
use campus_domain::article::Article;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;

use crate::state::AppState;

pub const MENU_ITEMS_PATH: &str = "/api/ucsbdiningcommonsmenuitem";
pub const HELP_REQUESTS_PATH: &str = "/api/helprequests";
pub const MENU_ITEM_REVIEWS_PATH: &str = "/api/menuitemreview";
pub const RECOMMENDATION_REQUESTS_PATH: &str = "/api/recommendationrequests";
pub const ARTICLES_PATH: &str = "/api/articles";
pub const CURRENT_USER_PATH: &str = "/api/currentUser";
pub const ADMIN_USERS_PATH: &str = "/api/admin/users";

/// Build every `/api` route from the shared state.
pub fn routes<IR, HR, VR, RR, AR>(state: AppState<IR, HR, VR, RR, AR>) -> Router
where
    IR: Repository<DiningCommonsMenuItem> + Send + Sync + 'static,
    HR: Repository<HelpRequest> + Send + Sync + 'static,
    VR: Repository<MenuItemReview> + Send + Sync + 'static,
    RR: Repository<RecommendationRequest> + Send + Sync + 'static,
    AR: Repository<Article> + Send + Sync + 'static,
{
    let admin = Router::new()
        .route(ADMIN_USERS_PATH, get(admin::list_users))
        .with_state(Arc::clone(&state.authenticator));

    Router::new()
        .route(CURRENT_USER_PATH, get(current_user::get))
        .merge(admin)
        .merge(resource::routes(MENU_ITEMS_PATH, state.menu_items))
        .merge(resource::routes(HELP_REQUESTS_PATH, state.help_requests))
        .merge(resource::routes(
            MENU_ITEM_REVIEWS_PATH,
            state.menu_item_reviews,
        ))
        .merge(resource::routes(
            RECOMMENDATION_REQUESTS_PATH,
            state.recommendation_requests,
        ))
        .merge(resource::routes(ARTICLES_PATH, state.articles))
}
