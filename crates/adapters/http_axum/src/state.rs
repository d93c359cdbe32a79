//! Shared application state for axum handlers.

use std::sync::Arc;

use campus_app::ports::Repository;
use campus_app::services::ResourceService;
use campus_domain::article::Article;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;

use crate::auth::Authenticator;

/// Application state shared across all axum handlers.
///
/// Generic over one repository type per resource to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<IR, HR, VR, RR, AR> {
    /// Dining commons menu item CRUD service.
    pub menu_items: Arc<ResourceService<DiningCommonsMenuItem, IR>>,
    /// Help request CRUD service.
    pub help_requests: Arc<ResourceService<HelpRequest, HR>>,
    /// Menu item review CRUD service.
    pub menu_item_reviews: Arc<ResourceService<MenuItemReview, VR>>,
    /// Recommendation request CRUD service.
    pub recommendation_requests: Arc<ResourceService<RecommendationRequest, RR>>,
    /// Article CRUD service.
    pub articles: Arc<ResourceService<Article, AR>>,
    /// Bearer token resolver.
    pub authenticator: Arc<Authenticator>,
}

impl<IR, HR, VR, RR, AR> Clone for AppState<IR, HR, VR, RR, AR> {
    fn clone(&self) -> Self {
        Self {
            menu_items: Arc::clone(&self.menu_items),
            help_requests: Arc::clone(&self.help_requests),
            menu_item_reviews: Arc::clone(&self.menu_item_reviews),
            recommendation_requests: Arc::clone(&self.recommendation_requests),
            articles: Arc::clone(&self.articles),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

impl<IR, HR, VR, RR, AR> AppState<IR, HR, VR, RR, AR>
where
    IR: Repository<DiningCommonsMenuItem> + Send + Sync + 'static,
    HR: Repository<HelpRequest> + Send + Sync + 'static,
    VR: Repository<MenuItemReview> + Send + Sync + 'static,
    RR: Repository<RecommendationRequest> + Send + Sync + 'static,
    AR: Repository<Article> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        menu_items: ResourceService<DiningCommonsMenuItem, IR>,
        help_requests: ResourceService<HelpRequest, HR>,
        menu_item_reviews: ResourceService<MenuItemReview, VR>,
        recommendation_requests: ResourceService<RecommendationRequest, RR>,
        articles: ResourceService<Article, AR>,
        authenticator: Authenticator,
    ) -> Self {
        Self {
            menu_items: Arc::new(menu_items),
            help_requests: Arc::new(help_requests),
            menu_item_reviews: Arc::new(menu_item_reviews),
            recommendation_requests: Arc::new(recommendation_requests),
            articles: Arc::new(articles),
            authenticator: Arc::new(authenticator),
        }
    }
}
