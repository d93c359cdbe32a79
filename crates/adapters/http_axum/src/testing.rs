//! In-memory fixtures shared by the handler tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use campus_app::ports::Repository;
use campus_app::services::ResourceService;
use campus_domain::article::Article;
use campus_domain::error::CampusError;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;
use campus_domain::resource::{Record, Resource};

use crate::auth::{Authenticator, Principal};
use crate::state::AppState;

pub const USER_TOKEN: &str = "user-token";
pub const ADMIN_TOKEN: &str = "admin-token";

pub struct InMemoryRepo<R> {
    store: Mutex<(i64, BTreeMap<i64, R>)>,
}

impl<R> Default for InMemoryRepo<R> {
    fn default() -> Self {
        Self {
            store: Mutex::new((0, BTreeMap::new())),
        }
    }
}

impl<R: Resource> Repository<R> for InMemoryRepo<R> {
    fn create(&self, fields: R) -> impl Future<Output = Result<Record<R>, CampusError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.0 += 1;
        let id = store.0;
        store.1.insert(id, fields.clone());
        async move { Ok(Record::new(id.into(), fields)) }
    }

    fn get_by_id(
        &self,
        id: R::Id,
    ) -> impl Future<Output = Result<Option<Record<R>>, CampusError>> + Send {
        let key: i64 = id.into();
        let store = self.store.lock().unwrap();
        let result = store
            .1
            .get(&key)
            .cloned()
            .map(|fields| Record::new(id, fields));
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Record<R>>, CampusError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Record<R>> = store
            .1
            .iter()
            .map(|(id, fields)| Record::new((*id).into(), fields.clone()))
            .collect();
        async move { Ok(result) }
    }

    fn update(&self, record: Record<R>) -> impl Future<Output = Result<Record<R>, CampusError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.1.insert(record.id.into(), record.fields.clone());
        async move { Ok(record) }
    }

    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), CampusError>> + Send {
        let key: i64 = id.into();
        let mut store = self.store.lock().unwrap();
        store.1.remove(&key);
        async move { Ok(()) }
    }
}

fn authenticator() -> Authenticator {
    Authenticator::new([
        (
            USER_TOKEN.to_string(),
            Principal {
                email: "cgaucho@ucsb.edu".to_string(),
                admin: false,
            },
        ),
        (
            ADMIN_TOKEN.to_string(),
            Principal {
                email: "phtcon@ucsb.edu".to_string(),
                admin: true,
            },
        ),
    ])
}

/// Full router over fresh in-memory repositories.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(
            ResourceService::new(InMemoryRepo::<DiningCommonsMenuItem>::default()),
            ResourceService::new(InMemoryRepo::<HelpRequest>::default()),
            ResourceService::new(InMemoryRepo::<MenuItemReview>::default()),
            ResourceService::new(InMemoryRepo::<RecommendationRequest>::default()),
            ResourceService::new(InMemoryRepo::<Article>::default()),
            authenticator(),
        );
        Self {
            router: crate::router::build(state),
        }
    }

    /// Send one request and return the status with the JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
