//! JSON REST handlers shared by every resource type.
//!
//! Each resource namespace `{base}` gets the same five endpoints:
//! `GET {base}/all`, `POST {base}/post` (fields as query parameters),
//! and `GET` / `DELETE` / `PUT {base}?id=`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use campus_app::ports::Repository;
use campus_app::services::ResourceService;
use campus_domain::resource::{Record, Resource, replacement_from_json};

use crate::auth::{RequireAdmin, RequireUser};
use crate::error::ApiError;

type Service<R, P> = Arc<ResourceService<R, P>>;

/// `?id=` query parameter.
#[derive(Debug, Deserialize)]
pub struct IdParam<I> {
    pub id: I,
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse<R: Resource> {
    Ok(Json<Vec<Record<R>>>),
}

impl<R: Resource> IntoResponse for ListResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, get and update endpoints.
pub enum RecordResponse<R: Resource> {
    Ok(Json<Record<R>>),
}

impl<R: Resource> IntoResponse for RecordResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// Build the five routes for one resource mounted at `base`.
pub fn routes<R, P>(base: &str, service: Service<R, P>) -> Router
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    Router::new()
        .route(&format!("{base}/all"), get(list::<R, P>))
        .route(&format!("{base}/post"), post(create::<R, P>))
        .route(
            base,
            get(get_by_id::<R, P>)
                .delete(delete::<R, P>)
                .put(update::<R, P>),
        )
        .with_state(service)
}

/// `GET {base}/all`
pub async fn list<R, P>(
    _user: RequireUser,
    State(service): State<Service<R, P>>,
) -> Result<ListResponse<R>, ApiError>
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    let records = service.list().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `POST {base}/post?field=value&...`
pub async fn create<R, P>(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Service<R, P>>,
    Query(fields): Query<R>,
) -> Result<RecordResponse<R>, ApiError>
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    tracing::debug!(entity = R::NAME, by = %admin.email, "create requested");
    let record = service.create(fields).await?;
    Ok(RecordResponse::Ok(Json(record)))
}

/// `GET {base}?id=`
pub async fn get_by_id<R, P>(
    _user: RequireUser,
    State(service): State<Service<R, P>>,
    Query(param): Query<IdParam<R::Id>>,
) -> Result<RecordResponse<R>, ApiError>
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    let record = service.get(param.id).await?;
    Ok(RecordResponse::Ok(Json(record)))
}

/// `DELETE {base}?id=`
pub async fn delete<R, P>(
    _admin: RequireAdmin,
    State(service): State<Service<R, P>>,
    Query(param): Query<IdParam<R::Id>>,
) -> Result<DeleteResponse, ApiError>
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    let record = service.delete(param.id).await?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: format!("{} with id {} deleted", R::NAME, record.id),
    })))
}

/// `PUT {base}?id=` with the full replacement record as JSON body.
pub async fn update<R, P>(
    _admin: RequireAdmin,
    State(service): State<Service<R, P>>,
    Query(param): Query<IdParam<R::Id>>,
    Json(body): Json<Value>,
) -> Result<RecordResponse<R>, ApiError>
where
    R: Resource,
    P: Repository<R> + Send + Sync + 'static,
{
    let fields = replacement_from_json::<R>(body)?;
    let record = service.update(param.id, fields).await?;
    Ok(RecordResponse::Ok(Json(record)))
}
