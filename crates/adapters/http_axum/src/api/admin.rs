//! `GET /api/admin/users`

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::api::current_user::CurrentUser;
use crate::auth::{Authenticator, RequireAdmin};

/// Every configured caller with the roles it holds.
pub async fn list_users(
    _admin: RequireAdmin,
    State(authenticator): State<Arc<Authenticator>>,
) -> Json<Vec<CurrentUser>> {
    let users = authenticator
        .principals()
        .into_iter()
        .map(|principal| CurrentUser {
            email: principal.email.clone(),
            roles: principal.roles(),
        })
        .collect();
    Json(users)
}
