//! `GET /api/currentUser`

use axum::Json;
use serde::Serialize;

use crate::auth::RequireUser;

/// Identity of the authenticated caller.
#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub email: String,
    pub roles: Vec<&'static str>,
}

pub async fn get(RequireUser(principal): RequireUser) -> Json<CurrentUser> {
    let roles = principal.roles();
    Json(CurrentUser {
        email: principal.email,
        roles,
    })
}
