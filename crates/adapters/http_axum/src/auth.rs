//! Bearer-token authentication and role checks.
//!
//! [`authenticate`] runs on every request and attaches the caller's
//! [`Principal`] to the request extensions when the token is known. It never
//! rejects; handlers opt into a role with the [`RequireUser`] and
//! [`RequireAdmin`] extractors, which answer `403` for anonymous or
//! under-privileged callers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Role granted to every authenticated caller.
pub const ROLE_USER: &str = "ROLE_USER";
/// Role granted to administrators, in addition to [`ROLE_USER`].
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
    pub admin: bool,
}

impl Principal {
    /// Roles held by this principal.
    #[must_use]
    pub fn roles(&self) -> Vec<&'static str> {
        if self.admin {
            vec![ROLE_USER, ROLE_ADMIN]
        } else {
            vec![ROLE_USER]
        }
    }
}

/// Token → principal table.
#[derive(Debug, Default)]
pub struct Authenticator {
    principals: HashMap<String, Principal>,
}

impl Authenticator {
    /// Build an authenticator from `(token, principal)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (String, Principal)>) -> Self {
        Self {
            principals: entries.into_iter().collect(),
        }
    }

    /// Every known principal, ordered by email.
    #[must_use]
    pub fn principals(&self) -> Vec<&Principal> {
        let mut principals: Vec<&Principal> = self.principals.values().collect();
        principals.sort_by(|a, b| a.email.cmp(&b.email));
        principals
    }

    /// Resolve the principal named by an `Authorization: Bearer <token>` header.
    #[must_use]
    pub fn resolve(&self, headers: &HeaderMap) -> Option<&Principal> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            return None;
        }
        self.principals.get(token)
    }
}

/// Middleware attaching the caller's [`Principal`] to the request, if any.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(principal) = authenticator.resolve(request.headers()).cloned() {
        tracing::debug!(email = %principal.email, admin = principal.admin, "authenticated");
        request.extensions_mut().insert(principal);
    }
    next.run(request).await
}

/// Extractor succeeding for any authenticated caller.
#[derive(Debug, Clone)]
pub struct RequireUser(pub Principal);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Self)
            .ok_or(ApiError::Forbidden)
    }
}

/// Extractor succeeding only for administrators.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Principal);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Principal>() {
            Some(principal) if principal.admin => Ok(Self(principal.clone())),
            Some(principal) => {
                tracing::debug!(email = %principal.email, "admin role required");
                Err(ApiError::Forbidden)
            }
            None => Err(ApiError::Forbidden),
        }
    }
}
