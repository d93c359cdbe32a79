//! # campus-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON CRUD API**: for every resource namespace `{base}`,
//!   `GET {base}/all`, `POST {base}/post`, and `GET`/`DELETE`/`PUT {base}?id=`
//! - Resolve bearer tokens into a [`Principal`](auth::Principal) and gate
//!   reads on the `user` role and writes on the `admin` role
//! - Map application results into HTTP responses, including the structured
//!   `{"type", "message"}` error body
//!
//! ## Dependency rule
//! Depends on `campus-app` (for port traits and services) and `campus-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
