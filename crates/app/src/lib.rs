//! # campus-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`Repository`](ports::Repository) that storage
//!   adapters implement once per resource type
//! - Provide the driving use-case [`ResourceService`](services::ResourceService):
//!   list, create, get, delete, update
//! - Own the lookup-or-not-found rule shared by get, delete and update
//!
//! ## Dependency rule
//! Depends on `campus-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
