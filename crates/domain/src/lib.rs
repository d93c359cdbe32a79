//! # campus-domain
//!
//! Pure domain model for the campus resource API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - The [`Resource`](resource::Resource) abstraction shared by every record type
//! - Concrete records: dining commons menu items, help requests, menu item
//!   reviews, recommendation requests, articles
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod resource;
pub mod time;

pub mod article;
pub mod help_request;
pub mod menu_item;
pub mod menu_item_review;
pub mod recommendation_request;
