//! Star ratings left on dining commons menu items.

use serde::{Deserialize, Serialize};

use crate::id::MenuItemReviewId;
use crate::resource::Resource;
use crate::time::Timestamp;

/// A review of a menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    /// Reviewed menu item. Stored as a plain number, not a foreign key.
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub date_reviewed: Timestamp,
    pub comments: String,
}

impl Resource for MenuItemReview {
    const NAME: &'static str = "MenuItemReview";
    type Id = MenuItemReviewId;
}
