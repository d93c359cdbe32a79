//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Behaviour shared by every record identifier.
///
/// Identifiers are assigned by the store on creation and never change.
pub trait RecordId:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + From<i64>
    + Into<i64>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw store identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl RecordId for $name {}
    };
}

define_id!(
    /// Unique identifier for a [`DiningCommonsMenuItem`](crate::menu_item::DiningCommonsMenuItem).
    MenuItemId
);

define_id!(
    /// Unique identifier for a [`HelpRequest`](crate::help_request::HelpRequest).
    HelpRequestId
);

define_id!(
    /// Unique identifier for a [`MenuItemReview`](crate::menu_item_review::MenuItemReview).
    MenuItemReviewId
);

define_id!(
    /// Unique identifier for a [`RecommendationRequest`](crate::recommendation_request::RecommendationRequest).
    RecommendationRequestId
);

define_id!(
    /// Unique identifier for an [`Article`](crate::article::Article).
    ArticleId
);
