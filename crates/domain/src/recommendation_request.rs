//! A student asking a professor for a recommendation letter.

use serde::{Deserialize, Serialize};

use crate::id::RecommendationRequestId;
use crate::resource::Resource;
use crate::time::Timestamp;

/// A request for a letter of recommendation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub date_requested: Timestamp,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub date_needed: Timestamp,
    pub done: bool,
}

impl Resource for RecommendationRequest {
    const NAME: &'static str = "RecommendationRequest";
    type Id = RecommendationRequestId;
}
