//! Help requests raised by a team from a table or breakout room.

use serde::{Deserialize, Serialize};

use crate::id::HelpRequestId;
use crate::resource::Resource;
use crate::time::Timestamp;

/// A request for help raised by a student team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub request_time: Timestamp,
    pub explanation: String,
    pub solved: bool,
}

impl Resource for HelpRequest {
    const NAME: &'static str = "HelpRequest";
    type Id = HelpRequestId;
}
