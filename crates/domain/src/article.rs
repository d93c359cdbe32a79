//! Articles: links shared with the course, each with a short explanation.

use serde::{Deserialize, Serialize};

use crate::id::ArticleId;
use crate::resource::Resource;
use crate::time::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub url: String,
    pub explanation: String,
    /// Email of whoever submitted the article.
    pub email: String,
    #[serde(deserialize_with = "crate::time::deserialize")]
    pub date_added: Timestamp,
}

impl Resource for Article {
    const NAME: &'static str = "Article";
    type Id = ArticleId;
}
