use crate::constants::validation::COMMENT_MAX_LENGTH;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    #[validate(length(min = 1, max = COMMENT_MAX_LENGTH))]
    pub content: String,
    pub created_at: DateTime<Utc>,
}
