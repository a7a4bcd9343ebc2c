use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A community forum a new post can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForumCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}
