use serde::{Deserialize, Serialize};

use crate::paths::{self, Collection};

/// The signed-in user, passed explicitly to whatever needs it.
///
/// Created once the auth provider reports a user and dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
        }
    }

    pub fn collection(&self, collection: Collection) -> String {
        paths::collection(&self.user_id, collection)
    }

    pub fn document(&self, collection: Collection, id: &str) -> String {
        paths::document(&self.collection(collection), id)
    }

    /// Name shown in the dashboard greeting.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("there")
    }
}
