use serde::{Deserialize, Serialize};

/// A user-defined category. Built-in categories are not stored; they live
/// in [`crate::services::registry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
}
