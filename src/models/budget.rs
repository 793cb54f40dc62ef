use serde::{Deserialize, Serialize};

/// Fallback monthly limit when the user has never set one: 10,000 units.
pub const DEFAULT_MONTHLY_LIMIT_CENTS: i64 = 1_000_000;

/// One budget row per user, upserted on edit. No history is kept; only
/// the current value persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub user_id: i64,
    pub monthly_limit_cents: i64,
}

impl Budget {
    pub fn fallback(user_id: i64) -> Self {
        Self {
            user_id,
            monthly_limit_cents: DEFAULT_MONTHLY_LIMIT_CENTS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BudgetUpdate {
    pub monthly_limit_cents: i64,
}
