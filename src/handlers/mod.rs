pub mod budget;
pub mod categories;
pub mod dashboard;
pub mod expenses;
pub mod report;
pub mod stream;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Derived metrics
        .route("/api/dashboard", get(dashboard::index))
        .route("/api/stream", get(stream::stream))
        // Expense CRUD
        .route("/api/expenses", get(expenses::list))
        .route("/api/expenses", post(expenses::create))
        .route("/api/expenses/:id", put(expenses::update))
        .route("/api/expenses/:id", delete(expenses::delete))
        // Category management
        .route("/api/categories", get(categories::list))
        .route("/api/categories", post(categories::create))
        .route("/api/categories/:id", put(categories::rename))
        .route("/api/categories/:id", delete(categories::delete))
        // Budget
        .route("/api/budget", get(budget::show))
        .route("/api/budget", put(budget::upsert))
        // Monthly report
        .route("/api/report", get(report::show))
        .route("/api/report/export", get(report::export))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
