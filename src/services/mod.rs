pub mod aggregate;
pub mod dashboard;
pub mod export;
pub mod registry;
pub mod report;
pub mod series;
pub mod streak;
