pub mod budget;
pub mod category;
pub mod expense;
pub mod user;

pub use budget::{Budget, BudgetUpdate, DEFAULT_MONTHLY_LIMIT_CENTS};
pub use category::{Category, NewCategory};
pub use expense::{Expense, NewExpense};
pub use user::{Credentials, User};
