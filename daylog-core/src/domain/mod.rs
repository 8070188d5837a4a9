//! Core domain entities
//!
//! Records, credentials and preferences are plain data structures with
//! coercion helpers - no I/O or external dependencies.

mod activity;
mod daily;
mod expense;
pub mod preferences;
pub mod record;
pub mod result;
mod user;

pub use activity::{Activity, ActivityCategory};
pub use daily::DailyEntry;
pub use expense::{Expense, ExpenseCategory};
pub use preferences::{Language, Theme};
pub use record::{Categorized, Record};
pub use user::{Credentials, SessionState, User, ADMIN_PASSWORD, ADMIN_USERNAME};
