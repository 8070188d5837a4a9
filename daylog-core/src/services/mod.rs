//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
pub mod dashboard;
mod demo;
pub mod logging;
pub mod migration;
mod preferences;
pub mod records;
pub mod timestamp;

pub use auth::{AuthService, CredentialRegistry};
pub use dashboard::{summarize, DashboardSummary, MoodAverage};
pub use demo::DemoService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use migration::{MigrationResult, MigrationService};
pub use preferences::PreferencesService;
pub use records::{ActivityLog, DailyLog, ExpenseLog, GroupTotal, RecordList, Total};
pub use timestamp::{convert_to_date, convert_to_timestamp, UnixTimestamp};
