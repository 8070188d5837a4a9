//! Daylog Core - business logic for personal daily tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Records, credentials and preferences
//! - **ports**: Trait definitions for external dependencies (Store)
//! - **services**: Session, record lists, dashboard, conversion and logging
//! - **adapters**: Concrete implementations (DuckDB, in-memory, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod migrations;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::duckdb::DuckDbStore;
use config::Config;
use ports::Store;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{AuthError, ConvertError, Error, OperationResult};
pub use domain::{
    Activity, ActivityCategory, DailyEntry, Expense, ExpenseCategory, Language, SessionState, Theme, User,
};

/// Main context for Daylog operations
///
/// Holds the store, the configuration, the session and the three tracker
/// lists. Front-ends build one per invocation.
pub struct DaylogContext {
    pub config: Config,
    pub daylog_dir: PathBuf,
    pub store: Arc<dyn Store>,
    pub auth: AuthService,
    pub preferences: PreferencesService,
    pub daily: DailyLog,
    pub expenses: ExpenseLog,
    pub activities: ActivityLog,
}

impl DaylogContext {
    /// Open the store for the current mode in `daylog_dir` and load everything
    pub fn new(daylog_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(daylog_dir)
            .with_context(|| format!("Failed to create {}", daylog_dir.display()))?;
        let config = Config::load(daylog_dir)?;

        let db_path = config.store_path(daylog_dir);
        let store = DuckDbStore::open(&db_path)
            .with_context(|| format!("Failed to open store at {}", db_path.display()))?;

        Self::with_store(config, daylog_dir, Arc::new(store))
    }

    /// Build a context over an already opened store
    pub fn with_store(config: Config, daylog_dir: &Path, store: Arc<dyn Store>) -> Result<Self> {
        let auth = AuthService::new(Arc::clone(&store)).context("Failed to restore session")?;
        let preferences = PreferencesService::new(Arc::clone(&store));
        let daily = DailyLog::load(Arc::clone(&store)).context("Failed to load daily entries")?;
        let expenses = ExpenseLog::load(Arc::clone(&store)).context("Failed to load expenses")?;
        let activities = ActivityLog::load(Arc::clone(&store)).context("Failed to load activities")?;

        Ok(Self {
            config,
            daylog_dir: daylog_dir.to_path_buf(),
            store,
            auth,
            preferences,
            daily,
            expenses,
            activities,
        })
    }

    pub fn dashboard(&self) -> DashboardSummary {
        summarize(&self.daily, &self.expenses, &self.activities)
    }
}
