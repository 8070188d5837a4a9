//! Demo service - manage demo mode
//!
//! Demo mode switches the context to a separate store seeded with sample
//! records, leaving the real store untouched.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use crate::adapters::demo::{generate_demo_activities, generate_demo_daily_entries, generate_demo_expenses};
use crate::adapters::duckdb::DuckDbStore;
use crate::config::{Config, DEMO_STORE_FILENAME};
use crate::domain::{Activity, DailyEntry, Expense, Record};
use crate::ports::save_json;

pub struct DemoService {
    daylog_dir: PathBuf,
}

impl DemoService {
    pub fn new(daylog_dir: &Path) -> Self {
        Self {
            daylog_dir: daylog_dir.to_path_buf(),
        }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.daylog_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    ///
    /// Starts from a fresh demo store every time: the old one is deleted,
    /// `demoMode` is switched on and the new store is seeded.
    pub fn enable(&self) -> Result<()> {
        self.remove_demo_store()?;

        let mut config = Config::load(&self.daylog_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.daylog_dir)?;

        let store = DuckDbStore::open(&self.daylog_dir.join(DEMO_STORE_FILENAME))?;
        let today = Utc::now().date_naive();

        save_json(&store, DailyEntry::STORAGE_KEY, &generate_demo_daily_entries(today))?;
        save_json(&store, Expense::STORAGE_KEY, &generate_demo_expenses(today))?;
        save_json(&store, Activity::STORAGE_KEY, &generate_demo_activities(today))?;

        Ok(())
    }

    /// Disable demo mode, deleting the demo store when `clean` is set
    pub fn disable(&self, clean: bool) -> Result<()> {
        let mut config = Config::load(&self.daylog_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.daylog_dir)?;

        if clean {
            self.remove_demo_store()?;
        }

        Ok(())
    }

    fn remove_demo_store(&self) -> Result<()> {
        let demo_db = self.daylog_dir.join(DEMO_STORE_FILENAME);
        let demo_wal = self.daylog_dir.join(format!("{}.wal", DEMO_STORE_FILENAME));
        for path in [demo_db, demo_wal] {
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}
