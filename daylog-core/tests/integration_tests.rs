//! Integration tests for daylog-core
//!
//! Every test runs against real DuckDB files in a scratch directory, so
//! reopening a context exercises the same persistence path as the CLI.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use daylog_core::adapters::duckdb::DuckDbStore;
use daylog_core::config::Config;
use daylog_core::ports::Store;
use daylog_core::services::{convert_to_date, DemoService, ExpenseLog, MoodAverage};
use daylog_core::{
    Activity, AuthError, DailyEntry, DaylogContext, Error, Expense, Language, SessionState, Theme,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn open_context(temp_dir: &TempDir) -> DaylogContext {
    DaylogContext::new(temp_dir.path()).expect("Failed to open context")
}

fn auth_error(result: daylog_core::domain::result::Result<()>) -> AuthError {
    match result {
        Err(Error::Auth(e)) => e,
        other => panic!("expected auth error, got {:?}", other),
    }
}

fn food(amount: &str) -> Expense {
    Expense::new("2024-05-01", "Food", amount, "")
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_admin_login_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&temp_dir);
        assert_eq!(ctx.auth.state(), SessionState::Unauthenticated);
        assert!(ctx.auth.login("admin", "123").unwrap());
        assert_eq!(ctx.auth.state(), SessionState::Authenticated("admin".to_string()));
    }

    let ctx = open_context(&temp_dir);
    assert_eq!(ctx.auth.state(), SessionState::Authenticated("admin".to_string()));
}

#[test]
fn test_fresh_store_is_signed_out() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_context(&temp_dir);

    assert!(ctx.auth.current_user().is_none());
    assert!(ctx.store.get("currentUser").unwrap().is_none());
}

#[test]
fn test_register_then_login() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&temp_dir);
        ctx.auth.register("maria", "secret", "secret").unwrap();
        assert!(!ctx.auth.is_authenticated());
    }

    let mut ctx = open_context(&temp_dir);
    assert!(ctx.auth.login("maria", "secret").unwrap());
    assert_eq!(ctx.auth.current_user().unwrap().username, "maria");
    assert!(!ctx.auth.login("maria", "SECRET").unwrap());
}

#[test]
fn test_username_with_surrounding_spaces_logs_in() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&temp_dir);
        ctx.auth.register(" bob ", "pw", "pw").unwrap();
    }

    let mut ctx = open_context(&temp_dir);
    assert!(ctx.auth.login(" bob ", "pw").unwrap());
    assert_eq!(ctx.auth.current_user().unwrap().username, " bob ");
    ctx.auth.logout().unwrap();
    assert!(!ctx.auth.login("bob", "pw").unwrap());
}

#[test]
fn test_register_failures_leave_registry_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = open_context(&temp_dir);

    assert_eq!(
        auth_error(ctx.auth.register("maria", "a", "b")),
        AuthError::PasswordsMismatch
    );
    assert!(ctx.auth.registry().is_empty());

    ctx.auth.register("maria", "a", "a").unwrap();
    assert_eq!(
        auth_error(ctx.auth.register("maria", "b", "b")),
        AuthError::UsernameTaken
    );
    assert_eq!(ctx.auth.registry().len(), 1);
}

#[test]
fn test_logout_persists() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&temp_dir);
        ctx.auth.login("admin", "123").unwrap();
        ctx.auth.logout().unwrap();
    }

    let ctx = open_context(&temp_dir);
    assert_eq!(ctx.auth.state(), SessionState::Unauthenticated);
}

// ============================================================================
// Record lists
// ============================================================================

#[test]
fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let (daily_id, activity_id) = {
        let mut ctx = open_context(&temp_dir);
        let mut entry = DailyEntry::new("2024-05-01");
        entry.mood = "8".to_string();
        let daily_id = ctx.daily.add(entry).unwrap();
        let activity_id = ctx
            .activities
            .add(Activity::new("2024-05-01", "Yoga", "Self-care", "20", ""))
            .unwrap();
        (daily_id, activity_id)
    };

    let ctx = open_context(&temp_dir);
    assert_eq!(ctx.daily.get(daily_id).unwrap().mood, "8");
    assert_eq!(ctx.activities.get(activity_id).unwrap().category, "Self-care");
}

#[test]
fn test_add_then_delete_restores_list() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = open_context(&temp_dir);
    ctx.expenses.add(food("3")).unwrap();
    let before = ctx.expenses.records().to_vec();

    ctx.expenses.add(food("4")).unwrap();
    let removed = ctx.expenses.delete_at(ctx.expenses.len() - 1).unwrap();
    assert!(removed.is_some());
    assert_eq!(ctx.expenses.records(), before.as_slice());

    let reopened = open_context(&temp_dir);
    assert_eq!(reopened.expenses.records(), before.as_slice());
}

#[test]
fn test_expense_totals_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = open_context(&temp_dir);

    ctx.expenses.add(food("12.50")).unwrap();
    assert_eq!(ctx.expenses.total(|e| e.amount_value()), Decimal::new(125, 1));

    ctx.expenses
        .add(Expense::new("2024-05-01", "Travel", "15", "train"))
        .unwrap();
    ctx.expenses.add(food("7.50")).unwrap();

    let totals = ctx
        .expenses
        .aggregate_by(|e| e.category.clone(), |e| e.amount_value());
    assert_eq!(totals[0].key, "Food");
    assert_eq!(totals[0].total, Decimal::new(20, 0));
    assert_eq!(totals[1].key, "Travel");

    let grouped: Decimal = totals.iter().map(|g| g.total).sum();
    assert_eq!(grouped, ctx.expenses.total(|e| e.amount_value()));
}

#[test]
fn test_edit_by_id_after_earlier_delete() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = open_context(&temp_dir);

    let first = ctx.expenses.add(food("1")).unwrap();
    let second = ctx.expenses.add(food("2")).unwrap();
    ctx.expenses.delete(first).unwrap();

    assert!(ctx.expenses.update(second, food("5")).unwrap());
    assert_eq!(ctx.expenses.get(second).unwrap().amount, "5");
    assert_eq!(ctx.expenses.position(second), Some(0));
}

#[test]
fn test_legacy_store_values_are_read() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("daylog.duckdb");

    {
        let store = DuckDbStore::open(&db_path).unwrap();
        store
            .set(
                "expenses",
                r#"[{"date":"2024-01-02","category":"Food","amount":9.5,"description":"soup"}]"#,
            )
            .unwrap();
        store.set("language", "ru").unwrap();
    }

    let ctx = open_context(&temp_dir);
    let expense = &ctx.expenses.records()[0];
    assert!(!expense.id.is_nil());
    assert_eq!(expense.amount, "9.5");
    assert_eq!(ctx.preferences.language().unwrap(), Language::Ru);

    // Assigned ids were written back
    let reopened = open_context(&temp_dir);
    assert_eq!(reopened.expenses.records()[0].id, expense.id);
}

// ============================================================================
// Dashboard, preferences, conversion
// ============================================================================

#[test]
fn test_dashboard_over_context() {
    let temp_dir = TempDir::new().unwrap();
    let mut ctx = open_context(&temp_dir);

    let summary = ctx.dashboard();
    assert_eq!(summary.average_mood, MoodAverage::Unavailable);

    for (mood, exercise) in [("6", "20"), ("9", "40")] {
        let mut entry = DailyEntry::new("2024-05-02");
        entry.mood = mood.to_string();
        entry.exercise = exercise.to_string();
        ctx.daily.add(entry).unwrap();
    }
    ctx.expenses.add(food("10.25")).unwrap();

    let summary = ctx.dashboard();
    assert_eq!(summary.daily_entries, 2);
    assert_eq!(summary.average_mood.to_string(), "7.5");
    assert_eq!(summary.total_exercise_minutes, 60);
    assert_eq!(summary.total_expenses.to_string(), "10.25");
    assert_eq!(summary.latest_daily.unwrap().mood, "9");
}

#[test]
fn test_preferences_persist() {
    let temp_dir = TempDir::new().unwrap();

    {
        let ctx = open_context(&temp_dir);
        ctx.preferences.set_language(Language::Ru).unwrap();
        ctx.preferences.toggle_theme().unwrap();
    }

    let ctx = open_context(&temp_dir);
    assert_eq!(ctx.preferences.language().unwrap(), Language::Ru);
    assert_eq!(ctx.preferences.theme().unwrap(), Theme::Dark);
    assert_eq!(ctx.store.get("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn test_seconds_and_millis_convert_to_same_date() {
    assert_eq!(
        convert_to_date("1700000000").unwrap(),
        convert_to_date("1700000000000").unwrap()
    );
}

// ============================================================================
// Demo mode
// ============================================================================

#[test]
fn test_demo_mode_uses_separate_store() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ctx = open_context(&temp_dir);
        ctx.expenses.add(food("1")).unwrap();
    }

    DemoService::new(temp_dir.path()).enable().unwrap();
    let config = Config::load(temp_dir.path()).unwrap();
    assert!(config.demo_mode);

    // Build the demo context explicitly so the test does not depend on the environment
    let demo_store = Arc::new(DuckDbStore::open(&temp_dir.path().join("demo.duckdb")).unwrap());
    let demo = DaylogContext::with_store(config, temp_dir.path(), demo_store).unwrap();
    assert_eq!(demo.daily.len(), 30);
    assert!(demo.expenses.len() > 1);
    assert!(!demo.activities.is_empty());
    drop(demo);

    let real = Arc::new(DuckDbStore::open(&temp_dir.path().join("daylog.duckdb")).unwrap());
    let expenses = ExpenseLog::load(real).unwrap();
    assert_eq!(expenses.len(), 1);
}
