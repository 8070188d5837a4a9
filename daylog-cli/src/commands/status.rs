//! Status command - session, store and record counts

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use super::auth::session_line;
use super::get_context;
use daylog_core::{Language, SessionState, Theme};

#[derive(Serialize)]
struct StatusSummary {
    session: SessionState,
    demo_mode: bool,
    store_path: String,
    daily_entries: usize,
    expenses: usize,
    activities: usize,
    registered_users: usize,
    language: Language,
    theme: Theme,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let status = StatusSummary {
        session: ctx.auth.state(),
        demo_mode: ctx.config.demo_mode,
        store_path: ctx.config.store_path(&ctx.daylog_dir).display().to_string(),
        daily_entries: ctx.daily.len(),
        expenses: ctx.expenses.len(),
        activities: ctx.activities.len(),
        registered_users: ctx.auth.registry().len(),
        language: ctx.preferences.language()?,
        theme: ctx.preferences.theme()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Daylog Status".bold());
    println!("{}", session_line(&status.session));
    if status.demo_mode {
        println!("Demo mode is {}", "ON".green());
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Daily entries", &status.daily_entries.to_string()]);
    table.add_row(vec!["Expenses", &status.expenses.to_string()]);
    table.add_row(vec!["Activities", &status.activities.to_string()]);
    table.add_row(vec!["Registered users", &status.registered_users.to_string()]);
    table.add_row(vec!["Language", status.language.label(status.language)]);
    table.add_row(vec!["Theme", status.theme.label(status.language)]);
    println!("{}", table);
    println!();

    println!("Store: {}", status.store_path.dimmed());
    Ok(())
}
