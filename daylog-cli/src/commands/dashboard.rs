//! Dashboard command - overview across the three trackers

use anyhow::Result;
use colored::Colorize;

use super::{get_context, get_logger, log_event, require_login};
use crate::output;
use daylog_core::services::LogEvent;
use daylog_core::Language;

pub fn run(json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("dashboard"));

    let ctx = get_context()?;
    let user = require_login(&ctx)?;
    let lang = ctx.preferences.language()?;
    let summary = ctx.dashboard();

    if json {
        return output::json(&summary);
    }

    let ru = lang == Language::Ru;
    let title = if ru { "Панель" } else { "Dashboard" };
    println!("{} ({})", title.bold(), user.username);
    println!();

    let mut table = output::create_table();
    table.add_row(vec![
        if ru { "Записей за день" } else { "Daily entries" },
        &summary.daily_entries.to_string(),
    ]);
    table.add_row(vec![
        if ru { "Общие Расходы" } else { "Total expenses" },
        &format!("{:.2}", summary.total_expenses),
    ]);
    table.add_row(vec![
        if ru { "Среднее Настроение (1-10)" } else { "Average mood (1-10)" },
        &summary.average_mood.to_string(),
    ]);
    table.add_row(vec![
        if ru { "Общее Время Упражнений" } else { "Total exercise time" },
        &format!("{} {}", summary.total_exercise_minutes, if ru { "мин" } else { "min" }),
    ]);
    println!("{}", table);

    println!();
    let latest = if ru { "Последние записи" } else { "Latest entries" };
    println!("{}", latest.bold());

    match &summary.latest_daily {
        Some(d) => println!(
            "  {} {}: mood {}/10, sleep {} h, water {}, exercise {} min",
            "Daily".cyan(),
            d.date,
            output::or_dash(&d.mood),
            output::or_dash(&d.sleep),
            output::or_dash(&d.water_intake),
            output::or_dash(&d.exercise)
        ),
        None => println!("  {} -", "Daily".cyan()),
    }
    match &summary.latest_expense {
        Some(e) => println!(
            "  {} {}: {} {:.2} {}",
            "Expense".cyan(),
            e.date,
            e.category_kind().map_or(e.category.as_str(), |c| c.label(lang)),
            e.amount_value(),
            e.description
        ),
        None => println!("  {} -", "Expense".cyan()),
    }
    match &summary.latest_activity {
        Some(a) => println!(
            "  {} {}: {} ({}), {} min",
            "Activity".cyan(),
            a.date,
            a.name,
            a.category_kind().map_or(a.category.as_str(), |c| c.label(lang)),
            a.duration_minutes()
        ),
        None => println!("  {} -", "Activity".cyan()),
    }

    Ok(())
}
