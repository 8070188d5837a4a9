//! Activity command - time log and per-category durations

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{Confirm, Select};

use super::input;
use super::{get_context, get_logger, log_event, require_login, resolve_record, short_id};
use crate::output;
use daylog_core::services::LogEvent;
use daylog_core::{Activity, ActivityCategory, Language};

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Record an activity
    Add {
        #[command(flatten)]
        fields: ActivityFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List activities
    List {
        /// Only this category
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change fields of an activity
    Edit {
        /// List position (1-based) or id prefix
        target: String,
        #[command(flatten)]
        fields: ActivityFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an activity
    Remove {
        /// List position (1-based) or id prefix
        target: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show minutes spent per category
    Totals {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ActivityFields {
    /// Date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
    /// What you did
    #[arg(long)]
    name: Option<String>,
    /// One of the activity categories, e.g. Exercise or Self-care
    #[arg(long)]
    category: Option<String>,
    /// Minutes spent
    #[arg(long)]
    duration: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

fn category_or_prompt(category: Option<String>, lang: Language) -> Result<ActivityCategory> {
    if let Some(c) = category {
        return Ok(c.parse()?);
    }
    let labels: Vec<&str> = ActivityCategory::ALL.iter().map(|c| c.label(lang)).collect();
    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ActivityCategory::ALL[choice])
}

impl ActivityFields {
    fn into_activity(self, lang: Language, interactive: bool) -> Result<Activity> {
        let date = input::date(self.date.as_deref())?;
        let name = input::required(&input::value_or_prompt(self.name, "Activity")?, "Activity name")?;
        let category = category_or_prompt(self.category, lang)?;
        let duration = input::duration(&input::value_or_prompt(self.duration, "Duration (minutes)")?)?;
        let notes = input::optional_or_prompt(self.notes, "Notes", interactive)?;
        Ok(Activity::new(date, name, category.as_str(), duration, notes))
    }

    fn apply(self, mut activity: Activity) -> Result<Activity> {
        if let Some(date) = self.date {
            activity.date = input::date(Some(&date))?;
        }
        if let Some(name) = self.name {
            activity.name = input::required(&name, "Activity name")?;
        }
        if let Some(category) = self.category {
            activity.category = category.parse::<ActivityCategory>()?.as_str().to_string();
        }
        if let Some(duration) = self.duration {
            activity.duration = input::duration(&duration)?;
        }
        if let Some(notes) = self.notes {
            activity.notes = notes;
        }
        Ok(activity)
    }

    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.name.is_none()
            && self.category.is_none()
            && self.duration.is_none()
            && self.notes.is_none()
    }
}

fn category_label(raw: &str, lang: Language) -> String {
    raw.parse::<ActivityCategory>()
        .map(|c| c.label(lang).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn format_minutes(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{} min ({}h {:02}m)", minutes, minutes / 60, minutes % 60)
    } else {
        format!("{} min", minutes)
    }
}

pub fn run(command: ActivityCommands) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;
    require_login(&ctx)?;
    let lang = ctx.preferences.language()?;

    match command {
        ActivityCommands::Add { fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("activity add"));
            let activity = fields.into_activity(lang, !json)?;
            let id = ctx.activities.add(activity)?;

            if json {
                return output::json(&ctx.activities.get(id));
            }
            output::success(&format!("Activity saved ({})", short_id(id)));
        }
        ActivityCommands::List { category, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("activity list"));
            let filter = category.map(|c| c.parse::<ActivityCategory>()).transpose()?;
            let activities: Vec<(usize, &Activity)> = ctx
                .activities
                .records()
                .iter()
                .enumerate()
                .filter(|(_, a)| filter.map_or(true, |c| a.category == c.as_str()))
                .collect();

            if json {
                let records: Vec<&Activity> = activities.iter().map(|(_, a)| *a).collect();
                return output::json(&records);
            }
            if activities.is_empty() {
                println!("No activities yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["#", "Id", "Date", "Activity", "Category", "Duration", "Notes"]);
            for (index, activity) in activities {
                table.add_row(vec![
                    (index + 1).to_string(),
                    short_id(activity.id),
                    activity.date.clone(),
                    activity.name.clone(),
                    category_label(&activity.category, lang),
                    format_minutes(activity.duration_minutes()),
                    output::or_dash(&activity.notes).to_string(),
                ]);
            }
            println!("{}", table);
        }
        ActivityCommands::Edit { target, fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("activity edit"));
            if fields.is_empty() {
                anyhow::bail!("Nothing to change. Pass at least one field, e.g. --duration 45");
            }
            let id = resolve_record(&ctx.activities, &target)?;
            let updated = match ctx.activities.get(id).cloned() {
                Some(activity) => fields.apply(activity)?,
                None => anyhow::bail!("No activity with id {}", id),
            };
            ctx.activities.update(id, updated)?;

            if json {
                return output::json(&ctx.activities.get(id));
            }
            output::success(&format!("Activity {} updated", short_id(id)));
        }
        ActivityCommands::Remove { target, force, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("activity remove"));
            let id = resolve_record(&ctx.activities, &target)?;

            if !force && !json {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete activity {}?", short_id(id)))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let removed = ctx.activities.delete(id)?;
            if json {
                return output::json(&removed);
            }
            output::warning(&format!("Activity {} deleted", short_id(id)));
        }
        ActivityCommands::Totals { json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("activity totals"));
            let totals = ctx
                .activities
                .aggregate_by(|a| a.category.clone(), |a| a.duration_minutes());
            let total: i64 = ctx.activities.total(|a| a.duration_minutes());

            if json {
                return output::json(&serde_json::json!({
                    "categories": totals,
                    "total_minutes": total,
                }));
            }
            if totals.is_empty() {
                println!("No activities yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Category", "Time"]);
            for group in &totals {
                table.add_row(vec![category_label(&group.key, lang), format_minutes(group.total)]);
            }
            table.add_row(vec!["Total".to_string(), format_minutes(total)]);
            println!("{}", table);
        }
    }

    Ok(())
}
