//! Daily command - wellness log entries

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::Confirm;

use super::input;
use super::{get_context, get_logger, log_event, require_login, resolve_record, short_id};
use crate::output;
use daylog_core::services::LogEvent;
use daylog_core::DailyEntry;

#[derive(Subcommand)]
pub enum DailyCommands {
    /// Record a day's mood, sleep, water and exercise
    Add {
        #[command(flatten)]
        fields: DailyFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List daily entries
    List {
        /// Only entries on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change fields of an entry
    Edit {
        /// List position (1-based) or id prefix
        target: String,
        #[command(flatten)]
        fields: DailyFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry
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
}

#[derive(Args)]
pub struct DailyFields {
    /// Date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
    /// Mood from 1 to 10
    #[arg(long)]
    mood: Option<String>,
    /// Hours of sleep, in steps of 0.5
    #[arg(long)]
    sleep: Option<String>,
    /// Glasses of water
    #[arg(long)]
    water: Option<String>,
    /// Minutes of exercise
    #[arg(long)]
    exercise: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

impl DailyFields {
    /// Build a new entry, prompting for missing required fields
    fn into_entry(self, interactive: bool) -> Result<DailyEntry> {
        let mut entry = DailyEntry::new(input::date(self.date.as_deref())?);
        entry.mood = input::mood(&input::value_or_prompt(self.mood, "Mood (1-10)")?)?;
        entry.sleep = input::sleep(&input::value_or_prompt(self.sleep, "Sleep (hours)")?)?;
        entry.water_intake =
            input::count(&input::value_or_prompt(self.water, "Water intake (glasses)")?, "Water intake")?;
        entry.exercise =
            input::count(&input::value_or_prompt(self.exercise, "Exercise (minutes)")?, "Exercise")?;
        entry.notes = input::optional_or_prompt(self.notes, "Notes", interactive)?;
        Ok(entry)
    }

    /// Apply the given fields over an existing entry
    fn apply(self, mut entry: DailyEntry) -> Result<DailyEntry> {
        if let Some(date) = self.date {
            entry.date = input::date(Some(&date))?;
        }
        if let Some(mood) = self.mood {
            entry.mood = input::mood(&mood)?;
        }
        if let Some(sleep) = self.sleep {
            entry.sleep = input::sleep(&sleep)?;
        }
        if let Some(water) = self.water {
            entry.water_intake = input::count(&water, "Water intake")?;
        }
        if let Some(exercise) = self.exercise {
            entry.exercise = input::count(&exercise, "Exercise")?;
        }
        if let Some(notes) = self.notes {
            entry.notes = notes;
        }
        Ok(entry)
    }

    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.mood.is_none()
            && self.sleep.is_none()
            && self.water.is_none()
            && self.exercise.is_none()
            && self.notes.is_none()
    }
}

pub fn run(command: DailyCommands) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;
    require_login(&ctx)?;

    match command {
        DailyCommands::Add { fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("daily add"));
            let entry = fields.into_entry(!json)?;
            let id = ctx.daily.add(entry)?;

            if json {
                return output::json(&ctx.daily.get(id));
            }
            output::success(&format!("Daily entry saved ({})", short_id(id)));
        }
        DailyCommands::List { date, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("daily list"));
            let date = date.map(|d| input::date(Some(&d))).transpose()?;
            let entries: Vec<(usize, &DailyEntry)> = ctx
                .daily
                .records()
                .iter()
                .enumerate()
                .filter(|(_, e)| date.as_deref().map_or(true, |d| e.date == d))
                .collect();

            if json {
                let records: Vec<&DailyEntry> = entries.iter().map(|(_, e)| *e).collect();
                return output::json(&records);
            }
            if entries.is_empty() {
                println!("No daily entries yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["#", "Id", "Date", "Mood", "Sleep", "Water", "Exercise", "Notes"]);
            for (index, entry) in entries {
                table.add_row(vec![
                    (index + 1).to_string(),
                    short_id(entry.id),
                    entry.date.clone(),
                    format!("{}/10", output::or_dash(&entry.mood)),
                    format!("{} h", output::or_dash(&entry.sleep)),
                    output::or_dash(&entry.water_intake).to_string(),
                    format!("{} min", output::or_dash(&entry.exercise)),
                    output::or_dash(&entry.notes).to_string(),
                ]);
            }
            println!("{}", table);
        }
        DailyCommands::Edit { target, fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("daily edit"));
            if fields.is_empty() {
                anyhow::bail!("Nothing to change. Pass at least one field, e.g. --mood 7");
            }
            let id = resolve_record(&ctx.daily, &target)?;
            let current = ctx.daily.get(id).cloned();
            let updated = match current {
                Some(entry) => fields.apply(entry)?,
                None => anyhow::bail!("No entry with id {}", id),
            };
            ctx.daily.update(id, updated)?;

            if json {
                return output::json(&ctx.daily.get(id));
            }
            output::success(&format!("Daily entry {} updated", short_id(id)));
        }
        DailyCommands::Remove { target, force, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("daily remove"));
            let id = resolve_record(&ctx.daily, &target)?;

            if !force && !json {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete daily entry {}?", short_id(id)))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let removed = ctx.daily.delete(id)?;
            if json {
                return output::json(&removed);
            }
            output::warning(&format!("Daily entry {} deleted", short_id(id)));
        }
    }

    Ok(())
}
