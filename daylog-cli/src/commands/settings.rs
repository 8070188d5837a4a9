//! Settings command - language and theme preferences

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_context, get_logger, log_event};
use crate::output;
use daylog_core::services::LogEvent;
use daylog_core::{Language, Theme};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show or set the interface language (en, ru)
    Language {
        value: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or set the theme (light, dark, toggle)
    Theme {
        value: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: SettingsCommands) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    match command {
        SettingsCommands::Language { value, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("settings language"));
            if let Some(v) = value {
                ctx.preferences.set_language(v.parse::<Language>()?)?;
            }
            let language = ctx.preferences.language()?;

            if json {
                return output::json(&serde_json::json!({ "language": language }));
            }
            println!("Language: {}", language.label(language).bold());
            let others: Vec<String> = Language::ALL
                .iter()
                .filter(|l| **l != language)
                .map(|l| format!("{} ({})", l.as_str(), l.label(language)))
                .collect();
            println!("{}", format!("Also available: {}", others.join(", ")).dimmed());
        }
        SettingsCommands::Theme { value, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("settings theme"));
            let theme = match value.as_deref() {
                Some("toggle") => ctx.preferences.toggle_theme()?,
                Some(v) => {
                    let theme = v.parse::<Theme>()?;
                    ctx.preferences.set_theme(theme)?;
                    theme
                }
                None => ctx.preferences.theme()?,
            };

            if json {
                return output::json(&serde_json::json!({ "theme": theme }));
            }
            let lang = ctx.preferences.language()?;
            output::info(&format!("Theme: {}", theme.label(lang)));
        }
    }

    Ok(())
}
