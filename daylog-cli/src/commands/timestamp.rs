//! Timestamp command - Unix time <-> calendar date

use anyhow::Result;
use chrono::Local;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use super::{get_logger, log_event};
use daylog_core::services::{convert_to_date, convert_to_timestamp, LogEvent};
use daylog_core::OperationResult;

#[derive(Subcommand)]
pub enum TimestampCommands {
    /// Convert a Unix timestamp (seconds or milliseconds) to a date
    ToDate {
        /// e.g. 1700000000 or 1700000000000
        timestamp: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a date (YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] or RFC 3339) to a Unix timestamp
    ToTimestamp {
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DateData {
    utc: String,
    local: String,
}

fn print_failure<T: Serialize>(json: bool, result: OperationResult<T>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    std::process::exit(1);
}

pub fn run(command: TimestampCommands) -> Result<()> {
    // No login needed: the converter is a pure utility
    let logger = get_logger();

    match command {
        TimestampCommands::ToDate { timestamp, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("timestamp to-date"));
            match convert_to_date(&timestamp) {
                Ok(date) => {
                    let data = DateData {
                        utc: date.to_rfc3339(),
                        local: date.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z").to_string(),
                    };
                    if json {
                        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(data))?);
                    } else {
                        println!("{} {}", "UTC:  ".dimmed(), data.utc);
                        println!("{} {}", "Local:".dimmed(), data.local);
                    }
                }
                Err(e) => {
                    if !json {
                        eprintln!("{}", e.to_string().red());
                    }
                    return print_failure(json, OperationResult::<DateData>::fail(e.code()));
                }
            }
        }
        TimestampCommands::ToTimestamp { date, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("timestamp to-timestamp"));
            match convert_to_timestamp(&date) {
                Ok(ts) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(ts))?);
                    } else {
                        println!("{} {}", "Seconds:     ".dimmed(), ts.seconds);
                        println!("{} {}", "Milliseconds:".dimmed(), ts.milliseconds);
                    }
                }
                Err(e) => {
                    if !json {
                        eprintln!("{}", e.to_string().red());
                    }
                    return print_failure(json, OperationResult::<()>::fail(e.code()));
                }
            }
        }
    }

    Ok(())
}
