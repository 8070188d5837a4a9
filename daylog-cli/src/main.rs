//! Daylog CLI - personal daily tracking in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daylog_core::services::LogEvent;

mod commands;
mod output;

use commands::{activity, auth, daily, dashboard, demo, expense, logs, settings, status, timestamp};

/// Daylog - wellness, expenses and activities in your terminal
#[derive(Parser)]
#[command(name = "dl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (prompts for anything not given)
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long, env = "DAYLOG_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a local account
    Register {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign out
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show session, store and record counts
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Daily wellness log
    Daily {
        #[command(subcommand)]
        command: daily::DailyCommands,
    },

    /// Expense tracker
    Expense {
        #[command(subcommand)]
        command: expense::ExpenseCommands,
    },

    /// Activity log
    Activity {
        #[command(subcommand)]
        command: activity::ActivityCommands,
    },

    /// Overview of all trackers
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between Unix timestamps and dates
    Timestamp {
        #[command(subcommand)]
        command: timestamp::TimestampCommands,
    },

    /// Language and theme
    Settings {
        #[command(subcommand)]
        command: settings::SettingsCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::log_event(
                &commands::get_logger(),
                LogEvent::new("command_failed").with_error(e.to_string()),
            );
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { username, password, json } => auth::run_login(username, password, json),
        Commands::Register {
            username,
            password,
            confirm_password,
            json,
        } => auth::run_register(username, password, confirm_password, json),
        Commands::Logout { json } => auth::run_logout(json),
        Commands::Status { json } => status::run(json),
        Commands::Daily { command } => daily::run(command),
        Commands::Expense { command } => expense::run(command),
        Commands::Activity { command } => activity::run(command),
        Commands::Dashboard { json } => dashboard::run(json),
        Commands::Timestamp { command } => timestamp::run(command),
        Commands::Settings { command } => settings::run(command),
        Commands::Logs { command } => logs::run(command),
        Commands::Demo { command } => demo::run(command),
    }
}
