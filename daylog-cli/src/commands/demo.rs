//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_daylog_dir, get_logger, log_event};
use daylog_core::services::{DemoService, LogEvent};

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode with freshly generated sample records
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off {
        /// Also delete the demo store
        #[arg(long)]
        clean: bool,
    },
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let daylog_dir = get_daylog_dir()?;
    std::fs::create_dir_all(&daylog_dir)?;
    let demo_service = DemoService::new(&daylog_dir);
    let logger = get_logger();

    match command {
        Some(DemoCommands::On) => {
            log_event(&logger, LogEvent::new("demo_enabled").with_command("demo on"));
            demo_service.enable()?;
            println!("{}", "Demo mode enabled".green());
            println!("Sample records have been generated. Log in and run 'dl dashboard' to explore them.");
        }
        Some(DemoCommands::Off { clean }) => {
            log_event(&logger, LogEvent::new("demo_disabled").with_command("demo off"));
            demo_service.disable(clean)?;
            println!("{}", "Demo mode disabled".yellow());
        }
        Some(DemoCommands::Status) | None => {
            if demo_service.is_enabled()? {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
        }
    }

    Ok(())
}
