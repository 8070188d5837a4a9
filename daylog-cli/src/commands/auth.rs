//! Login, register and logout commands

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use serde::Serialize;

use super::{get_context, get_logger, log_event};
use daylog_core::services::LogEvent;
use daylog_core::{AuthError, Error, OperationResult, SessionState};

#[derive(Serialize)]
struct LoginData {
    username: String,
}

fn username_or_prompt(username: Option<String>) -> Result<String> {
    match username {
        Some(u) => Ok(u),
        None => Ok(Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?),
    }
}

fn password_or_prompt(password: Option<String>, prompt: &str) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?),
    }
}

/// Usernames are taken as typed; only a missing value counts as empty
fn login_fields_missing(username: &str, password: &str) -> bool {
    username.is_empty() || password.is_empty()
}

/// Print an auth failure and turn it into the command error
fn fail(json: bool, error: AuthError) -> Result<()> {
    if json {
        let result: OperationResult<()> = OperationResult::fail(error.code());
        println!("{}", serde_json::to_string_pretty(&result)?);
        std::process::exit(1);
    }
    Err(error.into())
}

pub fn run_login(username: Option<String>, password: Option<String>, json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("login"));

    let username = username_or_prompt(username)?;
    let password = password_or_prompt(password, "Password")?;

    if login_fields_missing(&username, &password) {
        log_event(
            &logger,
            LogEvent::new("login_failed")
                .with_command("login")
                .with_error(AuthError::LoginRequiredFields.code()),
        );
        return fail(json, AuthError::LoginRequiredFields);
    }

    let mut ctx = get_context()?;
    if !ctx.auth.login(&username, &password)? {
        log_event(
            &logger,
            LogEvent::new("login_failed")
                .with_command("login")
                .with_error(AuthError::LoginFailed.code()),
        );
        return fail(json, AuthError::LoginFailed);
    }

    log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));

    if json {
        let result = OperationResult::ok(LoginData { username });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} Logged in as {}", "✓".green(), username.bold());
    }
    Ok(())
}

pub fn run_register(
    username: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("register"));

    let username = username_or_prompt(username)?;
    let password = password_or_prompt(password, "Password")?;
    let confirm_password = password_or_prompt(confirm_password, "Confirm password")?;

    let mut ctx = get_context()?;
    match ctx.auth.register(&username, &password, &confirm_password) {
        Ok(()) => {
            log_event(&logger, LogEvent::new("register_succeeded").with_command("register"));
            if json {
                let result = OperationResult::ok(LoginData { username });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{} Registered {}", "✓".green(), username.bold());
                println!("Run 'dl login' to sign in.");
            }
            Ok(())
        }
        Err(Error::Auth(e)) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.code()),
            );
            fail(json, e)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn run_logout(json: bool) -> Result<()> {
    let logger = get_logger();
    log_event(&logger, LogEvent::new("command_executed").with_command("logout"));

    let mut ctx = get_context()?;
    let was_signed_in = ctx.auth.is_authenticated();
    ctx.auth.logout()?;

    if json {
        let result = OperationResult::ok(ctx.auth.state());
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if was_signed_in {
        println!("{}", "Logged out".yellow());
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Current session, used by `dl status`
pub fn session_line(state: &SessionState) -> String {
    match state {
        SessionState::Authenticated(username) => format!("Logged in as {}", username.bold()),
        SessionState::Unauthenticated => "Not logged in".dimmed().to_string(),
    }
}
