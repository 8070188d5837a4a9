//! Form input validation and prompting
//!
//! Each validator returns the normalized string that gets stored.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use dialoguer::Input;
use rust_decimal::Decimal;

use daylog_core::domain::record::today;

/// Largest accepted expense amount
const MAX_AMOUNT: i64 = 1_000_000_000;

/// Largest accepted count (water glasses, exercise minutes)
const MAX_COUNT: i64 = 100_000;

/// Largest accepted activity duration in minutes
const MAX_DURATION: i64 = 100_000;

/// Use the flag value when given, prompt otherwise
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Like `value_or_prompt`, but the prompt accepts an empty answer
pub fn optional_or_prompt(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Ok(Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

/// `YYYY-MM-DD`, today when absent
pub fn date(value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        None | Some("") => Ok(today()),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => Ok(d.format("%Y-%m-%d").to_string()),
            Err(_) => bail!("Invalid date: {}. Use YYYY-MM-DD", raw),
        },
    }
}

fn integer(raw: &str, field: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => bail!("{} must be a whole number", field),
    }
}

fn decimal(raw: &str, field: &str) -> Result<Decimal> {
    match raw.trim().parse::<Decimal>() {
        Ok(n) => Ok(n),
        Err(_) => bail!("{} must be a number", field),
    }
}

/// Integer from 1 to 10
pub fn mood(raw: &str) -> Result<String> {
    let n = integer(raw, "Mood")?;
    if !(1..=10).contains(&n) {
        bail!("Mood must be between 1 and 10");
    }
    Ok(n.to_string())
}

/// Hours, at least 0, in steps of 0.5
pub fn sleep(raw: &str) -> Result<String> {
    let hours = decimal(raw, "Sleep")?;
    if hours.is_sign_negative() && !hours.is_zero() {
        bail!("Sleep cannot be negative");
    }
    let Some(half_hours) = hours.checked_mul(Decimal::TWO) else {
        bail!("Sleep is too large");
    };
    if !half_hours.fract().is_zero() {
        bail!("Sleep must be in steps of 0.5 hours");
    }
    Ok(hours.normalize().to_string())
}

/// Whole number, at least 0 (water glasses, exercise minutes)
pub fn count(raw: &str, field: &str) -> Result<String> {
    let n = integer(raw, field)?;
    if n < 0 {
        bail!("{} cannot be negative", field);
    }
    if n > MAX_COUNT {
        bail!("{} cannot be more than {}", field, MAX_COUNT);
    }
    Ok(n.to_string())
}

/// Money, at least 0, at most two decimals
pub fn amount(raw: &str) -> Result<String> {
    let value = decimal(raw, "Amount")?;
    if value.is_sign_negative() && !value.is_zero() {
        bail!("Amount cannot be negative");
    }
    if value > Decimal::from(MAX_AMOUNT) {
        bail!("Amount cannot be more than {}", MAX_AMOUNT);
    }
    if value.scale() > 2 && value.round_dp(2) != value {
        bail!("Amount can have at most two decimals");
    }
    Ok(raw.trim().to_string())
}

/// Minutes, at least 1
pub fn duration(raw: &str) -> Result<String> {
    let n = integer(raw, "Duration")?;
    if n < 1 {
        bail!("Duration must be at least 1 minute");
    }
    if n > MAX_DURATION {
        bail!("Duration cannot be more than {} minutes", MAX_DURATION);
    }
    Ok(n.to_string())
}

/// Non-empty free text
pub fn required(raw: &str, field: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("{} is required", field);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        assert_eq!(date(Some("2024-02-29")).unwrap(), "2024-02-29");
        assert_eq!(date(None).unwrap(), today());
        assert!(date(Some("2023-02-29")).is_err());
        assert!(date(Some("29/02/2024")).is_err());
    }

    #[test]
    fn test_mood_range() {
        assert_eq!(mood(" 7 ").unwrap(), "7");
        assert!(mood("0").is_err());
        assert!(mood("11").is_err());
        assert!(mood("7.5").is_err());
    }

    #[test]
    fn test_sleep_steps() {
        assert_eq!(sleep("7.5").unwrap(), "7.5");
        assert_eq!(sleep("8.0").unwrap(), "8");
        assert!(sleep("7.25").is_err());
        assert!(sleep("-1").is_err());
        assert!(sleep("79228162514264337593543950335").is_err());
    }

    #[test]
    fn test_amount_and_duration() {
        assert_eq!(amount("12.50").unwrap(), "12.50");
        assert!(amount("-3").is_err());
        assert!(amount("1.005").is_err());
        assert_eq!(duration("30").unwrap(), "30");
        assert!(duration("0").is_err());
        assert!(duration("100001").is_err());
        assert!(amount("1000000000").is_ok());
        assert!(amount("79228162514264337593543950335").is_err());
    }

    #[test]
    fn test_count_and_required() {
        assert_eq!(count("0", "Water").unwrap(), "0");
        assert!(count("-2", "Water").is_err());
        assert!(count("9223372036854775807", "Exercise").is_err());
        assert!(required("   ", "Name").is_err());
        assert_eq!(required(" Run ", "Name").unwrap(), "Run");
    }
}
