//! Shared record behavior for the three trackers
//!
//! Records mirror the stored form data: every field is kept as the string
//! the user entered, and numeric views are derived on demand with lenient
//! coercion (anything unparseable counts as zero).

use chrono::Utc;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A record kept in one of the tracker lists
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Store key holding the whole list
    const STORAGE_KEY: &'static str;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    /// ISO date (YYYY-MM-DD) the record belongs to
    fn date(&self) -> &str;
}

/// Records that carry a category discriminator
pub trait Categorized: Record {
    fn category(&self) -> &str;
}

/// Today's date in the format stored by the trackers (UTC, like the original forms)
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Accept strings, numbers or null for a form field and keep it as a string
pub fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Leading decimal number of a field, zero if there is none
pub fn coerce_decimal(raw: &str) -> Decimal {
    parse_leading_decimal(raw).unwrap_or(Decimal::ZERO)
}

/// Leading integer of a field, zero if there is none
pub fn coerce_int(raw: &str) -> i64 {
    parse_leading_int(raw).unwrap_or(0)
}

/// Parse the numeric prefix of `raw` (`[+-]digits[.digits]`), ignoring trailing text
pub fn parse_leading_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    let number = s[..end].trim_end_matches('.');
    let number = number.strip_prefix('+').unwrap_or(number);
    number.parse::<Decimal>().ok()
}

/// Parse the integer prefix of `raw` (`[+-]digits`), ignoring trailing text
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let mut end = 0;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    s[..end].parse::<i64>().ok()
}
