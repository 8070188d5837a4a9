//! Daily wellness entry

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{coerce_decimal, coerce_int, parse_leading_int, string_or_number, Record};

/// One day's wellness log, stored under `dailyData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: String,
    /// 1-10
    #[serde(default, deserialize_with = "string_or_number")]
    pub mood: String,
    /// Hours, in steps of 0.5
    #[serde(default, deserialize_with = "string_or_number")]
    pub sleep: String,
    /// Glasses of water
    #[serde(default, deserialize_with = "string_or_number")]
    pub water_intake: String,
    /// Minutes
    #[serde(default, deserialize_with = "string_or_number")]
    pub exercise: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub notes: String,
}

impl DailyEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            date: date.into(),
            mood: String::new(),
            sleep: String::new(),
            water_intake: String::new(),
            exercise: String::new(),
            notes: String::new(),
        }
    }

    /// Mood score, if one was entered
    pub fn mood_value(&self) -> Option<i64> {
        if self.mood.trim().is_empty() {
            return None;
        }
        parse_leading_int(&self.mood)
    }

    pub fn sleep_hours(&self) -> Decimal {
        coerce_decimal(&self.sleep)
    }

    pub fn water_glasses(&self) -> i64 {
        coerce_int(&self.water_intake)
    }

    pub fn exercise_minutes(&self) -> i64 {
        coerce_int(&self.exercise)
    }
}

impl Record for DailyEntry {
    const STORAGE_KEY: &'static str = "dailyData";

    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_storage_shape() {
        let mut entry = DailyEntry::new("2024-05-01");
        entry.water_intake = "6".to_string();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["waterIntake"], "6");
        assert!(json.get("water_intake").is_none());
    }

    #[test]
    fn test_numeric_views() {
        let entry: DailyEntry = serde_json::from_str(
            r#"{"date":"2024-05-01","mood":"8","sleep":"7.5","waterIntake":6,"exercise":"","notes":"ok"}"#,
        )
        .unwrap();
        assert_eq!(entry.mood_value(), Some(8));
        assert_eq!(entry.sleep_hours(), Decimal::new(75, 1));
        assert_eq!(entry.water_glasses(), 6);
        assert_eq!(entry.exercise_minutes(), 0);
    }

    #[test]
    fn test_missing_mood() {
        let entry = DailyEntry::new("2024-05-01");
        assert_eq!(entry.mood_value(), None);
    }
}
