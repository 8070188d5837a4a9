//! Activity domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preferences::Language;
use super::record::{coerce_int, string_or_number, Categorized, Record};
use super::result::Error;

/// A logged activity, stored under `activities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub category: String,
    /// Minutes
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub notes: String,
}

impl Activity {
    pub fn new(
        date: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        duration: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            date: date.into(),
            name: name.into(),
            category: category.into(),
            duration: duration.into(),
            notes: notes.into(),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        coerce_int(&self.duration)
    }

    pub fn category_kind(&self) -> Option<ActivityCategory> {
        self.category.parse().ok()
    }
}

impl Record for Activity {
    const STORAGE_KEY: &'static str = "activities";

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

impl Categorized for Activity {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Fixed activity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    Exercise,
    Work,
    Study,
    Leisure,
    Social,
    Hobby,
    Family,
    Chores,
    #[serde(rename = "Self-care")]
    SelfCare,
    Other,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 10] = [
        ActivityCategory::Exercise,
        ActivityCategory::Work,
        ActivityCategory::Study,
        ActivityCategory::Leisure,
        ActivityCategory::Social,
        ActivityCategory::Hobby,
        ActivityCategory::Family,
        ActivityCategory::Chores,
        ActivityCategory::SelfCare,
        ActivityCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Exercise => "Exercise",
            ActivityCategory::Work => "Work",
            ActivityCategory::Study => "Study",
            ActivityCategory::Leisure => "Leisure",
            ActivityCategory::Social => "Social",
            ActivityCategory::Hobby => "Hobby",
            ActivityCategory::Family => "Family",
            ActivityCategory::Chores => "Chores",
            ActivityCategory::SelfCare => "Self-care",
            ActivityCategory::Other => "Other",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.as_str(),
            Language::Ru => match self {
                ActivityCategory::Exercise => "Упражнения",
                ActivityCategory::Work => "Работа",
                ActivityCategory::Study => "Учеба",
                ActivityCategory::Leisure => "Отдых",
                ActivityCategory::Social => "Общение",
                ActivityCategory::Hobby => "Хобби",
                ActivityCategory::Family => "Семья",
                ActivityCategory::Chores => "Домашние дела",
                ActivityCategory::SelfCare => "Забота о себе",
                ActivityCategory::Other => "Другое",
            },
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("Unknown activity category: {}", wanted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_coercion() {
        let activity = Activity::new("2024-03-02", "Run", "Exercise", "45", "");
        assert_eq!(activity.duration_minutes(), 45);

        let activity = Activity::new("2024-03-02", "Nap", "Self-care", "a while", "");
        assert_eq!(activity.duration_minutes(), 0);
        assert_eq!(activity.category_kind(), Some(ActivityCategory::SelfCare));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ActivityCategory::Chores.label(Language::Ru), "Домашние дела");
        assert_eq!(ActivityCategory::Chores.label(Language::En), "Chores");
    }
}
