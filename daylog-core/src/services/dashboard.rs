//! Dashboard service - read-only summary over the three trackers

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::domain::{Activity, DailyEntry, Expense};
use crate::services::records::{ActivityLog, DailyLog, ExpenseLog};

/// Mean mood over the entries that have one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodAverage {
    Available(Decimal),
    Unavailable,
}

impl MoodAverage {
    fn from_moods(moods: &[i64]) -> Self {
        if moods.is_empty() {
            return MoodAverage::Unavailable;
        }
        let sum = moods.iter().fold(0i64, |acc, m| acc.saturating_add(*m));
        let mean = Decimal::from(sum) / Decimal::from(moods.len() as i64);
        MoodAverage::Available(mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl std::fmt::Display for MoodAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodAverage::Available(value) => write!(f, "{:.1}", value),
            MoodAverage::Unavailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for MoodAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub daily_entries: usize,
    pub total_expenses: Decimal,
    pub average_mood: MoodAverage,
    pub total_exercise_minutes: i64,
    /// Last-added record of each list, not the most recent by date
    pub latest_daily: Option<DailyEntry>,
    pub latest_expense: Option<Expense>,
    pub latest_activity: Option<Activity>,
}

/// Build the dashboard summary
pub fn summarize(daily: &DailyLog, expenses: &ExpenseLog, activities: &ActivityLog) -> DashboardSummary {
    let moods: Vec<i64> = daily.records().iter().filter_map(|d| d.mood_value()).collect();
    let mut total_expenses: Decimal = expenses.total(|e| e.amount_value());
    total_expenses = total_expenses.round_dp(2);
    total_expenses.rescale(2);

    DashboardSummary {
        daily_entries: daily.len(),
        total_expenses,
        average_mood: MoodAverage::from_moods(&moods),
        total_exercise_minutes: daily.total(|d| d.exercise_minutes()),
        latest_daily: daily.latest().cloned(),
        latest_expense: expenses.latest().cloned(),
        latest_activity: activities.latest().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::MemoryStore;
    use crate::ports::Store;

    fn lists() -> (DailyLog, ExpenseLog, ActivityLog) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (
            DailyLog::load(Arc::clone(&store)).unwrap(),
            ExpenseLog::load(Arc::clone(&store)).unwrap(),
            ActivityLog::load(store).unwrap(),
        )
    }

    fn daily(mood: &str, exercise: &str) -> DailyEntry {
        let mut entry = DailyEntry::new("2024-03-01");
        entry.mood = mood.to_string();
        entry.exercise = exercise.to_string();
        entry
    }

    #[test]
    fn test_empty_dashboard() {
        let (d, e, a) = lists();
        let summary = summarize(&d, &e, &a);

        assert_eq!(summary.daily_entries, 0);
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert_eq!(summary.total_expenses.to_string(), "0.00");
        assert_eq!(summary.average_mood, MoodAverage::Unavailable);
        assert_eq!(summary.average_mood.to_string(), "N/A");
        assert!(summary.latest_daily.is_none());
    }

    #[test]
    fn test_mood_average_skips_missing() {
        let (mut d, e, a) = lists();
        d.add(daily("7", "30")).unwrap();
        d.add(daily("", "15")).unwrap();
        d.add(daily("8", "")).unwrap();
        d.add(daily("8", "0")).unwrap();

        let summary = summarize(&d, &e, &a);
        assert_eq!(summary.daily_entries, 4);
        assert_eq!(summary.average_mood.to_string(), "7.7");
        assert_eq!(summary.total_exercise_minutes, 45);
    }

    #[test]
    fn test_totals_and_latest() {
        let (d, mut e, mut a) = lists();
        e.add(Expense::new("2024-03-02", "Food", "12.50", "lunch")).unwrap();
        e.add(Expense::new("2024-03-01", "Travel", "7.5", "bus")).unwrap();
        a.add(Activity::new("2024-03-01", "Run", "Exercise", "30", "")).unwrap();

        let summary = summarize(&d, &e, &a);
        assert_eq!(summary.total_expenses.to_string(), "20.00");
        assert_eq!(summary.latest_expense.unwrap().description, "bus");
        assert_eq!(summary.latest_activity.unwrap().name, "Run");
    }

    #[test]
    fn test_serialized_mood() {
        let (d, e, a) = lists();
        let json = serde_json::to_value(summarize(&d, &e, &a)).unwrap();
        assert_eq!(json["average_mood"], "N/A");
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        let (mut d, mut e, a) = lists();
        e.add(Expense::new("2024-03-01", "Food", "79228162514264337593543950335", "")).unwrap();
        e.add(Expense::new("2024-03-01", "Food", "1", "")).unwrap();
        d.add(daily("9223372036854775807", "9223372036854775807")).unwrap();
        d.add(daily("9223372036854775807", "1")).unwrap();

        let summary = summarize(&d, &e, &a);
        assert_eq!(summary.total_expenses, Decimal::MAX);
        assert_eq!(summary.total_exercise_minutes, i64::MAX);
        assert!(matches!(summary.average_mood, MoodAverage::Available(_)));
    }
}
