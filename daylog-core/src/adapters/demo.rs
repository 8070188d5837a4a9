//! Demo data for demo mode
//!
//! Generates 30 days of sample records ending at `today`, oldest first so
//! list order matches entry order:
//! - one wellness entry per day
//! - recurring and day-to-day expenses
//! - weekday work, regular exercise and weekend leisure

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::{Activity, DailyEntry, Expense};

pub const DEMO_DAYS: i64 = 30;

fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Dates covered by the demo, oldest first
fn demo_dates(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..DEMO_DAYS).rev().map(move |days_ago| today - Duration::days(days_ago))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generate daily wellness entries
pub fn generate_demo_daily_entries(today: NaiveDate) -> Vec<DailyEntry> {
    demo_dates(today)
        .map(|date| {
            let day = date.ordinal() as i64;
            let weekend = is_weekend(date);

            let mut entry = DailyEntry::new(date_string(date));
            entry.id = Uuid::new_v4();
            // Mood drifts between 5 and 9, a bit higher on weekends
            entry.mood = (5 + day % 4 + i64::from(weekend)).to_string();
            entry.sleep = if weekend { "8.5" } else { ["6.5", "7", "7.5"][(day % 3) as usize] }.to_string();
            entry.water_intake = (5 + day % 4).to_string();
            entry.exercise = match day % 3 {
                0 => "0",
                1 => "30",
                _ => "45",
            }
            .to_string();
            if date.weekday() == Weekday::Mon {
                entry.notes = "Planned the week".to_string();
            }
            entry
        })
        .collect()
}

/// Generate expenses
pub fn generate_demo_expenses(today: NaiveDate) -> Vec<Expense> {
    let mut expenses = Vec::new();

    for date in demo_dates(today) {
        let d = date_string(date);

        // Rent on the 1st
        if date.day() == 1 {
            expenses.push(demo_expense(&d, "Housing", "950.00", "Rent"));
        }

        // Utilities on the 10th
        if date.day() == 10 {
            expenses.push(demo_expense(&d, "Utilities", "64.20", "Electricity"));
            expenses.push(demo_expense(&d, "Utilities", "30.00", "Internet"));
        }

        // Groceries twice a week
        match date.weekday() {
            Weekday::Mon => expenses.push(demo_expense(&d, "Food", "42.35", "Groceries")),
            Weekday::Thu => expenses.push(demo_expense(&d, "Food", "27.80", "Groceries")),
            _ => {}
        }

        // Commute on weekdays, outings on Saturdays
        if !is_weekend(date) {
            expenses.push(demo_expense(&d, "Transportation", "2.75", "Metro"));
        } else if date.weekday() == Weekday::Sat {
            expenses.push(demo_expense(&d, "Entertainment", "18.00", "Cinema"));
        }

        if date.day() == 20 {
            expenses.push(demo_expense(&d, "Healthcare", "15.50", "Pharmacy"));
        }
    }

    expenses
}

fn demo_expense(date: &str, category: &str, amount: &str, description: &str) -> Expense {
    let mut expense = Expense::new(date, category, amount, description);
    expense.id = Uuid::new_v4();
    expense
}

/// Generate activities
pub fn generate_demo_activities(today: NaiveDate) -> Vec<Activity> {
    let mut activities = Vec::new();

    for date in demo_dates(today) {
        let d = date_string(date);

        match date.weekday() {
            Weekday::Sat => {
                activities.push(demo_activity(&d, "Hiking", "Exercise", "120", "Trail loop"));
                activities.push(demo_activity(&d, "Dinner with friends", "Social", "150", ""));
            }
            Weekday::Sun => {
                activities.push(demo_activity(&d, "Cleaning", "Chores", "60", ""));
                activities.push(demo_activity(&d, "Reading", "Leisure", "90", ""));
            }
            weekday => {
                activities.push(demo_activity(&d, "Work", "Work", "480", ""));
                if matches!(weekday, Weekday::Tue | Weekday::Thu) {
                    activities.push(demo_activity(&d, "Running", "Exercise", "40", "5 km"));
                }
                if weekday == Weekday::Wed {
                    activities.push(demo_activity(&d, "Spanish lesson", "Study", "60", ""));
                }
            }
        }
    }

    activities
}

fn demo_activity(date: &str, name: &str, category: &str, duration: &str, notes: &str) -> Activity {
    let mut activity = Activity::new(date, name, category, duration, notes);
    activity.id = Uuid::new_v4();
    activity
}
