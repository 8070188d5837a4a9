//! Expense domain model

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preferences::Language;
use super::record::{coerce_decimal, string_or_number, Categorized, Record};
use super::result::Error;

/// A single expense, stored under `expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Missing in data written before ids existed; assigned on load
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub description: String,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Amount as money; unparseable amounts count as zero
    pub fn amount_value(&self) -> Decimal {
        coerce_decimal(&self.amount)
    }

    pub fn category_kind(&self) -> Option<ExpenseCategory> {
        self.category.parse().ok()
    }
}

impl Record for Expense {
    const STORAGE_KEY: &'static str = "expenses";

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

impl Categorized for Expense {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Housing,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Travel,
    #[serde(rename = "Gifts/Donations")]
    GiftsDonations,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Food,
        ExpenseCategory::Housing,
        ExpenseCategory::Transportation,
        ExpenseCategory::Utilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::PersonalCare,
        ExpenseCategory::Travel,
        ExpenseCategory::GiftsDonations,
        ExpenseCategory::Other,
    ];

    /// Stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::PersonalCare => "Personal Care",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::GiftsDonations => "Gifts/Donations",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.as_str(),
            Language::Ru => match self {
                ExpenseCategory::Food => "Еда",
                ExpenseCategory::Housing => "Жилье",
                ExpenseCategory::Transportation => "Транспорт",
                ExpenseCategory::Utilities => "Коммунальные услуги",
                ExpenseCategory::Entertainment => "Развлечения",
                ExpenseCategory::Shopping => "Покупки",
                ExpenseCategory::Healthcare => "Здравоохранение",
                ExpenseCategory::Education => "Образование",
                ExpenseCategory::PersonalCare => "Личная гигиена",
                ExpenseCategory::Travel => "Путешествия",
                ExpenseCategory::GiftsDonations => "Подарки/Пожертвования",
                ExpenseCategory::Other => "Другое",
            },
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("Unknown expense category: {}", wanted)))
    }
}
