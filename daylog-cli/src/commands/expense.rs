//! Expense command - spending log and category totals

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{Confirm, Select};
use rust_decimal::Decimal;

use super::input;
use super::{get_context, get_logger, log_event, require_login, resolve_record, short_id};
use crate::output;
use daylog_core::services::LogEvent;
use daylog_core::{Expense, ExpenseCategory, Language};

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        #[command(flatten)]
        fields: ExpenseFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List expenses
    List {
        /// Only this category
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change fields of an expense
    Edit {
        /// List position (1-based) or id prefix
        target: String,
        #[command(flatten)]
        fields: ExpenseFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an expense
    Remove {
        /// List position (1-based) or id prefix
        target: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show spending per category
    Totals {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ExpenseFields {
    /// Date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,
    /// One of the expense categories, e.g. Food or "Personal Care"
    #[arg(long)]
    category: Option<String>,
    /// Amount spent
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

fn category_or_prompt(category: Option<String>, lang: Language) -> Result<ExpenseCategory> {
    if let Some(c) = category {
        return Ok(c.parse()?);
    }
    let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label(lang)).collect();
    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ExpenseCategory::ALL[choice])
}

impl ExpenseFields {
    fn into_expense(self, lang: Language, interactive: bool) -> Result<Expense> {
        let date = input::date(self.date.as_deref())?;
        let category = category_or_prompt(self.category, lang)?;
        let amount = input::amount(&input::value_or_prompt(self.amount, "Amount")?)?;
        let description = input::optional_or_prompt(self.description, "Description", interactive)?;
        Ok(Expense::new(date, category.as_str(), amount, description))
    }

    fn apply(self, mut expense: Expense) -> Result<Expense> {
        if let Some(date) = self.date {
            expense.date = input::date(Some(&date))?;
        }
        if let Some(category) = self.category {
            expense.category = category.parse::<ExpenseCategory>()?.as_str().to_string();
        }
        if let Some(amount) = self.amount {
            expense.amount = input::amount(&amount)?;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
        Ok(expense)
    }

    fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none() && self.amount.is_none() && self.description.is_none()
    }
}

/// Category label in the chosen language; unknown stored values are shown as-is
fn category_label(expense: &Expense, lang: Language) -> String {
    match expense.category_kind() {
        Some(kind) => kind.label(lang).to_string(),
        None => expense.category.clone(),
    }
}

pub fn run(command: ExpenseCommands) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;
    require_login(&ctx)?;
    let lang = ctx.preferences.language()?;

    match command {
        ExpenseCommands::Add { fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("expense add"));
            let expense = fields.into_expense(lang, !json)?;
            let id = ctx.expenses.add(expense)?;

            if json {
                return output::json(&ctx.expenses.get(id));
            }
            output::success(&format!("Expense saved ({})", short_id(id)));
        }
        ExpenseCommands::List { category, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("expense list"));
            let filter = category.map(|c| c.parse::<ExpenseCategory>()).transpose()?;
            let expenses: Vec<(usize, &Expense)> = ctx
                .expenses
                .records()
                .iter()
                .enumerate()
                .filter(|(_, e)| filter.map_or(true, |c| e.category == c.as_str()))
                .collect();

            let total: Decimal = expenses.iter().map(|(_, e)| e.amount_value()).sum();

            if json {
                let records: Vec<&Expense> = expenses.iter().map(|(_, e)| *e).collect();
                return output::json(&records);
            }
            if expenses.is_empty() {
                println!("No expenses yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["#", "Id", "Date", "Category", "Amount", "Description"]);
            for (index, expense) in expenses {
                table.add_row(vec![
                    (index + 1).to_string(),
                    short_id(expense.id),
                    expense.date.clone(),
                    category_label(expense, lang),
                    format!("{:.2}", expense.amount_value()),
                    output::or_dash(&expense.description).to_string(),
                ]);
            }
            println!("{}", table);
            println!("Total: {:.2}", total);
        }
        ExpenseCommands::Edit { target, fields, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("expense edit"));
            if fields.is_empty() {
                anyhow::bail!("Nothing to change. Pass at least one field, e.g. --amount 12.50");
            }
            let id = resolve_record(&ctx.expenses, &target)?;
            let updated = match ctx.expenses.get(id).cloned() {
                Some(expense) => fields.apply(expense)?,
                None => anyhow::bail!("No expense with id {}", id),
            };
            ctx.expenses.update(id, updated)?;

            if json {
                return output::json(&ctx.expenses.get(id));
            }
            output::success(&format!("Expense {} updated", short_id(id)));
        }
        ExpenseCommands::Remove { target, force, json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("expense remove"));
            let id = resolve_record(&ctx.expenses, &target)?;

            if !force && !json {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete expense {}?", short_id(id)))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let removed = ctx.expenses.delete(id)?;
            if json {
                return output::json(&removed);
            }
            output::warning(&format!("Expense {} deleted", short_id(id)));
        }
        ExpenseCommands::Totals { json } => {
            log_event(&logger, LogEvent::new("command_executed").with_command("expense totals"));
            let totals = ctx
                .expenses
                .aggregate_by(|e| e.category.clone(), |e| e.amount_value());
            let total: Decimal = ctx.expenses.total(|e| e.amount_value());

            if json {
                return output::json(&serde_json::json!({
                    "categories": totals,
                    "total": total,
                }));
            }
            if totals.is_empty() {
                println!("No expenses yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Category", "Total"]);
            for group in &totals {
                let label = group
                    .key
                    .parse::<ExpenseCategory>()
                    .map(|c| c.label(lang).to_string())
                    .unwrap_or_else(|_| group.key.clone());
                table.add_row(vec![label, format!("{:.2}", group.total)]);
            }
            table.add_row(vec!["Total".to_string(), format!("{:.2}", total)]);
            println!("{}", table);
        }
    }

    Ok(())
}
