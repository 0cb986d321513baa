//! Month display formatting
//!
//! Renders a month's incomes, categories and totals as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryGroup, IncomeRecord};
use crate::reports::MonthSummary;

/// Format an amount with two decimals and the currency code
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Income")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Total")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the incomes of a month as a table
pub fn format_income_table(incomes: &[IncomeRecord], currency: &str) -> String {
    if incomes.is_empty() {
        return "No incomes recorded.".to_string();
    }

    let rows = incomes.iter().map(|i| IncomeRow {
        description: i.description.clone(),
        amount: format_amount(i.amount, currency),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the categories of a month as a table
///
/// Each expense record becomes its own row; a category without records is
/// shown once with empty amounts.
pub fn format_category_table(
    categories: &[Category],
    groups: &[CategoryGroup],
    currency: &str,
) -> String {
    if categories.is_empty() {
        return "No categories recorded.".to_string();
    }

    let group_name = |group_id: &str| {
        groups
            .iter()
            .find(|g| g.group_id == group_id)
            .map(|g| g.group_name.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut rows = Vec::new();
    for category in categories {
        if category.expense.is_empty() {
            rows.push(CategoryRow {
                group: group_name(&category.group_id),
                name: category.category_name.clone(),
                budget: "-".into(),
                spent: "-".into(),
                status: String::new(),
                notes: String::new(),
            });
        }
        for record in category.expense.values() {
            rows.push(CategoryRow {
                group: group_name(&category.group_id),
                name: category.category_name.clone(),
                budget: format_amount(record.budget, currency),
                spent: format_amount(record.amount, currency),
                status: record.status.clone(),
                notes: record.notes.clone(),
            });
        }
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the month totals as a table
pub fn format_summary_table(summary: &MonthSummary, currency: &str) -> String {
    let rows = vec![
        TotalRow {
            label: "Income",
            amount: format_amount(summary.total_income, currency),
        },
        TotalRow {
            label: "Budgeted",
            amount: format_amount(summary.total_budget, currency),
        },
        TotalRow {
            label: "Spent",
            amount: format_amount(summary.total_spent, currency),
        },
        TotalRow {
            label: "Unpaid",
            amount: format_amount(summary.total_unpaid, currency),
        },
        TotalRow {
            label: "Remaining",
            amount: format_amount(summary.remaining(), currency),
        },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}
