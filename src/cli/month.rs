//! Month CLI commands
//!
//! Listing months, showing one month, and carrying categories forward.

use crate::display::{format_category_table, format_income_table, format_summary_table};
use crate::error::GocostResult;
use crate::models::MonthKey;
use crate::reports::generate_month_summary;
use crate::services::{CategoryService, GroupService, IncomeService};
use crate::storage::Repository;

/// Month key to use when none was given on the command line
pub fn month_or_current(month: Option<String>) -> String {
    month.unwrap_or_else(|| MonthKey::current().to_string())
}

/// Print every month key that has a record
pub fn handle_months(repository: &Repository) -> GocostResult<()> {
    let months = repository.month_keys()?;
    if months.is_empty() {
        println!("No months recorded yet.");
        return Ok(());
    }

    // Chronological when the key parses, otherwise after the rest
    let mut sorted: Vec<_> = months
        .into_iter()
        .map(|key| (MonthKey::parse(&key), key))
        .collect();
    sorted.sort_by(|a, b| match (&a.0, &b.0) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.1.cmp(&b.1),
    });

    for (_, key) in sorted {
        println!("{}", key);
    }
    Ok(())
}

/// Print incomes, categories and totals for a month
pub fn handle_show(repository: &Repository, month_key: &str) -> GocostResult<()> {
    let currency = repository.default_currency()?;
    let groups = GroupService::new(repository).get_all_groups()?;
    let incomes = IncomeService::new(repository).get_incomes_for_month(month_key)?;
    let categories = CategoryService::new(repository).get_categories_for_month(month_key)?;
    let summary = generate_month_summary(repository, month_key)?;

    println!("{}", month_key);
    println!();
    println!("{}", format_income_table(&incomes, &currency));
    println!();
    println!("{}", format_category_table(&categories, &groups, &currency));
    println!();
    println!("{}", format_summary_table(&summary, &currency));
    Ok(())
}

/// Copy categories from one month to another
pub fn handle_copy_categories(repository: &Repository, from: &str, to: &str) -> GocostResult<()> {
    let count = CategoryService::new(repository).copy_categories_from_month(from, to)?;
    println!("Copied {} categories from {} to {}", count, from, to);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_or_current() {
        assert_eq!(month_or_current(Some("May-2024".into())), "May-2024");
        assert_eq!(month_or_current(None), MonthKey::current().to_string());
    }
}
