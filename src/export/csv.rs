//! CSV Export functionality
//!
//! One row per expense record, spreadsheet-compatible. Categories without
//! records still get a row with empty amounts so nothing silently vanishes.

use std::io::Write;

use crate::error::{GocostError, GocostResult};
use crate::storage::Repository;

use super::json::scoped_document;

const HEADER: [&str; 8] = [
    "Month", "Group", "Category", "Key", "Budget", "Amount", "Status", "Notes",
];

/// Export expense records (optionally for one month) to CSV
pub fn export_expenses_csv<W: Write>(
    repository: &Repository,
    month: Option<&str>,
    writer: W,
) -> GocostResult<()> {
    let document = scoped_document(repository, month)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_error)?;

    for (month_key, record) in &document.monthly {
        for category in &record.categories {
            let group_name = document
                .groups
                .get(&category.group_id)
                .map(|g| g.group_name.as_str())
                .unwrap_or("");

            if category.expense.is_empty() {
                csv_writer
                    .write_record([
                        month_key.as_str(),
                        group_name,
                        category.category_name.as_str(),
                        "",
                        "",
                        "",
                        "",
                        "",
                    ])
                    .map_err(export_error)?;
            }

            for (key, expense) in &category.expense {
                let budget = format!("{:.2}", expense.budget);
                let amount = format!("{:.2}", expense.amount);
                csv_writer
                    .write_record([
                        month_key.as_str(),
                        group_name,
                        category.category_name.as_str(),
                        key.as_str(),
                        budget.as_str(),
                        amount.as_str(),
                        expense.status.as_str(),
                        expense.notes.as_str(),
                    ])
                    .map_err(export_error)?;
            }
        }
    }

    csv_writer.flush().map_err(|e| GocostError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(err: csv::Error) -> GocostError {
    GocostError::Export(err.to_string())
}
