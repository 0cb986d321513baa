//! Root document and monthly records
//!
//! [`DocumentRoot`] is exactly what lives on disk: one JSON object with
//! `defaultCurrency`, `CategoryGroups` and `monthlyData`. Maps are
//! `BTreeMap`s so the file is written with stable key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::group::CategoryGroup;
use super::income::IncomeRecord;

/// Incomes and categories belonging to one month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub incomes: Vec<IncomeRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl MonthlyRecord {
    /// Whether the month holds neither incomes nor categories
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.categories.is_empty()
    }
}

/// The complete persisted state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRoot {
    /// Informational currency code
    #[serde(rename = "defaultCurrency", default)]
    pub default_currency: String,

    /// Category groups by `group_id`
    #[serde(rename = "CategoryGroups", default, deserialize_with = "null_as_default")]
    pub groups: BTreeMap<String, CategoryGroup>,

    /// Monthly records by month key
    #[serde(rename = "monthlyData", default, deserialize_with = "null_as_default")]
    pub monthly: BTreeMap<String, MonthlyRecord>,
}

impl DocumentRoot {
    /// Create an empty document for the given currency
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
            groups: BTreeMap::new(),
            monthly: BTreeMap::new(),
        }
    }

    /// Find the first month holding a category that references `group_id`
    pub fn first_month_referencing(&self, group_id: &str) -> Option<&str> {
        self.monthly
            .iter()
            .find(|(_, record)| record.categories.iter().any(|c| c.group_id == group_id))
            .map(|(month_key, _)| month_key.as_str())
    }

    /// Describe the first NaN or infinite amount, if any
    ///
    /// JSON has no encoding for these; serde_json writes them as `null`,
    /// which does not read back as `f64`.
    pub fn first_non_finite(&self) -> Option<String> {
        for (month_key, record) in &self.monthly {
            if let Some(income) = record.incomes.iter().find(|i| !i.amount.is_finite()) {
                return Some(format!(
                    "non-finite amount in income {} ({})",
                    income.income_id, month_key
                ));
            }
            for category in &record.categories {
                for (key, expense) in &category.expense {
                    let field = if !expense.budget.is_finite() {
                        "budget"
                    } else if !expense.amount.is_finite() {
                        "amount"
                    } else {
                        continue;
                    };
                    return Some(format!(
                        "non-finite {} in category {} expense {} ({})",
                        field, category.category_id, key, month_key
                    ));
                }
            }
        }
        None
    }
}

/// Deserialize a JSON `null` as the type's default value
///
/// Documents written by older versions encode empty maps and lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
