//! Month Summary Report
//!
//! Totals for one month: income, budgeted, spent and unpaid amounts, with a
//! rollup per category group.

use crate::error::GocostResult;
use crate::models::{Category, CategoryGroup, IncomeRecord};
use crate::services::{CategoryService, GroupService, IncomeService};
use crate::storage::Repository;

/// Label used for categories whose group no longer exists
pub const UNGROUPED: &str = "Ungrouped";

/// Budget and spending for one category group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub group_id: String,
    pub group_name: String,
    pub order: i32,
    pub budget: f64,
    pub spent: f64,
}

impl GroupTotals {
    fn new(group_id: &str, group: Option<&CategoryGroup>) -> Self {
        Self {
            group_id: group_id.to_string(),
            group_name: group
                .map(|g| g.group_name.clone())
                .unwrap_or_else(|| UNGROUPED.to_string()),
            order: group.map(|g| g.order).unwrap_or(i32::MAX),
            budget: 0.0,
            spent: 0.0,
        }
    }

    /// Budget left in this group
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}

/// Totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month_key: String,
    pub total_income: f64,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Sum of amounts whose status is not "paid"
    pub total_unpaid: f64,
    pub groups: Vec<GroupTotals>,
}

impl MonthSummary {
    /// Compute the summary from already-loaded data
    pub fn build(
        month_key: &str,
        groups: &[CategoryGroup],
        incomes: &[IncomeRecord],
        categories: &[Category],
    ) -> Self {
        let mut summary = Self {
            month_key: month_key.to_string(),
            total_income: incomes.iter().map(|i| i.amount).sum(),
            total_budget: 0.0,
            total_spent: 0.0,
            total_unpaid: 0.0,
            groups: Vec::new(),
        };

        for category in categories {
            let index = match summary
                .groups
                .iter()
                .position(|g| g.group_id == category.group_id)
            {
                Some(index) => index,
                None => {
                    let group = groups.iter().find(|g| g.group_id == category.group_id);
                    summary
                        .groups
                        .push(GroupTotals::new(&category.group_id, group));
                    summary.groups.len() - 1
                }
            };

            for record in category.expense.values() {
                summary.groups[index].budget += record.budget;
                summary.groups[index].spent += record.amount;
                summary.total_budget += record.budget;
                summary.total_spent += record.amount;
                if !record.is_paid() {
                    summary.total_unpaid += record.amount;
                }
            }
        }

        summary.groups.sort_by_key(|g| g.order);
        summary
    }

    /// Income left after spending (negative when overspent)
    pub fn remaining(&self) -> f64 {
        self.total_income - self.total_spent
    }

    /// Income not yet assigned to a budget
    pub fn unbudgeted(&self) -> f64 {
        self.total_income - self.total_budget
    }
}

/// Generate the summary for `month_key` from the repository
pub fn generate(repository: &Repository, month_key: &str) -> GocostResult<MonthSummary> {
    let groups = GroupService::new(repository).get_all_groups()?;
    let incomes = IncomeService::new(repository).get_incomes_for_month(month_key)?;
    let categories = CategoryService::new(repository).get_categories_for_month(month_key)?;
    Ok(MonthSummary::build(month_key, &groups, &incomes, &categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, STATUS_NOT_PAID, STATUS_PAID};

    const MAY: &str = "May-2024";

    fn category(id: &str, group_id: &str, budget: f64, amount: f64, status: &str) -> Category {
        let mut category = Category::new(id, group_id, id);
        category.set_expense(MAY, ExpenseRecord::new(budget, amount, status, ""));
        category
    }

    #[test]
    fn test_empty_month() {
        let summary = MonthSummary::build(MAY, &[], &[], &[]);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_spent, 0.0);
        assert!(summary.groups.is_empty());
    }

    #[test]
    fn test_totals() {
        let groups = vec![
            CategoryGroup::new("g2", "Housing", 2),
            CategoryGroup::new("g1", "Utilities", 1),
        ];
        let incomes = vec![
            IncomeRecord::new("i1", "Salary", 5000.0),
            IncomeRecord::new("i2", "Freelance", 1000.0),
        ];
        let categories = vec![
            category("rent", "g2", 1500.0, 1500.0, STATUS_PAID),
            category("power", "g1", 200.0, 180.0, STATUS_NOT_PAID),
            category("water", "g1", 50.0, 40.0, STATUS_PAID),
            Category::new("fresh", "g1", "No expense yet"),
        ];

        let summary = MonthSummary::build(MAY, &groups, &incomes, &categories);

        assert_eq!(summary.total_income, 6000.0);
        assert_eq!(summary.total_budget, 1750.0);
        assert_eq!(summary.total_spent, 1720.0);
        assert_eq!(summary.total_unpaid, 180.0);
        assert_eq!(summary.remaining(), 4280.0);
        assert_eq!(summary.unbudgeted(), 4250.0);

        let names: Vec<_> = summary.groups.iter().map(|g| g.group_name.as_str()).collect();
        assert_eq!(names, vec!["Utilities", "Housing"]);
        assert_eq!(summary.groups[0].budget, 250.0);
        assert_eq!(summary.groups[0].remaining(), 30.0);
    }

    #[test]
    fn test_missing_group_is_ungrouped_and_last() {
        let groups = vec![CategoryGroup::new("g1", "Utilities", 1)];
        let categories = vec![
            category("orphan", "gone", 10.0, 10.0, STATUS_PAID),
            category("power", "g1", 200.0, 180.0, STATUS_PAID),
        ];

        let summary = MonthSummary::build(MAY, &groups, &[], &categories);
        assert_eq!(summary.groups.len(), 2);
        assert_eq!(summary.groups[1].group_name, UNGROUPED);
    }
}
