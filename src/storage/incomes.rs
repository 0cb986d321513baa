//! Per-month income operations

use crate::error::{GocostError, GocostResult};
use crate::models::IncomeRecord;

use super::repository::{month_mut, Repository};

impl Repository {
    /// Incomes for a month in insertion order; empty if the month is absent
    pub fn get_incomes_for_month(&self, month_key: &str) -> GocostResult<Vec<IncomeRecord>> {
        Ok(self
            .read()?
            .monthly
            .get(month_key)
            .map(|m| m.incomes.clone())
            .unwrap_or_default())
    }

    /// Append an income, creating the month record if absent
    pub fn add_income(&self, month_key: &str, income: IncomeRecord) -> GocostResult<()> {
        self.mutate("add_income", |document| {
            let month = document.monthly.entry(month_key.to_string()).or_default();
            if month
                .incomes
                .iter()
                .any(|i| i.income_id == income.income_id)
            {
                return Err(GocostError::income_exists(&income.income_id));
            }
            month.incomes.push(income);
            Ok(())
        })
    }

    /// Replace an income in place
    pub fn update_income(&self, month_key: &str, income: IncomeRecord) -> GocostResult<()> {
        self.mutate("update_income", |document| {
            let month = month_mut(document, month_key)?;
            let existing = month
                .incomes
                .iter_mut()
                .find(|i| i.income_id == income.income_id)
                .ok_or_else(|| GocostError::income_not_found(&income.income_id))?;
            *existing = income;
            Ok(())
        })
    }

    /// Remove an income
    pub fn delete_income(&self, month_key: &str, income_id: &str) -> GocostResult<()> {
        self.mutate("delete_income", |document| {
            let month = month_mut(document, month_key)?;
            let index = month
                .incomes
                .iter()
                .position(|i| i.income_id == income_id)
                .ok_or_else(|| GocostError::income_not_found(income_id))?;
            month.incomes.remove(index);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::repository::test_support::*;
    use crate::models::IncomeRecord;

    const JUNE: &str = "June-2024";

    #[test]
    fn test_absent_month_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.get_incomes_for_month(JUNE).unwrap().is_empty());
    }

    #[test]
    fn test_update_income_keeps_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        repo.add_income(JUNE, IncomeRecord::new("i2", "Freelance", 1000.0))
            .unwrap();
        repo.update_income(JUNE, IncomeRecord::new("i1", "Salary", 5500.0))
            .unwrap();

        let expected = vec![
            IncomeRecord::new("i1", "Salary", 5500.0),
            IncomeRecord::new("i2", "Freelance", 1000.0),
        ];
        assert_eq!(repo.get_incomes_for_month(JUNE).unwrap(), expected);
        assert_eq!(reopen(&repo).get_incomes_for_month(JUNE).unwrap(), expected);
    }

    #[test]
    fn test_add_duplicate_income() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();

        let err = repo
            .add_income(JUNE, IncomeRecord::new("i1", "Bonus", 10.0))
            .unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(repo.get_incomes_for_month(JUNE).unwrap().len(), 1);
    }

    #[test]
    fn test_same_income_id_in_other_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        repo.add_income("July-2024", IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
    }

    #[test]
    fn test_update_in_missing_month() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo
            .update_income(JUNE, IncomeRecord::new("i1", "Salary", 1.0))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(JUNE));
        assert!(repo.month_keys().unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_income() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        let err = repo
            .update_income(JUNE, IncomeRecord::new("i9", "Nope", 1.0))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_income() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        repo.add_income(JUNE, IncomeRecord::new("i2", "Freelance", 1000.0))
            .unwrap();
        repo.add_income(JUNE, IncomeRecord::new("i3", "Gift", 50.0))
            .unwrap();

        repo.delete_income(JUNE, "i2").unwrap();

        let ids: Vec<_> = repo
            .get_incomes_for_month(JUNE)
            .unwrap()
            .into_iter()
            .map(|i| i.income_id)
            .collect();
        assert_eq!(ids, vec!["i1", "i3"]);
        assert!(repo.delete_income(JUNE, "i2").unwrap_err().is_not_found());
        assert!(repo
            .delete_income("May-2024", "i1")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_returned_incomes_are_copies() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();

        let mut incomes = repo.get_incomes_for_month(JUNE).unwrap();
        incomes[0].amount = 1.0;

        assert_eq!(repo.get_incomes_for_month(JUNE).unwrap()[0].amount, 5000.0);
    }

    #[test]
    fn test_failed_add_does_not_create_month() {
        let (temp_dir, repo) = create_test_repo();
        break_storage(&temp_dir);

        let err = repo
            .add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap_err();
        assert!(err.is_io());
        assert!(repo.month_keys().unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_income_is_not_saved() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        let before = repo.snapshot().unwrap();

        let err = repo
            .add_income(JUNE, IncomeRecord::new("i2", "Bonus", f64::NAN))
            .unwrap_err();
        assert!(err.is_io());
        assert_eq!(repo.snapshot().unwrap(), before);

        let err = repo
            .update_income(JUNE, IncomeRecord::new("i1", "Salary", f64::INFINITY))
            .unwrap_err();
        assert!(err.is_io());
        assert_eq!(repo.snapshot().unwrap(), before);

        let reopened = reopen(&repo);
        assert_eq!(reopened.snapshot().unwrap(), before);
    }

    #[test]
    fn test_failed_update_rolls_back() {
        let (temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        let before = repo.snapshot().unwrap();

        break_storage(&temp_dir);
        let err = repo
            .update_income(JUNE, IncomeRecord::new("i1", "Salary", 6000.0))
            .unwrap_err();
        assert!(err.is_io());
        assert_eq!(repo.snapshot().unwrap(), before);
    }

    #[test]
    fn test_failed_delete_keeps_income() {
        let (temp_dir, repo) = create_test_repo();
        repo.add_income(JUNE, IncomeRecord::new("i1", "Salary", 5000.0))
            .unwrap();
        let before = repo.snapshot().unwrap();

        break_storage(&temp_dir);
        assert!(repo.delete_income(JUNE, "i1").unwrap_err().is_io());
        assert_eq!(repo.snapshot().unwrap(), before);
        assert_eq!(repo.get_incomes_for_month(JUNE).unwrap().len(), 1);
    }
}
