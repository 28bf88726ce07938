use anyhow::Result;
use tracing::warn;

use crate::error::{BudgetError, DecodeError};
use crate::model::budget::{BudgetField, BudgetRecord};
use crate::repository::LifestyleRepository;
use crate::service::dto::BudgetSummary;

pub struct BudgetService<R: LifestyleRepository> {
    repo: R,
    budget: BudgetRecord,
}

impl<R: LifestyleRepository> BudgetService<R> {
    /// Loads every field independently; anything missing or unreadable is 0.
    pub fn load(repo: R) -> Self {
        let mut budget = BudgetRecord::default();
        for field in BudgetField::ALL {
            match repo.load_budget_field(field) {
                Ok(value) => budget.set(field, value),
                Err(DecodeError::Missing { .. }) => {}
                Err(e) => warn!(error = %e, "budget field unreadable, using 0"),
            }
        }
        Self { repo, budget }
    }

    pub fn budget(&self) -> &BudgetRecord {
        &self.budget
    }

    /// Sets one field in memory. Non-finite values are rejected and the
    /// budget is left unchanged.
    pub fn update(&mut self, field: BudgetField, value: f64) -> Result<(), BudgetError> {
        if !value.is_finite() {
            return Err(BudgetError::NotFinite { field: field.label(), value });
        }
        self.budget.set(field, value);
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.repo.save_budget(&self.budget)
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_record(&self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::budget::MonthsToSurvive;
    use crate::repository::{BlobStore, MemoryBlobStore, StoreRepository};

    #[test]
    fn test_update_save_reload() {
        let store = MemoryBlobStore::new();
        let mut service = BudgetService::load(StoreRepository::new(store.clone()));
        assert_eq!(*service.budget(), BudgetRecord::default());

        service.update(BudgetField::MonthlyIncome, 5000.0).unwrap();
        service.update(BudgetField::GrocerySpending, 300.0).unwrap();
        service.update(BudgetField::UtilitiesSpending, 150.0).unwrap();
        service.update(BudgetField::ActivitiesSpending, 100.0).unwrap();
        service.save().unwrap();

        let reloaded = BudgetService::load(StoreRepository::new(store));
        assert_eq!(reloaded.summary().net_income, 4450.0);
        assert_eq!(reloaded.summary().months_to_survive, MonthsToSurvive::NotApplicable);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let store = MemoryBlobStore::new();
        let mut service = BudgetService::load(StoreRepository::new(store.clone()));
        service.update(BudgetField::GrocerySpending, 300.0).unwrap();

        let err = service.update(BudgetField::GrocerySpending, f64::NAN).unwrap_err();
        assert!(matches!(err, BudgetError::NotFinite { field: "Grocery spending", value } if value.is_nan()));
        assert_eq!(
            service.update(BudgetField::SavingsAmount, f64::INFINITY),
            Err(BudgetError::NotFinite { field: "Savings", value: f64::INFINITY })
        );
        assert!(service.update(BudgetField::CreditAmount, f64::NEG_INFINITY).is_err());

        // The rejected values never reach the record, so the metrics and the
        // stored copy both keep the last good amounts.
        assert_eq!(service.budget().grocery_spending, 300.0);
        assert_eq!(service.budget().savings_amount, 0.0);
        assert_eq!(service.summary().months_to_survive, MonthsToSurvive::InsufficientFunds);

        service.save().unwrap();
        let reloaded = BudgetService::load(StoreRepository::new(store));
        assert_eq!(reloaded.budget().grocery_spending, 300.0);
    }

    #[test]
    fn test_corrupt_field_reads_as_zero() {
        let store = MemoryBlobStore::new();
        store.put("savingsAmount", b"\"lots\"").unwrap();
        store.put("debitAccountAmount", b"120.5").unwrap();
        let service = BudgetService::load(StoreRepository::new(store));
        assert_eq!(service.budget().savings_amount, 0.0);
        assert_eq!(service.budget().debit_account_amount, 120.5);
    }
}
