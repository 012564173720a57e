//! Budget bookkeeping and the budget-vs-spent comparison.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::ledger::{BudgetKey, BudgetRecord, Ledger};

use super::ServiceResult;

/// Summed budget and spending for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budget_amount: f64,
    pub spent: f64,
    /// Currencies of the grouped records; amounts are not converted.
    pub currencies: Vec<CurrencyCode>,
}

impl BudgetComparison {
    pub fn remaining(&self) -> f64 {
        self.budget_amount - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget_amount
    }
}

/// Stateless budgeting helpers operating on a [`Ledger`].
pub struct BudgetService;

impl BudgetService {
    pub fn add(ledger: &mut Ledger, budget: BudgetRecord) -> ServiceResult<Uuid> {
        ledger.add_budget(budget)
    }

    /// Records spending against the budget keyed by `(category, date, currency)`.
    pub fn record_spending(
        ledger: &mut Ledger,
        category: &str,
        date: NaiveDate,
        currency: CurrencyCode,
        amount: f64,
    ) -> ServiceResult<f64> {
        let key = BudgetKey::new(category, date, currency);
        ledger.record_spending(&key, amount)
    }

    pub fn list(ledger: &Ledger) -> Vec<&BudgetRecord> {
        ledger.budgets().iter().collect()
    }

    /// Groups budgets by category, in order of first appearance.
    pub fn budget_vs_spent(records: &[BudgetRecord]) -> Vec<BudgetComparison> {
        let mut groups: Vec<BudgetComparison> = Vec::new();
        for record in records {
            let index = match groups
                .iter()
                .position(|group| group.category == record.category)
            {
                Some(index) => index,
                None => {
                    groups.push(BudgetComparison {
                        category: record.category.clone(),
                        budget_amount: 0.0,
                        spent: 0.0,
                        currencies: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[index];
            group.budget_amount += record.budget_amount;
            group.spent += record.spent();
            if !group.currencies.contains(&record.currency) {
                group.currencies.push(record.currency);
            }
        }
        groups
    }
}
