use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::errors::{ensure_amount, LedgerError, LedgerResult};

/// Natural key of a budget: category, date and currency together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BudgetKey {
    pub category: String,
    pub date: NaiveDate,
    pub currency: CurrencyCode,
}

impl BudgetKey {
    pub fn new(category: impl Into<String>, date: NaiveDate, currency: CurrencyCode) -> Self {
        Self {
            category: category.into(),
            date,
            currency,
        }
    }
}

impl fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.category, self.date, self.currency)
    }
}

/// A spending allowance for one category. `spent` may exceed the budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRecord {
    pub id: Uuid,
    pub category: String,
    pub budget_amount: f64,
    pub currency: CurrencyCode,
    pub date: NaiveDate,
    #[serde(default)]
    pub(crate) spent: f64,
}

impl BudgetRecord {
    pub fn new(
        category: impl Into<String>,
        budget_amount: f64,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            budget_amount,
            currency,
            date,
            spent: 0.0,
        }
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    pub fn remaining(&self) -> f64 {
        self.budget_amount - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget_amount
    }

    pub fn key(&self) -> BudgetKey {
        BudgetKey::new(self.category.clone(), self.date, self.currency)
    }

    pub fn matches(&self, key: &BudgetKey) -> bool {
        self.category == key.category && self.date == key.date && self.currency == key.currency
    }

    pub fn validate(&self) -> LedgerResult<()> {
        ensure_amount("budget amount", self.budget_amount)
    }

    /// Adds `amount` to `spent`; a total that would overflow leaves the record untouched.
    pub(crate) fn add_spending(&mut self, amount: f64) -> LedgerResult<f64> {
        let spent = self.spent + amount;
        if !spent.is_finite() {
            return Err(LedgerError::Validation(format!(
                "spent total for `{}` overflows",
                self.key()
            )));
        }
        self.spent = spent;
        Ok(spent)
    }
}
