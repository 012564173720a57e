use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    budget::{BudgetKey, BudgetRecord},
    investment::InvestmentRecord,
};
use crate::errors::{ensure_amount, LedgerError, LedgerResult};

/// Session-scoped store of investment and budget records.
///
/// Investments are append-only. Budgets are append-only as well, except for
/// their `spent` figure which only [`Ledger::record_spending`] changes.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    investments: Vec<InvestmentRecord>,
    budgets: Vec<BudgetRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            investments: Vec::new(),
            budgets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_investment(&mut self, record: InvestmentRecord) -> LedgerResult<Uuid> {
        if let Err(err) = record.validate() {
            warn!(ledger = %self.name, investment = %record.name, %err, "investment rejected");
            return Err(err);
        }
        let total = self.invested_total() + record.amount_invested;
        if !total.is_finite() {
            let err = LedgerError::Validation("total amount invested overflows".into());
            warn!(ledger = %self.name, investment = %record.name, %err, "investment rejected");
            return Err(err);
        }
        let id = record.id;
        info!(
            ledger = %self.name,
            investment = %record.name,
            kind = %record.kind,
            amount = record.amount_invested,
            currency = %record.currency,
            "investment added"
        );
        self.investments.push(record);
        self.touch();
        Ok(id)
    }

    /// Appends a budget; whatever `spent` the record carried is reset to zero.
    pub fn add_budget(&mut self, mut record: BudgetRecord) -> LedgerResult<Uuid> {
        if let Err(err) = record.validate() {
            warn!(ledger = %self.name, category = %record.category, %err, "budget rejected");
            return Err(err);
        }
        record.spent = 0.0;
        let id = record.id;
        info!(
            ledger = %self.name,
            category = %record.category,
            amount = record.budget_amount,
            currency = %record.currency,
            date = %record.date,
            "budget added"
        );
        self.budgets.push(record);
        self.touch();
        Ok(id)
    }

    /// Adds `amount` to the first budget matching `key` and returns its new spent total.
    pub fn record_spending(&mut self, key: &BudgetKey, amount: f64) -> LedgerResult<f64> {
        ensure_amount("spending amount", amount)?;
        let Some(budget) = self.budgets.iter_mut().find(|budget| budget.matches(key)) else {
            warn!(ledger = %self.name, %key, amount, "no budget matches spending update");
            return Err(LedgerError::NotFound(format!("budget `{key}`")));
        };
        let spent = match budget.add_spending(amount) {
            Ok(spent) => spent,
            Err(err) => {
                warn!(ledger = %self.name, %key, amount, %err, "spending rejected");
                return Err(err);
            }
        };
        debug!(ledger = %self.name, %key, amount, spent, "spending recorded");
        self.touch();
        Ok(spent)
    }

    pub fn investments(&self) -> &[InvestmentRecord] {
        &self.investments
    }

    pub fn budgets(&self) -> &[BudgetRecord] {
        &self.budgets
    }

    pub fn investment(&self, id: Uuid) -> Option<&InvestmentRecord> {
        self.investments.iter().find(|record| record.id == id)
    }

    pub fn budget(&self, key: &BudgetKey) -> Option<&BudgetRecord> {
        self.budgets.iter().find(|budget| budget.matches(key))
    }

    pub fn investment_count(&self) -> usize {
        self.investments.len()
    }

    pub fn budget_count(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty() && self.budgets.is_empty()
    }

    fn invested_total(&self) -> f64 {
        self.investments
            .iter()
            .map(|record| record.amount_invested)
            .sum()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new("Session")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use crate::ledger::InvestmentType;
    use chrono::NaiveDate;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn add_budget_resets_spent() {
        let mut ledger = Ledger::new("Budgets");
        let mut budget = BudgetRecord::new("Rent", 900.0, CurrencyCode::Gbp, jan_first());
        budget.spent = 42.0;
        ledger.add_budget(budget).unwrap();
        assert_eq!(ledger.budgets()[0].spent(), 0.0);
    }

    #[test]
    fn spending_hits_first_match_only() {
        let mut ledger = Ledger::new("Duplicates");
        let first = ledger
            .add_budget(BudgetRecord::new("Food", 100.0, CurrencyCode::Usd, jan_first()))
            .unwrap();
        let second = ledger
            .add_budget(BudgetRecord::new("Food", 200.0, CurrencyCode::Usd, jan_first()))
            .unwrap();
        let key = BudgetKey::new("Food", jan_first(), CurrencyCode::Usd);
        assert_eq!(ledger.record_spending(&key, 30.0).unwrap(), 30.0);

        let spent_by_id = |id: Uuid| {
            ledger
                .budgets()
                .iter()
                .find(|budget| budget.id == id)
                .map(BudgetRecord::spent)
        };
        assert_eq!(spent_by_id(first), Some(30.0));
        assert_eq!(spent_by_id(second), Some(0.0));
    }

    #[test]
    fn unmatched_spending_leaves_timestamp_alone() {
        let mut ledger = Ledger::new("Untouched");
        ledger
            .add_budget(BudgetRecord::new("Food", 100.0, CurrencyCode::Usd, jan_first()))
            .unwrap();
        let before = ledger.updated_at;
        let key = BudgetKey::new("Travel", jan_first(), CurrencyCode::Usd);
        let err = ledger.record_spending(&key, 10.0).expect_err("no budget matches");
        assert!(matches!(err, LedgerError::NotFound(ref msg) if msg.contains("Travel")));
        assert_eq!(ledger.updated_at, before);
    }

    #[test]
    fn rejected_investment_is_not_stored() {
        let mut ledger = Ledger::new("Validation");
        let record = InvestmentRecord::new(
            "Bad",
            InvestmentType::Bond,
            -5.0,
            jan_first(),
            CurrencyCode::Usd,
        );
        assert!(ledger.add_investment(record).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn overflowing_investment_total_is_rejected() {
        let mut ledger = Ledger::new("Overflow");
        let huge = |name: &str| {
            InvestmentRecord::new(
                name,
                InvestmentType::Stock,
                f64::MAX,
                jan_first(),
                CurrencyCode::Usd,
            )
        };
        ledger.add_investment(huge("First")).unwrap();
        let before = ledger.updated_at;
        let err = ledger.add_investment(huge("Second")).expect_err("total overflows");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(ledger.investment_count(), 1);
        assert_eq!(ledger.updated_at, before);
    }

    #[test]
    fn investment_lookup_by_id() {
        let mut ledger = Ledger::default();
        let id = ledger
            .add_investment(InvestmentRecord::new(
                "BTC",
                InvestmentType::Cryptocurrency,
                75.0,
                jan_first(),
                CurrencyCode::Chf,
            ))
            .unwrap();
        assert_eq!(ledger.investment(id).map(|r| r.name.as_str()), Some("BTC"));
        assert!(ledger.investment(Uuid::new_v4()).is_none());
        assert_eq!(ledger.investment_count(), 1);
    }
}
