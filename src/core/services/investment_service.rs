//! Business logic helpers for logging investments.

use uuid::Uuid;

use crate::ledger::{InvestmentRecord, Ledger};

use super::ServiceResult;

/// Validated append/list helpers for ledger investments.
pub struct InvestmentService;

impl InvestmentService {
    /// Adds a new investment and returns its identifier.
    pub fn add(ledger: &mut Ledger, investment: InvestmentRecord) -> ServiceResult<Uuid> {
        ledger.add_investment(investment)
    }

    /// Returns a snapshot of the ledger's investments in insertion order.
    pub fn list(ledger: &Ledger) -> Vec<&InvestmentRecord> {
        ledger.investments().iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use crate::errors::LedgerError;
    use crate::ledger::InvestmentType;
    use chrono::NaiveDate;

    fn sample(name: &str, amount: f64) -> InvestmentRecord {
        InvestmentRecord::new(
            name,
            InvestmentType::Stock,
            amount,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            CurrencyCode::Usd,
        )
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut ledger = Ledger::new("Order");
        InvestmentService::add(&mut ledger, sample("first", 1.0)).unwrap();
        InvestmentService::add(&mut ledger, sample("second", 2.0)).unwrap();
        let names: Vec<&str> = InvestmentService::list(&ledger)
            .into_iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut ledger = Ledger::new("Dupes");
        let record = sample("same", 10.0);
        InvestmentService::add(&mut ledger, record.clone()).unwrap();
        InvestmentService::add(&mut ledger, record).unwrap();
        assert_eq!(ledger.investment_count(), 2);
    }

    #[test]
    fn infinite_amount_is_rejected() {
        let mut ledger = Ledger::new("Infinite");
        let err = InvestmentService::add(&mut ledger, sample("inf", f64::INFINITY))
            .expect_err("infinite amount must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }
}
