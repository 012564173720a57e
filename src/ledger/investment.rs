use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::errors::{ensure_amount, LedgerError, LedgerResult};

/// Bounds for the optional expected return, in percent.
pub const EXPECTED_RETURN_RANGE: (f64, f64) = (-100.0, 100.0);

/// Asset classes an investment can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvestmentType {
    Stock,
    Bond,
    MutualFund,
    RealEstate,
    Cryptocurrency,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 5] = [
        InvestmentType::Stock,
        InvestmentType::Bond,
        InvestmentType::MutualFund,
        InvestmentType::RealEstate,
        InvestmentType::Cryptocurrency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::Stock => "Stock",
            InvestmentType::Bond => "Bond",
            InvestmentType::MutualFund => "Mutual Fund",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Cryptocurrency => "Cryptocurrency",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single manually logged investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentRecord {
    pub id: Uuid,
    pub name: String,
    pub kind: InvestmentType,
    pub amount_invested: f64,
    pub date: NaiveDate,
    pub currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return_percent: Option<f64>,
}

impl InvestmentRecord {
    pub fn new(
        name: impl Into<String>,
        kind: InvestmentType,
        amount_invested: f64,
        date: NaiveDate,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount_invested,
            date,
            currency,
            stock_name: None,
            expected_return_percent: None,
        }
    }

    /// Sets the ticker/stock name; blank input clears it.
    pub fn with_stock_name(mut self, stock_name: impl Into<String>) -> Self {
        let stock_name = stock_name.into();
        let trimmed = stock_name.trim();
        self.stock_name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_expected_return(mut self, percent: f64) -> Self {
        self.expected_return_percent = Some(percent);
        self
    }

    pub fn validate(&self) -> LedgerResult<()> {
        ensure_amount("amount invested", self.amount_invested)?;
        if let Some(percent) = self.expected_return_percent {
            let (low, high) = EXPECTED_RETURN_RANGE;
            if !percent.is_finite() || percent < low || percent > high {
                return Err(LedgerError::Validation(format!(
                    "expected return must lie within [{low}, {high}] percent (got {percent})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvestmentRecord {
        InvestmentRecord::new(
            "Index fund",
            InvestmentType::MutualFund,
            500.0,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            CurrencyCode::Eur,
        )
    }

    #[test]
    fn blank_stock_name_is_absent() {
        let record = sample().with_stock_name("   ");
        assert_eq!(record.stock_name, None);
        let record = sample().with_stock_name(" VWCE ");
        assert_eq!(record.stock_name.as_deref(), Some("VWCE"));
    }

    #[test]
    fn expected_return_bounds_are_inclusive() {
        assert!(sample().with_expected_return(100.0).validate().is_ok());
        assert!(sample().with_expected_return(-100.0).validate().is_ok());
        assert!(sample().with_expected_return(100.5).validate().is_err());
        assert!(sample().with_expected_return(f64::NAN).validate().is_err());
    }

    #[test]
    fn labels_match_display_names() {
        assert_eq!(InvestmentType::RealEstate.to_string(), "Real Estate");
        assert_eq!(InvestmentType::MutualFund.label(), "Mutual Fund");
    }
}
