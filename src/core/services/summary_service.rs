//! Aggregates derived from investment records. Nothing here is stored.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::currency::CurrencyCode;
use crate::ledger::{InvestmentRecord, InvestmentType};

/// One bar of the invested-per-type chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeTotal {
    pub kind: InvestmentType,
    pub amount: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyTotal {
    pub currency: CurrencyCode,
    pub amount: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums every amount invested; amounts in different currencies are added as-is.
    pub fn total_invested(records: &[InvestmentRecord]) -> f64 {
        let total: f64 = records.iter().map(|record| record.amount_invested).sum();
        debug!(records = records.len(), total, "total invested computed");
        total
    }

    /// Invested amount per type, in [`InvestmentType`] declaration order.
    pub fn totals_by_type(records: &[InvestmentRecord]) -> Vec<TypeTotal> {
        let mut by_type: BTreeMap<InvestmentType, TypeTotal> = BTreeMap::new();
        for record in records {
            let entry = by_type.entry(record.kind).or_insert(TypeTotal {
                kind: record.kind,
                amount: 0.0,
                count: 0,
            });
            entry.amount += record.amount_invested;
            entry.count += 1;
        }
        by_type.into_values().collect()
    }

    /// Invested amount per currency, in order of first appearance.
    pub fn totals_by_currency(records: &[InvestmentRecord]) -> Vec<CurrencyTotal> {
        let mut totals: Vec<CurrencyTotal> = Vec::new();
        for record in records {
            match totals
                .iter_mut()
                .find(|total| total.currency == record.currency)
            {
                Some(total) => total.amount += record.amount_invested,
                None => totals.push(CurrencyTotal {
                    currency: record.currency,
                    amount: record.amount_invested,
                }),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(kind: InvestmentType, amount: f64, currency: CurrencyCode) -> InvestmentRecord {
        InvestmentRecord::new(
            "Holding",
            kind,
            amount,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            currency,
        )
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(SummaryService::total_invested(&[]), 0.0);
        assert!(SummaryService::totals_by_type(&[]).is_empty());
    }

    #[test]
    fn type_totals_follow_declaration_order() {
        let records = vec![
            record(InvestmentType::Cryptocurrency, 10.0, CurrencyCode::Usd),
            record(InvestmentType::Stock, 100.0, CurrencyCode::Usd),
            record(InvestmentType::Stock, 50.0, CurrencyCode::Eur),
        ];
        let totals = SummaryService::totals_by_type(&records);
        assert_eq!(
            totals,
            vec![
                TypeTotal {
                    kind: InvestmentType::Stock,
                    amount: 150.0,
                    count: 2
                },
                TypeTotal {
                    kind: InvestmentType::Cryptocurrency,
                    amount: 10.0,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn currency_totals_keep_first_appearance_order() {
        let records = vec![
            record(InvestmentType::Bond, 20.0, CurrencyCode::Inr),
            record(InvestmentType::Bond, 5.0, CurrencyCode::Usd),
            record(InvestmentType::Bond, 1.0, CurrencyCode::Inr),
        ];
        let totals = SummaryService::totals_by_currency(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].currency, CurrencyCode::Inr);
        assert_eq!(totals[0].amount, 21.0);
        assert_eq!(totals[1].currency, CurrencyCode::Usd);
    }
}
