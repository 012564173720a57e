//! The per-session context handed to a presentation layer.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    BudgetComparison, BudgetService, FixedVolatility, InvestmentService, RiskMetric, RiskService,
    SummaryService, TypeTotal, UniformVolatility, VolatilitySource,
};
use crate::currency::CurrencyCode;
use crate::errors::{ConfigError, LedgerResult};
use crate::ledger::{BudgetRecord, InvestmentRecord, Ledger};
use crate::report::{self, ReportStyle};

/// Owns one ledger plus everything needed to derive and render its aggregates.
pub struct Session {
    ledger: Ledger,
    volatility: Box<dyn VolatilitySource>,
    style: ReportStyle,
}

impl Session {
    pub fn new(ledger: Ledger, volatility: Box<dyn VolatilitySource>, style: ReportStyle) -> Self {
        Self {
            ledger,
            volatility,
            style,
        }
    }

    /// Builds a fresh session from configuration; equal volatility bounds yield a fixed source.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let range = config.volatility;
        let volatility: Box<dyn VolatilitySource> = if range.min == range.max {
            Box::new(FixedVolatility(range.min))
        } else {
            let source = match range.seed {
                Some(seed) => UniformVolatility::seeded(range.min, range.max, seed),
                None => UniformVolatility::from_entropy(range.min, range.max),
            }
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
            Box::new(source)
        };
        debug!(
            min = range.min,
            max = range.max,
            seeded = range.seed.is_some(),
            "session created"
        );
        Ok(Self::new(Ledger::default(), volatility, ReportStyle::from(config)))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn style(&self) -> &ReportStyle {
        &self.style
    }

    pub fn set_volatility_source(&mut self, source: Box<dyn VolatilitySource>) {
        self.volatility = source;
    }

    pub fn add_investment(&mut self, record: InvestmentRecord) -> LedgerResult<Uuid> {
        InvestmentService::add(&mut self.ledger, record)
    }

    pub fn add_budget(&mut self, record: BudgetRecord) -> LedgerResult<Uuid> {
        BudgetService::add(&mut self.ledger, record)
    }

    pub fn record_spending(
        &mut self,
        category: &str,
        date: NaiveDate,
        currency: CurrencyCode,
        amount: f64,
    ) -> LedgerResult<f64> {
        BudgetService::record_spending(&mut self.ledger, category, date, currency, amount)
    }

    pub fn investments(&self) -> &[InvestmentRecord] {
        self.ledger.investments()
    }

    pub fn budgets(&self) -> &[BudgetRecord] {
        self.ledger.budgets()
    }

    pub fn total_invested(&self) -> f64 {
        SummaryService::total_invested(self.ledger.investments())
    }

    pub fn totals_by_type(&self) -> Vec<TypeTotal> {
        SummaryService::totals_by_type(self.ledger.investments())
    }

    pub fn budget_vs_spent(&self) -> Vec<BudgetComparison> {
        BudgetService::budget_vs_spent(self.ledger.budgets())
    }

    /// Draws fresh volatility figures on every call.
    pub fn risk_metrics(&mut self) -> Vec<RiskMetric> {
        RiskService::risk_metrics(self.ledger.investments(), self.volatility.as_mut())
    }

    pub fn investments_view(&self) -> String {
        report::investments_table(self.ledger.investments(), &self.style)
    }

    pub fn budgets_view(&self) -> String {
        report::budgets_table(self.ledger.budgets(), &self.style)
    }

    pub fn budget_comparison_view(&self) -> String {
        report::budget_comparison_table(&self.budget_vs_spent(), &self.style)
    }

    pub fn risk_view(&mut self) -> String {
        let metrics = self.risk_metrics();
        report::risk_table(&metrics, &self.style)
    }

    pub fn total_invested_view(&self) -> String {
        report::total_invested_line(self.total_invested(), &self.style)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Ledger::default(),
            Box::new(UniformVolatility::default()),
            ReportStyle::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VolatilityConfig;
    use crate::ledger::InvestmentType;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn seeded_config(seed: u64) -> Config {
        Config {
            volatility: VolatilityConfig {
                seed: Some(seed),
                ..VolatilityConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn same_seed_gives_same_metrics() {
        let record = InvestmentRecord::new(
            "ETF",
            InvestmentType::MutualFund,
            10.0,
            day(),
            CurrencyCode::Usd,
        )
        .with_expected_return(8.0);
        let mut first = Session::from_config(&seeded_config(3)).unwrap();
        let mut second = Session::from_config(&seeded_config(3)).unwrap();
        first.add_investment(record.clone()).unwrap();
        second.add_investment(record).unwrap();

        let a = first.risk_metrics();
        let b = second.risk_metrics();
        assert_eq!(a[0].volatility, b[0].volatility);
    }

    #[test]
    fn equal_bounds_fix_the_volatility() {
        let mut config = Config::default();
        config.volatility = VolatilityConfig {
            min: 20.0,
            max: 20.0,
            seed: None,
        };
        let mut session = Session::from_config(&config).unwrap();
        session
            .add_investment(
                InvestmentRecord::new("Gilt", InvestmentType::Bond, 5.0, day(), CurrencyCode::Gbp)
                    .with_expected_return(4.0),
            )
            .unwrap();
        let metrics = session.risk_metrics();
        assert_eq!(metrics[0].volatility, 20.0);
        assert_eq!(metrics[0].sharpe_ratio, Some(0.2));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = Config::default();
        config.volatility.max = 1.0;
        assert!(matches!(
            Session::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn injected_source_replaces_configured_one() {
        let mut session = Session::default();
        session.set_volatility_source(Box::new(FixedVolatility(0.0)));
        session
            .add_investment(
                InvestmentRecord::new(
                    "Coin",
                    InvestmentType::Cryptocurrency,
                    1.0,
                    day(),
                    CurrencyCode::Usd,
                )
                .with_expected_return(50.0),
            )
            .unwrap();
        assert!(session.risk_view().contains("n/a"));
    }
}
