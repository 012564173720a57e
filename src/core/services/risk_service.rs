//! Placeholder risk figures: a random volatility per investment and the
//! Sharpe ratio derived from it. This is not a risk model.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::InvestmentRecord;

pub const DEFAULT_VOLATILITY_RANGE: (f64, f64) = (10.0, 30.0);

/// Supplies one volatility figure per call.
pub trait VolatilitySource: Send {
    fn sample(&mut self) -> f64;
}

/// Uniform draws over `[min, max)`.
#[derive(Debug, Clone)]
pub struct UniformVolatility {
    min: f64,
    max: f64,
    rng: StdRng,
}

impl UniformVolatility {
    /// Unseeded source, drawing fresh values on every run.
    pub fn from_entropy(min: f64, max: f64) -> LedgerResult<Self> {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    /// Reproducible source for a given seed.
    pub fn seeded(min: f64, max: f64, seed: u64) -> LedgerResult<Self> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: f64, max: f64, rng: StdRng) -> LedgerResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(LedgerError::Validation(format!(
                "volatility range must satisfy 0 <= min < max (got {min}..{max})"
            )));
        }
        Ok(Self { min, max, rng })
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl Default for UniformVolatility {
    fn default() -> Self {
        let (min, max) = DEFAULT_VOLATILITY_RANGE;
        Self {
            min,
            max,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl VolatilitySource for UniformVolatility {
    fn sample(&mut self) -> f64 {
        self.rng.random_range(self.min..self.max)
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedVolatility(pub f64);

impl VolatilitySource for FixedVolatility {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetric {
    pub investment_id: Uuid,
    pub name: String,
    pub expected_return_percent: f64,
    pub volatility: f64,
    /// `None` when the volatility draw was zero.
    pub sharpe_ratio: Option<f64>,
}

pub struct RiskService;

impl RiskService {
    /// Draws one volatility per record carrying an expected return; others are skipped.
    pub fn risk_metrics(
        records: &[InvestmentRecord],
        source: &mut dyn VolatilitySource,
    ) -> Vec<RiskMetric> {
        let metrics: Vec<RiskMetric> = records
            .iter()
            .filter_map(|record| {
                let expected = record.expected_return_percent?;
                let volatility = source.sample();
                Some(RiskMetric {
                    investment_id: record.id,
                    name: record.name.clone(),
                    expected_return_percent: expected,
                    volatility,
                    sharpe_ratio: sharpe_ratio(expected, volatility),
                })
            })
            .collect();
        debug!(
            records = records.len(),
            metrics = metrics.len(),
            "risk metrics drawn"
        );
        metrics
    }
}

pub fn sharpe_ratio(expected_return_percent: f64, volatility: f64) -> Option<f64> {
    if volatility == 0.0 {
        return None;
    }
    Some(expected_return_percent / volatility)
}
