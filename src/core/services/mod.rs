pub mod budget_service;
pub mod investment_service;
pub mod risk_service;
pub mod summary_service;

pub use budget_service::{BudgetComparison, BudgetService};
pub use investment_service::InvestmentService;
pub use risk_service::{
    FixedVolatility, RiskMetric, RiskService, UniformVolatility, VolatilitySource,
};
pub use summary_service::{CurrencyTotal, SummaryService, TypeTotal};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;
