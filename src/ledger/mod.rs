//! Ledger records and the session-scoped store that holds them.

pub mod budget;
pub mod investment;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use budget::{BudgetKey, BudgetRecord};
pub use investment::{InvestmentRecord, InvestmentType, EXPECTED_RETURN_RANGE};
pub use ledger::Ledger;
