#![doc(test(attr(deny(warnings))))]

//! Folio Core keeps a session-scoped ledger of manually logged investments
//! and budgets, and derives the totals, budget comparisons and placeholder
//! risk figures a presentation layer charts and tabulates.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use crate::core::Session;
pub use errors::{ConfigError, LedgerError, LedgerResult};

/// Initializes global tracing with the default filter; the first call emits a startup info log.
pub fn init() {
    init_with(&config::Config::default());
}

/// Initializes global tracing using the log filter from `config`.
pub fn init_with(config: &config::Config) {
    utils::init_tracing(&config.log_filter);
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
