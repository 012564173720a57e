//! Services deriving aggregates from a ledger, and the session that owns one.

pub mod services;
pub mod session;

pub use session::Session;
