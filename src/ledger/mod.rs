//! Ledger domain models and the pure recurrence computations over them.

pub mod period;
pub mod recurring;
pub mod transaction;

pub use period::{days_in_month, Period};
pub use transaction::{Frequency, Transaction};
