pub mod json_backend;

use chrono::{Local, NaiveDate};

use crate::{errors::EngineError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Append-and-scan transaction store the engine consumes. No transactional or
/// uniqueness guarantees are assumed beyond a successful append.
pub trait LedgerStore {
    fn read_all(&self) -> Result<Vec<Transaction>>;
    /// Appends one entry and returns it as stored, identity included.
    fn append(&mut self, transaction: Transaction) -> Result<Transaction>;
}

/// Source of the current calendar date. Date-only resolution: time of day must
/// not affect period membership.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock calendar date in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Persisted last-run date gating the daily pass. Lives outside the ledger's
/// storage scope, survives restarts, and is owned exclusively by the engine.
pub trait CheckpointStore {
    fn read(&self) -> Result<Option<NaiveDate>>;
    fn write(&mut self, day: NaiveDate) -> Result<()>;
}

pub use json_backend::{JsonCheckpointStore, JsonLedger};
