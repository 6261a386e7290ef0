//! Shared fakes for the integration suites. The fakes hand out `Rc`-shared
//! state so a test can keep a handle on a store after moving a clone into the
//! engine.

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;

use recur_core::errors::EngineError;
use recur_core::ledger::Transaction;
use recur_core::storage::{CheckpointStore, Clock, LedgerStore, Result};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Clone, Default)]
pub struct MemoryLedger {
    entries: Rc<RefCell<Vec<Transaction>>>,
    appends: Rc<RefCell<usize>>,
    // Remaining appends allowed before the store starts rejecting.
    allow: Rc<RefCell<Option<usize>>>,
}

impl MemoryLedger {
    pub fn with(entries: Vec<Transaction>) -> Self {
        let ledger = Self::default();
        *ledger.entries.borrow_mut() = entries;
        ledger
    }

    /// Makes every append after the next `appends` fail with a storage error.
    pub fn fail_after(&self, appends: usize) {
        *self.allow.borrow_mut() = Some(appends);
    }

    pub fn clear_failure(&self) {
        *self.allow.borrow_mut() = None;
    }

    pub fn entries(&self) -> Vec<Transaction> {
        self.entries.borrow().clone()
    }

    /// Total appends accepted since construction.
    pub fn appended(&self) -> usize {
        *self.appends.borrow()
    }

    pub fn reset_append_count(&self) {
        *self.appends.borrow_mut() = 0;
    }
}

impl LedgerStore for MemoryLedger {
    fn read_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.entries.borrow().clone())
    }

    fn append(&mut self, transaction: Transaction) -> Result<Transaction> {
        if let Some(remaining) = self.allow.borrow_mut().as_mut() {
            if *remaining == 0 {
                return Err(EngineError::Storage("append rejected".into()));
            }
            *remaining -= 1;
        }
        self.entries.borrow_mut().push(transaction.clone());
        *self.appends.borrow_mut() += 1;
        Ok(transaction)
    }
}

#[derive(Clone)]
pub struct FixedClock {
    today: Rc<RefCell<NaiveDate>>,
}

impl FixedClock {
    pub fn at(today: NaiveDate) -> Self {
        Self {
            today: Rc::new(RefCell::new(today)),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.borrow_mut() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.borrow()
    }
}

#[derive(Clone, Default)]
pub struct MemoryCheckpoint {
    value: Rc<RefCell<Option<NaiveDate>>>,
}

impl MemoryCheckpoint {
    pub fn last(&self) -> Option<NaiveDate> {
        *self.value.borrow()
    }
}

impl CheckpointStore for MemoryCheckpoint {
    fn read(&self) -> Result<Option<NaiveDate>> {
        Ok(*self.value.borrow())
    }

    fn write(&mut self, today: NaiveDate) -> Result<()> {
        *self.value.borrow_mut() = Some(today);
        Ok(())
    }
}
