use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    ledger::Transaction,
    utils::{app_data_dir, ensure_dir, write_atomic},
};

use super::{CheckpointStore, LedgerStore, Result};

const LEDGER_FILE: &str = "ledger.json";
const STATE_FILE: &str = "state.json";

/// File-backed transaction store: one pretty-printed JSON array, rewritten
/// atomically on every append.
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    pub fn new_default() -> Result<Self> {
        Self::at(app_data_dir().join(LEDGER_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Vec<Transaction>> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Vec::new())
        }
    }
}

impl LedgerStore for JsonLedger {
    fn read_all(&self) -> Result<Vec<Transaction>> {
        self.read_file()
    }

    fn append(&mut self, transaction: Transaction) -> Result<Transaction> {
        let mut entries = self.read_file()?;
        entries.push(transaction.clone());
        let json = serde_json::to_string_pretty(&entries)?;
        write_atomic(&self.path, &json)?;
        Ok(transaction)
    }
}

/// Engine-owned state file. Holds only the date of the last clean pass, the
/// file-system analogue of a well-known key-value slot.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    #[serde(default)]
    last_recurring_check: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct JsonCheckpointStore {
    path: PathBuf,
}

impl JsonCheckpointStore {
    pub fn new_default() -> Result<Self> {
        Self::at(app_data_dir().join(STATE_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<StoreState> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(StoreState::default())
        }
    }
}

impl CheckpointStore for JsonCheckpointStore {
    fn read(&self) -> Result<Option<NaiveDate>> {
        Ok(self.read_state()?.last_recurring_check)
    }

    fn write(&mut self, day: NaiveDate) -> Result<()> {
        let state = StoreState {
            last_recurring_check: Some(day),
        };
        let json = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}
