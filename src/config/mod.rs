use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::EngineError,
    ledger::Frequency,
    utils::{app_data_dir, ensure_dir, write_atomic},
};

const CONFIG_FILE: &str = "config.json";

/// Engine knobs. Which frequencies generate instances is configuration, not a
/// property of the data model: masters with a disabled frequency stay in the
/// ledger untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub frequencies: Vec<Frequency>,
}

impl EngineConfig {
    /// Restricts generation to monthly masters; weekly and yearly masters are
    /// then accepted by the data model but never materialized.
    pub fn monthly_only() -> Self {
        Self {
            frequencies: vec![Frequency::Monthly],
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frequencies: vec![Frequency::Weekly, Frequency::Monthly, Frequency::Yearly],
        }
    }
}

/// Loads and saves the engine configuration as JSON on disk.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, EngineError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<EngineConfig, EngineError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(EngineConfig::default())
        }
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
