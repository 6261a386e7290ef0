#![doc(test(attr(deny(warnings))))]

//! Recur Core materializes concrete ledger entries from recurring transaction
//! templates. Once per calendar day it scans the ledger for masters, figures
//! out which periods since each master's anchor date still lack an instance,
//! and appends exactly one non-recurring entry per missing period.

pub mod config;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Recur Core tracing initialized.");
    });
}
