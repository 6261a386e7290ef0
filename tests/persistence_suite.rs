mod common;

use common::{day, FixedClock};
use uuid::Uuid;

use recur_core::engine::{RecurrenceEngine, RunOutcome};
use recur_core::ledger::{Frequency, Transaction};
use recur_core::storage::{
    CheckpointStore, JsonCheckpointStore, JsonLedger, LedgerStore,
};

#[test]
fn json_ledger_starts_empty_and_round_trips_appends() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = JsonLedger::at(dir.path().join("ledger.json")).unwrap();
    assert!(ledger.read_all().unwrap().is_empty());

    let txn = Transaction::new(Uuid::new_v4(), 12.34, day(2024, 5, 1)).with_note("Coffee");
    let stored = ledger.append(txn.clone()).unwrap();
    assert_eq!(stored.id, txn.id);

    let entries = ledger.read_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, txn.id);
    assert_eq!(entries[0].note.as_deref(), Some("Coffee"));
    assert!(dir.path().join("ledger.json").exists());
}

#[test]
fn json_checkpoint_reads_none_then_persists_written_date() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut store = JsonCheckpointStore::at(&path).unwrap();
    assert_eq!(store.read().unwrap(), None);

    store.write(day(2024, 3, 15)).unwrap();
    assert_eq!(store.read().unwrap(), Some(day(2024, 3, 15)));

    // A fresh handle over the same file sees the committed date.
    let reopened = JsonCheckpointStore::at(&path).unwrap();
    assert_eq!(reopened.read().unwrap(), Some(day(2024, 3, 15)));
}

#[test]
fn engine_over_json_backend_generates_then_skips_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let ledger_path = dir.path().join("ledger.json");
    let state_path = dir.path().join("state.json");

    let master = Transaction::recurring(Uuid::new_v4(), 1200.0, day(2024, 1, 31), Frequency::Monthly)
        .with_note("Rent");
    let master_id = master.id;
    let mut ledger = JsonLedger::at(&ledger_path).unwrap();
    ledger.append(master).unwrap();

    let clock = FixedClock::at(day(2024, 3, 15));
    let checkpoint = JsonCheckpointStore::at(&state_path).unwrap();
    let mut engine = RecurrenceEngine::new(ledger, clock.clone(), checkpoint);
    assert_eq!(
        engine.run_recurrence_check().unwrap(),
        RunOutcome::Completed { generated: 2 }
    );

    // Rebuild every store from disk, same day: the persisted checkpoint
    // throttles the pass and the ledger is untouched.
    let ledger = JsonLedger::at(&ledger_path).unwrap();
    let checkpoint = JsonCheckpointStore::at(&state_path).unwrap();
    let mut engine = RecurrenceEngine::new(ledger, clock, checkpoint);
    assert_eq!(engine.run_recurrence_check().unwrap(), RunOutcome::Skipped);

    let entries = JsonLedger::at(&ledger_path).unwrap().read_all().unwrap();
    assert_eq!(entries.len(), 3);
    let mut dates: Vec<_> = entries
        .iter()
        .filter(|t| t.id != master_id)
        .map(|t| t.date)
        .collect();
    dates.sort();
    assert_eq!(dates, vec![day(2024, 2, 29), day(2024, 3, 31)]);
}
