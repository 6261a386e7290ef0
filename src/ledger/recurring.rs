//! Pure recurrence computations over a ledger snapshot: master selection,
//! missing-period enumeration, heuristic duplicate detection, and instance
//! construction. Nothing in this module touches storage.

use chrono::NaiveDate;
use uuid::Uuid;

use super::period::Period;
use super::transaction::{Frequency, Transaction};

/// Hard ceiling on periods enumerated per master; bounds the work for a
/// pathologically old anchor date.
const MAX_PERIODS_PER_MASTER: usize = 1024;

/// Masters from the snapshot whose frequency is enabled. Processing order must
/// not affect the generated set, so callers may iterate the result as-is.
pub fn select_masters<'a>(
    snapshot: &'a [Transaction],
    enabled: &[Frequency],
) -> Vec<&'a Transaction> {
    snapshot
        .iter()
        .filter(|txn| txn.frequency().is_some_and(|f| enabled.contains(&f)))
        .collect()
}

/// Periods strictly after the anchor's own period, up to and including the
/// period containing `today`. The anchor's period is never a candidate, so a
/// master cannot regenerate itself in its creation period. Membership is by
/// period, not elapsed days: a master dated the 31st checked on the 1st of the
/// next month is due for that month.
pub fn candidate_periods(
    frequency: Frequency,
    anchor: NaiveDate,
    today: NaiveDate,
) -> Vec<Period> {
    let current = frequency.period_of(today);
    let mut period = frequency.period_of(anchor);
    let mut periods = Vec::new();
    while period.start < current.start && periods.len() < MAX_PERIODS_PER_MASTER {
        period = frequency.next_period(period);
        periods.push(period);
    }
    periods
}

/// Heuristic stand-in for a lineage link: the period counts as materialized
/// when any other transaction matches the master on category, amount, and note
/// and is dated inside the period. A user-entered entry that legitimately
/// shares those values suppresses generation for its period; that false
/// positive is an accepted limitation of lineage-free matching.
pub fn is_already_materialized(
    master: &Transaction,
    period: Period,
    snapshot: &[Transaction],
) -> bool {
    snapshot
        .iter()
        .any(|txn| txn.id != master.id && txn.matches_template(master) && period.contains(txn.date))
}

/// The concrete instance for one period of a master. Instances are permanently
/// non-recurring; a generated entry must never become a master itself, or one
/// template would spawn an unbounded chain of templates.
pub fn build_instance(master: &Transaction, date: NaiveDate) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        amount: master.amount,
        category_id: master.category_id,
        date,
        note: master.note.clone(),
        is_recurring: false,
        recurring_frequency: None,
    }
}

/// All instances due for `master` as of `today`, judged against `snapshot`.
/// Every missing period since the anchor is filled in one call.
pub fn missing_instances(
    master: &Transaction,
    today: NaiveDate,
    snapshot: &[Transaction],
) -> Vec<Transaction> {
    let Some(frequency) = master.frequency() else {
        return Vec::new();
    };
    candidate_periods(frequency, master.date, today)
        .into_iter()
        .filter(|period| !is_already_materialized(master, *period, snapshot))
        .map(|period| build_instance(master, frequency.project_into(master.date, period)))
        .collect()
}
