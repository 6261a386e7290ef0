use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a recurring master repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

/// One ledger entry. A transaction is a master (`is_recurring` with a
/// frequency), an engine-generated instance, or an ordinary one-off entry.
/// Instances carry no link back to their master; they are told apart only by
/// value equality on `(category_id, amount, note)` plus period membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub category_id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<Frequency>,
}

impl Transaction {
    /// A one-off entry with no recurrence.
    pub fn new(category_id: Uuid, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category_id,
            date,
            note: None,
            is_recurring: false,
            recurring_frequency: None,
        }
    }

    /// A recurring master anchored at `date`. The frequency is set together
    /// with the flag so the two can never disagree.
    pub fn recurring(
        category_id: Uuid,
        amount: f64,
        date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            is_recurring: true,
            recurring_frequency: Some(frequency),
            ..Self::new(category_id, amount, date)
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The recurrence frequency, present only for masters.
    pub fn frequency(&self) -> Option<Frequency> {
        if self.is_recurring {
            self.recurring_frequency
        } else {
            None
        }
    }

    /// Value-equality match on `(category_id, amount, note)`, the heuristic
    /// stand-in for a lineage link. Instances copy the master's amount
    /// verbatim, so exact float equality is the intended comparison.
    pub fn matches_template(&self, other: &Self) -> bool {
        self.category_id == other.category_id
            && self.amount == other.amount
            && self.note == other.note
    }
}
