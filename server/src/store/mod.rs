use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{DailyAnswers, DailyEntry, NewParticipant};

use crate::db::types::ParticipantRecord;

mod memory;

pub use memory::MemoryStore;

pub type Store = Arc<dyn ChallengeStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Durable state of the challenge: the roster and the daily checklists.
#[rocket::async_trait]
pub trait ChallengeStore: Send + Sync {
    async fn insert_participant(
        &self,
        participant: &NewParticipant,
    ) -> anyhow::Result<ParticipantRecord>;

    /// Every registered name, unsorted and possibly repeated.
    async fn participant_names(&self) -> anyhow::Result<Vec<String>>;

    /// Stores the checklist for the participant's UTC day of `at`, replacing
    /// the answers if one was already submitted that day.
    async fn upsert_daily_entry(
        &self,
        full_name: &str,
        answers: &DailyAnswers,
        at: DateTime<Utc>,
    ) -> anyhow::Result<UpsertOutcome>;

    /// Entries created within `[start, end]`, oldest first.
    async fn entries_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<DailyEntry>>;
}

pub fn memory_stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("In-memory store", |rocket| async {
        tracing::warn!("Using the in-memory store, nothing will be persisted");
        let store: Store = Arc::new(MemoryStore::default());
        rocket.manage(store)
    })
}
