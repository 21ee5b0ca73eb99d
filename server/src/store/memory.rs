use chrono::{DateTime, Utc};
use rocket::tokio::sync::RwLock;
use shared::{name_key, DailyAnswers, DailyEntry, NewParticipant};

use super::{ChallengeStore, UpsertOutcome};
use crate::db::types::{DailyEntryRecord, ParticipantRecord};

/// Process-local store. Backs local runs without Postgres and the API tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    participants: Vec<ParticipantRecord>,
    entries: Vec<DailyEntryRecord>,
}

#[rocket::async_trait]
impl ChallengeStore for MemoryStore {
    async fn insert_participant(
        &self,
        participant: &NewParticipant,
    ) -> anyhow::Result<ParticipantRecord> {
        let mut state = self.state.write().await;
        let record = ParticipantRecord {
            id: state.participants.len() as i64 + 1,
            full_name: participant.full_name.clone(),
            city_group: participant.city_group.to_string(),
            top_priority: participant.priority.to_string(),
            personal_goal: participant.personal_goal.clone(),
            leader_interest: participant.leader_interest,
            created_at: Utc::now(),
        };
        state.participants.push(record.clone());
        Ok(record)
    }

    async fn participant_names(&self) -> anyhow::Result<Vec<String>> {
        let state = self.state.read().await;
        Ok(state
            .participants
            .iter()
            .map(|participant| participant.full_name.clone())
            .collect())
    }

    async fn upsert_daily_entry(
        &self,
        full_name: &str,
        answers: &DailyAnswers,
        at: DateTime<Utc>,
    ) -> anyhow::Result<UpsertOutcome> {
        let key = name_key(full_name);
        let day = at.date_naive();
        let mut state = self.state.write().await;

        if let Some(existing) = state
            .entries
            .iter_mut()
            .find(|entry| entry.name_key == key && entry.entry_day == day)
        {
            existing.full_name = full_name.to_string();
            existing.set_answers(answers);
            existing.updated_at = at;
            return Ok(UpsertOutcome::Updated);
        }

        let mut record = DailyEntryRecord {
            id: state.entries.len() as i64 + 1,
            full_name: full_name.to_string(),
            name_key: key,
            entry_day: day,
            hydration_goals: String::new(),
            diet_nutrition: String::new(),
            study_read: String::new(),
            daily_progress_photo: String::new(),
            mindfulness_practice: String::new(),
            abstinence: String::new(),
            connection_networking: String::new(),
            created_at: at,
            updated_at: at,
        };
        record.set_answers(answers);
        state.entries.push(record);

        Ok(UpsertOutcome::Inserted)
    }

    async fn entries_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<DailyEntry>> {
        let state = self.state.read().await;
        let mut records: Vec<_> = state
            .entries
            .iter()
            .filter(|entry| start <= entry.created_at && entry.created_at <= end)
            .cloned()
            .collect();
        records.sort_by_key(|entry| (entry.created_at, entry.id));

        Ok(records.into_iter().map(Into::into).collect())
    }
}
