use std::sync::Arc;

use chrono::{DateTime, Utc};
use rocket::{
    fairing::{self, AdHoc},
    Build, Rocket,
};
use rocket_db_pools::Database;
use shared::{name_key, DailyAnswers, DailyEntry, NewParticipant};
use sqlx::PgPool;
use tracing::instrument;

use crate::store::{ChallengeStore, Store, UpsertOutcome};

#[derive(Database, Clone, Debug)]
#[database("habit-challenge")]
pub struct DB(PgPool);

pub mod types;

use types::{DailyEntryRecord, ParticipantRecord};

#[rocket::async_trait]
impl ChallengeStore for DB {
    #[instrument(skip(self))]
    async fn insert_participant(
        &self,
        participant: &NewParticipant,
    ) -> anyhow::Result<ParticipantRecord> {
        let city_group: &'static str = participant.city_group.into();
        let priority: &'static str = participant.priority.into();
        let rec = sqlx::query_as::<_, ParticipantRecord>(
            r#"
            INSERT INTO participants (full_name, city_group, top_priority, personal_goal, leader_interest)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, city_group, top_priority, personal_goal, leader_interest, created_at
            "#,
        )
        .bind(&participant.full_name)
        .bind(city_group)
        .bind(priority)
        .bind(&participant.personal_goal)
        .bind(participant.leader_interest)
        .fetch_one(&self.0)
        .await?;

        Ok(rec)
    }

    #[instrument(skip(self))]
    async fn participant_names(&self) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT full_name FROM participants")
            .fetch_all(&self.0)
            .await?;

        Ok(names)
    }

    #[instrument(skip(self, answers))]
    async fn upsert_daily_entry(
        &self,
        full_name: &str,
        answers: &DailyAnswers,
        at: DateTime<Utc>,
    ) -> anyhow::Result<UpsertOutcome> {
        // xmax is only zero for a freshly inserted row
        let inserted = sqlx::query_scalar::<_, bool>(
            r#"
            INSERT INTO daily_entries (
                full_name, name_key, entry_day,
                hydration_goals, diet_nutrition, study_read, daily_progress_photo,
                mindfulness_practice, abstinence, connection_networking,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            ON CONFLICT (name_key, entry_day) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                hydration_goals = EXCLUDED.hydration_goals,
                diet_nutrition = EXCLUDED.diet_nutrition,
                study_read = EXCLUDED.study_read,
                daily_progress_photo = EXCLUDED.daily_progress_photo,
                mindfulness_practice = EXCLUDED.mindfulness_practice,
                abstinence = EXCLUDED.abstinence,
                connection_networking = EXCLUDED.connection_networking,
                updated_at = EXCLUDED.updated_at
            RETURNING (xmax = 0) AS inserted
            "#,
        )
        .bind(full_name)
        .bind(name_key(full_name))
        .bind(at.date_naive())
        .bind(&answers.hydration_goals)
        .bind(&answers.diet_nutrition)
        .bind(&answers.study_read)
        .bind(&answers.daily_progress_photo)
        .bind(&answers.mindfulness_practice)
        .bind(&answers.abstinence)
        .bind(&answers.connection_networking)
        .bind(at)
        .fetch_one(&self.0)
        .await?;

        Ok(if inserted {
            UpsertOutcome::Inserted
        } else {
            UpsertOutcome::Updated
        })
    }

    #[instrument(skip(self))]
    async fn entries_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<DailyEntry>> {
        let records = sqlx::query_as::<_, DailyEntryRecord>(
            r#"
            SELECT *
            FROM daily_entries
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at, id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.0)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    match DB::fetch(&rocket) {
        Some(db) => match sqlx::migrate!("./migrations").run(&**db).await {
            Ok(_) => Ok(rocket),
            Err(e) => {
                tracing::error!("Failed to initialize SQLx database: {}", e);
                Err(rocket)
            }
        },
        None => Err(rocket),
    }
}

async fn manage_store(rocket: Rocket<Build>) -> fairing::Result {
    match DB::fetch(&rocket).cloned() {
        Some(db) => {
            let store: Store = Arc::new(db);
            Ok(rocket.manage(store))
        }
        None => Err(rocket),
    }
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("SQLx Stage", |rocket| async {
        rocket
            .attach(DB::init())
            .attach(AdHoc::try_on_ignite("SQLx Migrations", run_migrations))
            .attach(AdHoc::try_on_ignite("Postgres store", manage_store))
    })
}
