use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{DailyAnswers, DailyEntry};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: i64,
    pub full_name: String,
    pub city_group: String,
    pub top_priority: String,
    pub personal_goal: String,
    pub leader_interest: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct DailyEntryRecord {
    pub id: i64,
    pub full_name: String,
    pub name_key: String,
    pub entry_day: NaiveDate,
    pub hydration_goals: String,
    pub diet_nutrition: String,
    pub study_read: String,
    pub daily_progress_photo: String,
    pub mindfulness_practice: String,
    pub abstinence: String,
    pub connection_networking: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyEntryRecord {
    pub fn answers(&self) -> DailyAnswers {
        DailyAnswers {
            hydration_goals: self.hydration_goals.clone(),
            diet_nutrition: self.diet_nutrition.clone(),
            study_read: self.study_read.clone(),
            daily_progress_photo: self.daily_progress_photo.clone(),
            mindfulness_practice: self.mindfulness_practice.clone(),
            abstinence: self.abstinence.clone(),
            connection_networking: self.connection_networking.clone(),
        }
    }

    pub fn set_answers(&mut self, answers: &DailyAnswers) {
        self.hydration_goals = answers.hydration_goals.clone();
        self.diet_nutrition = answers.diet_nutrition.clone();
        self.study_read = answers.study_read.clone();
        self.daily_progress_photo = answers.daily_progress_photo.clone();
        self.mindfulness_practice = answers.mindfulness_practice.clone();
        self.abstinence = answers.abstinence.clone();
        self.connection_networking = answers.connection_networking.clone();
    }
}

impl From<DailyEntryRecord> for DailyEntry {
    fn from(record: DailyEntryRecord) -> Self {
        Self {
            answers: record.answers(),
            full_name: record.full_name,
            created_at: record.created_at,
        }
    }
}
