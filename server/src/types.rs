use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    required, DailyAnswers, NewParticipant, ValidationError, WeekWindow, WeeklySummary,
};
use utoipa::ToSchema;

use crate::db::types::ParticipantRecord;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub city_group: String,
    pub priority: String,
    pub personal_goal: String,
    pub leader_interest: bool,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<NewParticipant, ValidationError> {
        NewParticipant::new(
            &self.full_name,
            &self.city_group,
            &self.priority,
            &self.personal_goal,
            self.leader_interest,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: i64,
    pub full_name: String,
    pub city_group: String,
    pub top_priority: String,
    pub personal_goal: String,
    pub leader_interest: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ParticipantRecord> for ParticipantResponse {
    fn from(record: ParticipantRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            city_group: record.city_group,
            top_priority: record.top_priority,
            personal_goal: record.personal_goal,
            leader_interest: record.leader_interest,
            created_at: record.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub message: String,
    pub data: ParticipantResponse,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DailySubmissionRequest {
    pub selected_full_name: String,
    /// `hydration_goals`, `diet_nutrition`, `study_read`, `daily_progress_photo`,
    /// `mindfulness_practice`, `abstinence` and `connection_networking`, each "yes" or "no"
    #[schema(value_type = Object)]
    pub answers: DailyAnswers,
}

impl DailySubmissionRequest {
    pub fn validate(&self) -> Result<(&str, &DailyAnswers), ValidationError> {
        let full_name = required("selectedFullName", &self.selected_full_name)?;
        self.answers.validate()?;
        Ok((full_name, &self.answers))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub label: String,
    pub week_number: u32,
    pub display_week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<WeekWindow> for WeekResponse {
    fn from(week: WeekWindow) -> Self {
        Self {
            label: week.label,
            week_number: week.week_number,
            display_week_number: week.display_week_number,
            start_date: week.start_date,
            end_date: week.end_date,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WeeklySummaryResponse {
    pub full_name: String,
    pub average_score: f64,
    /// Score rounded to two decimals for display
    pub display_score: String,
    pub num_entries: u32,
}

impl From<WeeklySummary> for WeeklySummaryResponse {
    fn from(summary: WeeklySummary) -> Self {
        Self {
            display_score: summary.display_score(),
            full_name: summary.full_name,
            average_score: summary.average_score,
            num_entries: summary.num_entries,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormOptionsResponse {
    pub city_groups: Vec<String>,
    pub priorities: Vec<String>,
}
