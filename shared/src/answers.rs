use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::ValidationError;

/// The only answer that earns a point. Compared literally.
pub const YES: &str = "yes";
pub const MAX_RAW_SCORE: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Habit {
    HydrationGoals,
    DietNutrition,
    StudyRead,
    DailyProgressPhoto,
    MindfulnessPractice,
    Abstinence,
    ConnectionNetworking,
}

impl Habit {
    pub fn field_name(&self) -> &'static str {
        self.into()
    }
}

/// One day's checklist. Values are normally "yes" or "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyAnswers {
    pub hydration_goals: String,
    pub diet_nutrition: String,
    pub study_read: String,
    pub daily_progress_photo: String,
    pub mindfulness_practice: String,
    pub abstinence: String,
    pub connection_networking: String,
}

impl DailyAnswers {
    pub fn all(value: &str) -> Self {
        Self {
            hydration_goals: value.to_string(),
            diet_nutrition: value.to_string(),
            study_read: value.to_string(),
            daily_progress_photo: value.to_string(),
            mindfulness_practice: value.to_string(),
            abstinence: value.to_string(),
            connection_networking: value.to_string(),
        }
    }

    pub fn answer(&self, habit: Habit) -> &str {
        match habit {
            Habit::HydrationGoals => &self.hydration_goals,
            Habit::DietNutrition => &self.diet_nutrition,
            Habit::StudyRead => &self.study_read,
            Habit::DailyProgressPhoto => &self.daily_progress_photo,
            Habit::MindfulnessPractice => &self.mindfulness_practice,
            Habit::Abstinence => &self.abstinence,
            Habit::ConnectionNetworking => &self.connection_networking,
        }
    }

    pub fn raw_score(&self) -> u32 {
        Habit::iter()
            .filter(|habit| self.answer(*habit) == YES)
            .count() as u32
    }

    pub fn blank_fields(&self) -> Vec<&'static str> {
        Habit::iter()
            .filter(|habit| self.answer(*habit).trim().is_empty())
            .map(|habit| habit.field_name())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = self.blank_fields();
        if blank.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::BlankAnswers(blank))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_literal_yes() {
        assert_eq!(DailyAnswers::all("yes").raw_score(), MAX_RAW_SCORE);
        assert_eq!(DailyAnswers::all("no").raw_score(), 0);
        assert_eq!(DailyAnswers::all("Yes").raw_score(), 0);
        assert_eq!(DailyAnswers::all(" yes").raw_score(), 0);
        assert_eq!(DailyAnswers::default().raw_score(), 0);

        let answers = DailyAnswers {
            hydration_goals: "yes".to_string(),
            study_read: "yes".to_string(),
            abstinence: "YES".to_string(),
            connection_networking: "yes".to_string(),
            ..DailyAnswers::all("no")
        };
        assert_eq!(answers.raw_score(), 3);
    }

    #[test]
    fn missing_json_fields_are_not_yes() {
        let answers: DailyAnswers =
            serde_json::from_str(r#"{"hydration_goals": "yes", "diet_nutrition": "yes"}"#).unwrap();
        assert_eq!(answers.raw_score(), 2);
        assert_eq!(
            answers.blank_fields(),
            vec![
                "study_read",
                "daily_progress_photo",
                "mindfulness_practice",
                "abstinence",
                "connection_networking"
            ]
        );
    }

    #[test]
    fn validation_reports_blank_answers() {
        assert_eq!(DailyAnswers::all("no").validate(), Ok(()));

        let answers = DailyAnswers {
            mindfulness_practice: "  ".to_string(),
            ..DailyAnswers::all("yes")
        };
        assert_eq!(
            answers.validate(),
            Err(ValidationError::BlankAnswers(vec!["mindfulness_practice"]))
        );
    }
}
