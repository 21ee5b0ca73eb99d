use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{name_key, DailyAnswers, NameOrder, WeekWindow};

pub const MAX_AVERAGE_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub answers: DailyAnswers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub full_name: String,
    pub average_score: f64,
    pub num_entries: u32,
}

impl WeeklySummary {
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.average_score)
    }
}

/// Scores every participant that submitted within the week.
///
/// Entries are grouped by [`name_key`], the first spelling seen for a group is
/// used for display. Entries outside the week are expected to be filtered by
/// the caller's query and are not checked here.
pub fn summarize_week(week: &WeekWindow, entries: &[DailyEntry]) -> Vec<WeeklySummary> {
    let divisor = week.divisor() as f64;
    let mut summaries: Vec<WeeklySummary> = entries
        .iter()
        .into_group_map_by(|entry| name_key(&entry.full_name))
        .into_values()
        .map(|entries| {
            let total: u32 = entries.iter().map(|entry| entry.answers.raw_score()).sum();
            let average_score = (total as f64 / divisor * 100.0).min(MAX_AVERAGE_SCORE);
            WeeklySummary {
                full_name: entries[0].full_name.clone(),
                average_score,
                num_entries: entries.len() as u32,
            }
        })
        .collect();

    let order = NameOrder::new();
    summaries.sort_by(|a, b| order.compare(&a.full_name, &b.full_name));
    summaries
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn first_week() -> WeekWindow {
        WeekWindow::starting(NaiveDate::from_ymd_opt(2025, 1, 26).unwrap())
    }

    fn regular_week() -> WeekWindow {
        WeekWindow::starting(NaiveDate::from_ymd_opt(2025, 2, 2).unwrap())
    }

    fn entry(name: &str, day: u32, answer: &str) -> DailyEntry {
        DailyEntry {
            full_name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 2, day, 18, 30, 0).unwrap(),
            answers: DailyAnswers::all(answer),
        }
    }

    #[test]
    fn one_perfect_day_in_a_regular_week() {
        let summaries = summarize_week(&regular_week(), &[entry("Jane Doe", 3, "yes")]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].full_name, "Jane Doe");
        assert_eq!(summaries[0].num_entries, 1);
        assert!((summaries[0].average_score - 700.0 / 49.0).abs() < 1e-9);
        assert_eq!(summaries[0].display_score(), "14.29");
    }

    #[test]
    fn first_week_divides_by_56() {
        let entries: Vec<_> = (1..=7).map(|_| entry("Sam", 1, "yes")).collect();
        let summaries = summarize_week(&first_week(), &entries);
        assert_eq!(summaries[0].display_score(), "87.50");
        assert_eq!(summaries[0].num_entries, 7);
    }

    #[test]
    fn score_is_capped_at_100() {
        let entries: Vec<_> = (1..=9).map(|day| entry("Sam", day, "yes")).collect();
        let summaries = summarize_week(&regular_week(), &entries);
        assert_eq!(summaries[0].average_score, MAX_AVERAGE_SCORE);

        let nothing = summarize_week(&regular_week(), &[entry("Sam", 3, "no")]);
        assert_eq!(nothing[0].average_score, 0.0);
    }

    #[test]
    fn differently_cased_names_merge() {
        let entries = vec![
            entry("Jane Doe", 3, "yes"),
            entry("zoe", 3, "no"),
            entry("jane doe", 4, "yes"),
            entry("Adam", 5, "yes"),
        ];
        let summaries = summarize_week(&regular_week(), &entries);

        let names: Vec<_> = summaries.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "Jane Doe", "zoe"]);
        assert_eq!(summaries[1].num_entries, 2);
        assert_eq!(summaries[1].display_score(), "28.57");
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let entries = vec![
            entry("Zoe", 3, "yes"),
            entry("Émile", 4, "no"),
            entry("Adam", 5, "yes"),
        ];
        let summaries = summarize_week(&regular_week(), &entries);

        let names: Vec<_> = summaries.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "Émile", "Zoe"]);
    }

    #[test]
    fn no_entries_no_rows() {
        assert!(summarize_week(&regular_week(), &[]).is_empty());
    }
}
