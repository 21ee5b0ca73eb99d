use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::ValidationError;

// The 2025 campaign calendar. Tracking opened on Saturday 2025-02-01, so the
// first window is the Sunday-Saturday week of Jan 26, which is week 5 of 2025
// and is shown to participants as week 0. That first week is scored out of 56
// possible answers, every later week out of 7 habits x 7 days.
pub const CAMPAIGN_START: (i32, u32, u32) = (2025, 2, 1);
pub const FIRST_WEEK_NUMBER: u32 = 5;
pub const DISPLAY_WEEK_OFFSET: u32 = 5;
pub const FIRST_WEEK_DIVISOR: u32 = 56;
pub const WEEK_DIVISOR: u32 = 49;

pub type WeekLabel = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub label: WeekLabel,
    pub week_number: u32,
    pub display_week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WeekWindow {
    pub fn starting(start_date: NaiveDate) -> Self {
        let end_date = start_date + chrono::Duration::days(6);
        let week_number = week_of_year(start_date);
        let display_week_number = display_week_number(week_number);
        let label = format!(
            "Week {} - {} to {}",
            display_week_number,
            date_label(start_date),
            date_label(end_date)
        );

        Self {
            label,
            week_number,
            display_week_number,
            start_date,
            end_date,
        }
    }

    /// Inclusive UTC bounds used to select the entries of this week.
    pub fn query_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start_date.and_hms_opt(0, 0, 0).unwrap_or_default();
        let end = self
            .end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or_default();
        (start.and_utc(), end.and_utc())
    }

    pub const fn divisor(&self) -> u32 {
        if self.week_number == FIRST_WEEK_NUMBER {
            FIRST_WEEK_DIVISOR
        } else {
            WEEK_DIVISOR
        }
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let (start, end) = self.query_range();
        start <= timestamp && timestamp <= end
    }
}

pub fn campaign_start() -> NaiveDate {
    let (year, month, day) = CAMPAIGN_START;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Every window from the campaign's first week through the week containing `now`.
/// Always yields at least the first campaign week.
pub fn generate_weeks(now: DateTime<Utc>) -> Vec<WeekWindow> {
    let last_start = start_of_week(now.date_naive());
    let mut start = start_of_week(campaign_start());
    let mut weeks = Vec::new();

    loop {
        weeks.push(WeekWindow::starting(start));
        start = match start.checked_add_days(Days::new(7)) {
            Some(next) if next <= last_start => next,
            _ => break,
        };
    }

    weeks
}

pub fn find_week(label: &str, now: DateTime<Utc>) -> Option<WeekWindow> {
    generate_weeks(now)
        .into_iter()
        .find(|week| week.label == label)
}

pub fn resolve_week(label: Option<&str>, now: DateTime<Utc>) -> Result<WeekWindow, ValidationError> {
    let label = label
        .filter(|label| !label.is_empty())
        .ok_or(ValidationError::MissingWeekLabel)?;
    find_week(label, now).ok_or(ValidationError::InvalidWeekLabel)
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date - chrono::Duration::days(offset as i64)
}

// Sunday-based week of year where week 1 is the week holding January 1st,
// so the last days of December may already count as week 1.
fn week_of_year(date: NaiveDate) -> u32 {
    let week_start = start_of_week(date);
    let next_year = first_week_start(week_start.year() + 1);
    let year_start = if week_start >= next_year {
        next_year
    } else {
        first_week_start(week_start.year())
    };

    ((week_start - year_start).num_days() / 7 + 1) as u32
}

fn first_week_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(start_of_week)
        .unwrap_or_default()
}

const fn display_week_number(week_number: u32) -> u32 {
    if week_number >= DISPLAY_WEEK_OFFSET {
        week_number - DISPLAY_WEEK_OFFSET
    } else {
        week_number
    }
}

fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Weekday};

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn first_campaign_week() {
        let weeks = generate_weeks(at(2025, 2, 1));
        assert_eq!(weeks.len(), 1);

        let first = &weeks[0];
        assert_eq!(first.start_date, date(2025, 1, 26));
        assert_eq!(first.end_date, date(2025, 2, 1));
        assert_eq!(first.week_number, 5);
        assert_eq!(first.display_week_number, 0);
        assert_eq!(first.label, "Week 0 - Jan 26 to Feb 1");
        assert_eq!(first.divisor(), 56);
    }

    #[test]
    fn second_week_uses_regular_divisor() {
        let weeks = generate_weeks(at(2025, 2, 3));
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[1].label, "Week 1 - Feb 2 to Feb 8");
        assert_eq!(weeks[1].week_number, 6);
        assert_eq!(weeks[1].divisor(), 49);
    }

    #[test]
    fn windows_are_contiguous_sunday_weeks() {
        let weeks = generate_weeks(at(2026, 10, 19));
        assert!(weeks.len() > 80);

        for week in &weeks {
            assert_eq!(week.start_date.weekday(), Weekday::Sun);
            assert_eq!(week.end_date, week.start_date + chrono::Duration::days(6));
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start_date - pair[0].start_date, chrono::Duration::days(7));
        }

        let last = weeks.last().unwrap();
        assert!(last.start_date <= date(2026, 10, 19));
        assert!(date(2026, 10, 19) <= last.end_date);
    }

    #[test]
    fn before_campaign_yields_first_week_only() {
        let weeks = generate_weeks(at(2024, 12, 1));
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].start_date, date(2025, 1, 26));
    }

    #[test]
    fn week_numbers_roll_over_with_the_year() {
        let weeks = generate_weeks(at(2026, 1, 10));
        let boundary = weeks
            .iter()
            .find(|week| week.start_date == date(2025, 12, 28))
            .unwrap();
        assert_eq!(boundary.week_number, 1);
        assert_eq!(boundary.display_week_number, 1);
        assert_eq!(boundary.label, "Week 1 - Dec 28 to Jan 3");

        let previous = weeks
            .iter()
            .find(|week| week.start_date == date(2025, 12, 21))
            .unwrap();
        assert_eq!(previous.week_number, 52);
        assert_eq!(previous.display_week_number, 47);
    }

    #[test]
    fn query_range_covers_whole_days() {
        let week = WeekWindow::starting(date(2025, 2, 2));
        let (start, end) = week.query_range();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2025, 2, 8, 23, 59, 59).unwrap() + chrono::Duration::milliseconds(999)
        );
        assert!(week.contains(end));
        assert!(!week.contains(end + chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn resolving_labels() {
        let now = at(2025, 3, 1);
        assert_eq!(
            resolve_week(Some("Week 0 - Jan 26 to Feb 1"), now)
                .unwrap()
                .start_date,
            date(2025, 1, 26)
        );
        assert_eq!(resolve_week(None, now), Err(ValidationError::MissingWeekLabel));
        assert_eq!(resolve_week(Some(""), now), Err(ValidationError::MissingWeekLabel));
        assert_eq!(
            resolve_week(Some("Week 9 - Jan 1 to Jan 7"), now),
            Err(ValidationError::InvalidWeekLabel)
        );
        // Labels of weeks that have not started yet are not offered
        assert_eq!(
            resolve_week(Some("Week 5 - Mar 2 to Mar 8"), at(2025, 2, 20)),
            Err(ValidationError::InvalidWeekLabel)
        );
    }
}
