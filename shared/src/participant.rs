use std::{cmp::Ordering, str::FromStr};

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum CityGroup {
    #[strum(serialize = "Atlanta, GA")]
    Atlanta,
    #[strum(serialize = "Austin, TX")]
    Austin,
    #[strum(serialize = "Baltimore/DC")]
    BaltimoreDc,
    #[strum(serialize = "Boston (New England)")]
    Boston,
    #[strum(serialize = "Chicago, IL")]
    Chicago,
    #[strum(serialize = "Cincinnati, OH")]
    Cincinnati,
    #[strum(serialize = "Cleveland, OH")]
    Cleveland,
    #[strum(serialize = "Columbus, OH")]
    Columbus,
    // Stored spelling, kept as registered
    #[strum(serialize = "Conneticut / West Mass.")]
    ConnecticutWestMass,
    #[strum(serialize = "Dallas/Ft. Worth")]
    DallasFortWorth,
    #[strum(serialize = "Denver, CO")]
    Denver,
    #[strum(serialize = "Detroit, MI")]
    Detroit,
    #[strum(serialize = "Fort Myers/Cape Coral, FL")]
    FortMyers,
    #[strum(serialize = "Honolulu, HI")]
    Honolulu,
    #[strum(serialize = "Houston, TX")]
    Houston,
    #[strum(serialize = "Hunstville, AL")]
    Huntsville,
    #[strum(serialize = "Indianapolis, IN")]
    Indianapolis,
    #[strum(serialize = "Jacksonville, FL")]
    Jacksonville,
    #[strum(serialize = "Kansas City, MO")]
    KansasCity,
    #[strum(serialize = "Las Vegas, NV")]
    LasVegas,
    #[strum(serialize = "Lexington, KY")]
    Lexington,
    #[strum(serialize = "Los Angeles, CA")]
    LosAngeles,
    #[strum(serialize = "Miami/West Palm Beach, FL")]
    Miami,
    #[strum(serialize = "Milwaukee, WI")]
    Milwaukee,
    #[strum(serialize = "Nashville, TN")]
    Nashville,
    #[strum(serialize = "New York City, NY")]
    NewYorkCity,
    #[strum(serialize = "North Carolina")]
    NorthCarolina,
    #[strum(serialize = "Oklahoma")]
    Oklahoma,
    #[strum(serialize = "Orlando, FL")]
    Orlando,
    #[strum(serialize = "Philadelphia, PA")]
    Philadelphia,
    #[strum(serialize = "Phoenix, AZ")]
    Phoenix,
    #[strum(serialize = "Pittsburgh, PA")]
    Pittsburgh,
    #[strum(serialize = "Richmond, VA")]
    Richmond,
    #[strum(serialize = "San Antonio, TX")]
    SanAntonio,
    #[strum(serialize = "San Diego, CA")]
    SanDiego,
    #[strum(serialize = "San Francisco/San Jose, CA")]
    SanFrancisco,
    #[strum(serialize = "Seattle, WA")]
    Seattle,
    #[strum(serialize = "South Carolina")]
    SouthCarolina,
    #[strum(serialize = "St. Louis, MO")]
    StLouis,
    #[strum(serialize = "Tampa, FL")]
    Tampa,
    #[strum(serialize = "West Virginia")]
    WestVirginia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, IntoStaticStr)]
pub enum Priority {
    #[strum(serialize = "Weight Loss")]
    WeightLoss,
    #[strum(serialize = "Mental Health/Mindset")]
    MentalHealth,
    #[strum(serialize = "Healthy Mindful Eating")]
    MindfulEating,
    #[strum(serialize = "Working Out/Movement")]
    Movement,
    #[strum(serialize = "Discipline/Consistency/Sustainability")]
    Discipline,
}

pub fn city_group_labels() -> Vec<&'static str> {
    CityGroup::iter().map(Into::into).collect()
}

pub fn priority_labels() -> Vec<&'static str> {
    Priority::iter().map(Into::into).collect()
}

/// A validated registration, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub full_name: String,
    pub city_group: CityGroup,
    pub priority: Priority,
    pub personal_goal: String,
    pub leader_interest: bool,
}

impl NewParticipant {
    pub fn new(
        full_name: &str,
        city_group: &str,
        priority: &str,
        personal_goal: &str,
        leader_interest: bool,
    ) -> Result<Self, ValidationError> {
        let full_name = required("fullName", full_name)?;
        let city_group = required("cityGroup", city_group)?;
        let priority = required("priority", priority)?;
        let personal_goal = required("personalGoal", personal_goal)?;

        Ok(Self {
            full_name: full_name.to_string(),
            city_group: CityGroup::from_str(city_group)
                .map_err(|_| ValidationError::UnknownCityGroup(city_group.to_string()))?,
            priority: Priority::from_str(priority)
                .map_err(|_| ValidationError::UnknownPriority(priority.to_string()))?,
            personal_goal: personal_goal.to_string(),
            leader_interest,
        })
    }
}

pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Key that identifies a participant across differently cased spellings.
pub fn name_key(full_name: &str) -> String {
    full_name.trim().to_lowercase()
}

/// Display order of participant names.
///
/// Uses the root locale collation, so accents and case only break ties
/// ("Émile" sorts with the other E names, "bob" before "Bob").
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        options.case_first = Some(CaseFirst::LowerFirst);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Falling back to case-insensitive name order: {e}");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a)),
        }
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted, with exact duplicates collapsed.
pub fn sorted_unique_names(mut names: Vec<String>) -> Vec<String> {
    let order = NameOrder::new();
    names.sort_by(|a, b| order.compare(a, b));
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_labels() {
        assert_eq!(city_group_labels().len(), 41);
        assert_eq!(city_group_labels()[0], "Atlanta, GA");
        assert_eq!(priority_labels().len(), 5);
        assert_eq!(
            Priority::from_str("Working Out/Movement").unwrap(),
            Priority::Movement
        );
        assert_eq!(CityGroup::Huntsville.to_string(), "Hunstville, AL");
    }

    #[test]
    fn registration_requires_every_field() {
        let participant =
            NewParticipant::new(" Jane Doe ", "Tampa, FL", "Weight Loss", "Run a 5k", true).unwrap();
        assert_eq!(participant.full_name, "Jane Doe");
        assert_eq!(participant.city_group, CityGroup::Tampa);
        assert_eq!(participant.priority, Priority::WeightLoss);

        assert_eq!(
            NewParticipant::new("", "Tampa, FL", "Weight Loss", "Run", false),
            Err(ValidationError::MissingField("fullName"))
        );
        assert_eq!(
            NewParticipant::new("Jane", "Tampa, FL", "Weight Loss", "   ", false),
            Err(ValidationError::MissingField("personalGoal"))
        );
        assert_eq!(
            NewParticipant::new("Jane", "Gotham", "Weight Loss", "Run", false),
            Err(ValidationError::UnknownCityGroup("Gotham".to_string()))
        );
        assert_eq!(
            NewParticipant::new("Jane", "Tampa, FL", "Sleep", "Run", false),
            Err(ValidationError::UnknownPriority("Sleep".to_string()))
        );
    }

    #[test]
    fn names_sort_case_insensitively() {
        let names = vec![
            "bob".to_string(),
            "Alice".to_string(),
            "alice".to_string(),
            "Bob".to_string(),
            "Alice".to_string(),
            "carol".to_string(),
        ];
        assert_eq!(
            sorted_unique_names(names),
            vec!["alice", "Alice", "bob", "Bob", "carol"]
        );
        assert_eq!(name_key("  Jane DOE "), "jane doe");
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let names = vec!["Zoe".to_string(), "Émile".to_string(), "Eve".to_string()];
        assert_eq!(sorted_unique_names(names), vec!["Émile", "Eve", "Zoe"]);

        let order = NameOrder::new();
        assert_eq!(order.compare("Ana", "Ángel"), Ordering::Less);
        assert_eq!(order.compare("élan", "Elan"), Ordering::Greater);
        assert_eq!(order.compare("Zoë", "Zoe"), Ordering::Greater);
    }
}
