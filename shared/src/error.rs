#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {0} is missing")]
    MissingField(&'static str),
    #[error("Please answer every question: {}", .0.join(", "))]
    BlankAnswers(Vec<&'static str>),
    #[error("Unknown city group: {0}")]
    UnknownCityGroup(String),
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
    #[error("Week label is required")]
    MissingWeekLabel,
    #[error("Invalid week label")]
    InvalidWeekLabel,
}
