use thiserror::Error;

/// Errors raised while reading filter options from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter kind: {0} (expected date, datetime, date_range or datetime_range)")]
    UnknownKind(String),

    #[error("Unknown input type: {0} (expected datetime or timestamp)")]
    UnknownInputType(String),

    #[error("Unknown condition: {0} (expected and or or)")]
    UnknownCondition(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
