//! Per-field filter configuration.

use crate::error::FilterError;
use chrono_tz::Tz;
use planner::query::ast::common::Conjunction;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::{fmt, str::FromStr};

/// Which representation temporal values take when bound to the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    #[default]
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "timestamp")]
    Timestamp,
}

impl FromStr for InputType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "datetime" => Ok(InputType::DateTime),
            "timestamp" => Ok(InputType::Timestamp),
            other => Err(FilterError::UnknownInputType(other.to_string())),
        }
    }
}

/// The four date filters: single value or range, by day or by date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Date,
    DateTime,
    DateRange,
    DateTimeRange,
}

impl FilterKind {
    pub const fn from_modes(time: bool, range: bool) -> Self {
        match (time, range) {
            (false, false) => FilterKind::Date,
            (true, false) => FilterKind::DateTime,
            (false, true) => FilterKind::DateRange,
            (true, true) => FilterKind::DateTimeRange,
        }
    }

    /// Start/end pair instead of a single value.
    pub const fn is_range(self) -> bool {
        matches!(self, FilterKind::DateRange | FilterKind::DateTimeRange)
    }

    /// Compares full date-times instead of whole days.
    pub const fn is_time(self) -> bool {
        matches!(self, FilterKind::DateTime | FilterKind::DateTimeRange)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FilterKind::Date => "date",
            FilterKind::DateTime => "datetime",
            FilterKind::DateRange => "date_range",
            FilterKind::DateTimeRange => "datetime_range",
        }
    }

    /// Form type used for the value widget when none is configured.
    pub const fn default_field_type(self) -> &'static str {
        if self.is_time() { "datetime" } else { "date" }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "date" => Ok(FilterKind::Date),
            "datetime" | "date_time" => Ok(FilterKind::DateTime),
            "date_range" => Ok(FilterKind::DateRange),
            "datetime_range" | "date_time_range" => Ok(FilterKind::DateTimeRange),
            other => Err(FilterError::UnknownKind(other.to_string())),
        }
    }
}

/// Options of one filter instance, resolved once when the admin field is
/// defined. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Entity field the filter targets; defaults to the filter name.
    pub field_name: Option<String>,
    pub field_type: Option<String>,
    pub field_options: Map<String, JsonValue>,
    pub label: Option<String>,
    pub condition: Conjunction,
    pub input_type: InputType,
    /// Zone in which wall-clock date-times are read when converted to timestamps.
    pub timezone: Tz,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            field_name: None,
            field_type: None,
            field_options: Map::new(),
            label: None,
            condition: Conjunction::And,
            input_type: InputType::DateTime,
            timezone: Tz::UTC,
        }
    }
}

pub fn parse_condition(s: &str) -> Result<Conjunction, FilterError> {
    match s.to_ascii_lowercase().as_str() {
        "and" => Ok(Conjunction::And),
        "or" => Ok(Conjunction::Or),
        other => Err(FilterError::UnknownCondition(other.to_string())),
    }
}

pub fn parse_timezone(s: &str) -> Result<Tz, FilterError> {
    s.parse::<Tz>()
        .map_err(|_| FilterError::UnknownTimezone(s.to_string()))
}
