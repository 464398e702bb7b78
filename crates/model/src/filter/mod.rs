//! The raw value submitted for one field's date filter.

use crate::core::temporal::Temporal;

pub mod decode;

/// One request's filter data: an optional operator code and the value(s).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    /// Operator code picked in the widget. `None` when absent or not an integer.
    pub kind: Option<i64>,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Range(DateRange),
    Single(Option<Temporal>),
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Single(None)
    }
}

/// Start/end pair of a range widget. Either bound may be left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<Temporal>,
    pub end: Option<Temporal>,
}

impl DateRange {
    pub fn new(start: Option<Temporal>, end: Option<Temporal>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl FilterInput {
    pub fn single(value: impl Into<Temporal>) -> Self {
        Self {
            kind: None,
            value: FilterValue::Single(Some(value.into())),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn range(start: Option<Temporal>, end: Option<Temporal>) -> Self {
        Self {
            kind: None,
            value: FilterValue::Range(DateRange::new(start, end)),
        }
    }

    pub fn with_kind(mut self, kind: i64) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The single value, if this input carries one.
    pub fn single_value(&self) -> Option<Temporal> {
        match &self.value {
            FilterValue::Single(value) => *value,
            FilterValue::Range(_) => None,
        }
    }

    /// The start/end pair, if this input carries one.
    pub fn range_value(&self) -> Option<DateRange> {
        match &self.value {
            FilterValue::Range(range) => Some(*range),
            FilterValue::Single(_) => None,
        }
    }
}
