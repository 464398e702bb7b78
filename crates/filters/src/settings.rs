//! What the form layer needs to draw a date filter.

use crate::operator::{DateOperator, OperatorChoice, RangeOperator};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// The widget drawn for a filter, picked from its time/range modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetVariant {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "date_range")]
    DateRange,
    #[serde(rename = "datetime_range")]
    DateTimeRange,
}

impl WidgetVariant {
    pub const fn for_modes(time: bool, range: bool) -> Self {
        match (time, range) {
            (true, true) => WidgetVariant::DateTimeRange,
            (true, false) => WidgetVariant::DateTime,
            (false, true) => WidgetVariant::DateRange,
            (false, false) => WidgetVariant::Date,
        }
    }

    pub const fn is_range(self) -> bool {
        matches!(self, WidgetVariant::DateRange | WidgetVariant::DateTimeRange)
    }

    pub fn operator_choices(self) -> Vec<OperatorChoice> {
        if self.is_range() {
            RangeOperator::ALL.into_iter().map(OperatorChoice::from).collect()
        } else {
            DateOperator::ALL.into_iter().map(OperatorChoice::from).collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub field_type: String,
    pub field_options: Map<String, JsonValue>,
    pub label: Option<String>,
    pub operators: Vec<OperatorChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSettings {
    pub variant: WidgetVariant,
    pub options: RenderOptions,
}

impl RenderSettings {
    pub fn into_pair(self) -> (WidgetVariant, RenderOptions) {
        (self.variant, self.options)
    }
}
