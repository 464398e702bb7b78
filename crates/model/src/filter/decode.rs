//! Lenient decoding of filter data posted by a form.
//!
//! Anything that cannot be read as a date becomes an empty value so that a
//! malformed filter is skipped instead of failing the enclosing query.

use crate::{
    core::temporal::Temporal,
    filter::{DateRange, FilterInput, FilterValue},
};
use serde_json::Value as JsonValue;
use tracing::debug;

impl FilterInput {
    /// Returns `None` when `data` is not an object or has no `value` member.
    pub fn from_json(data: &JsonValue) -> Option<Self> {
        let object = data.as_object()?;
        let value = object.get("value")?;

        Some(Self {
            kind: object.get("type").and_then(decode_kind),
            value: decode_value(value),
        })
    }
}

fn decode_kind(kind: &JsonValue) -> Option<i64> {
    match kind {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64)),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}

fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A range needs both `start` and `end` keys, even if their values are empty.
fn decode_value(value: &JsonValue) -> FilterValue {
    match value {
        JsonValue::Object(bounds) => match (bounds.get("start"), bounds.get("end")) {
            (Some(start), Some(end)) => FilterValue::Range(DateRange {
                start: decode_temporal(start),
                end: decode_temporal(end),
            }),
            _ => {
                debug!("Ignoring range value without both start and end keys");
                FilterValue::Single(None)
            }
        },
        other => FilterValue::Single(decode_temporal(other)),
    }
}

fn decode_temporal(value: &JsonValue) -> Option<Temporal> {
    match value {
        JsonValue::Number(n) => n.as_i64().map(Temporal::Timestamp),
        JsonValue::String(s) => {
            let parsed = Temporal::parse(s);
            if parsed.is_none() && !s.trim().is_empty() {
                debug!(value = %s, "Ignoring unparseable date value");
            }
            parsed
        }
        _ => None,
    }
}
