use crate::core::temporal::Temporal;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// A value bound to a query parameter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    DateTime(NaiveDateTime),
}

impl From<Temporal> for Value {
    fn from(temporal: Temporal) -> Self {
        match temporal {
            Temporal::Timestamp(ts) => Value::Int(ts),
            Temporal::DateTime(dt) => Value::DateTime(dt),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::DateTime(v) => write!(f, "'{}'", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
