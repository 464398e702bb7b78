//! Operator codes of the date widgets and their SQL counterparts.

use planner::query::ast::expr::BinaryOperator;
use serde::Serialize;
use std::fmt;

/// Operator codes of the single-value date widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOperator {
    GreaterEqual = 1,
    GreaterThan = 2,
    Equal = 3,
    LessEqual = 4,
    LessThan = 5,
    Null = 6,
    NotNull = 7,
}

impl DateOperator {
    /// In the order the widget lists them.
    pub const ALL: [DateOperator; 7] = [
        DateOperator::Equal,
        DateOperator::GreaterEqual,
        DateOperator::GreaterThan,
        DateOperator::LessEqual,
        DateOperator::LessThan,
        DateOperator::Null,
        DateOperator::NotNull,
    ];

    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DateOperator::GreaterEqual),
            2 => Some(DateOperator::GreaterThan),
            3 => Some(DateOperator::Equal),
            4 => Some(DateOperator::LessEqual),
            5 => Some(DateOperator::LessThan),
            6 => Some(DateOperator::Null),
            7 => Some(DateOperator::NotNull),
            _ => None,
        }
    }

    pub const fn sql(self) -> SqlOperator {
        match self {
            DateOperator::Equal => SqlOperator::Eq,
            DateOperator::GreaterEqual => SqlOperator::GtEq,
            DateOperator::GreaterThan => SqlOperator::Gt,
            DateOperator::LessEqual => SqlOperator::LtEq,
            DateOperator::LessThan => SqlOperator::Lt,
            DateOperator::Null => SqlOperator::IsNull,
            DateOperator::NotNull => SqlOperator::IsNotNull,
        }
    }

    /// Translation key shown next to the operator in the form.
    pub const fn label(self) -> &'static str {
        match self {
            DateOperator::Equal => "label_date_type_equal",
            DateOperator::GreaterEqual => "label_date_type_greater_equal",
            DateOperator::GreaterThan => "label_date_type_greater_than",
            DateOperator::LessEqual => "label_date_type_less_equal",
            DateOperator::LessThan => "label_date_type_less_than",
            DateOperator::Null => "label_date_type_null",
            DateOperator::NotNull => "label_date_type_not_null",
        }
    }
}

/// Operator codes of the range widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperator {
    Between = 1,
    NotBetween = 2,
}

impl RangeOperator {
    pub const ALL: [RangeOperator; 2] = [RangeOperator::Between, RangeOperator::NotBetween];

    pub const fn code(self) -> i64 {
        self as i64
    }

    /// `NotBetween` only for its exact code; anything else ranges inclusively.
    pub const fn resolve(code: Option<i64>) -> Self {
        match code {
            Some(2) => RangeOperator::NotBetween,
            _ => RangeOperator::Between,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RangeOperator::Between => "label_date_type_between",
            RangeOperator::NotBetween => "label_date_type_not_between",
        }
    }
}

/// The SQL side of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlOperator {
    Eq,
    GtEq,
    Gt,
    LtEq,
    Lt,
    IsNull,
    IsNotNull,
}

impl SqlOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            SqlOperator::Eq => "=",
            SqlOperator::GtEq => ">=",
            SqlOperator::Gt => ">",
            SqlOperator::LtEq => "<=",
            SqlOperator::Lt => "<",
            SqlOperator::IsNull => "IS NULL",
            SqlOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// The binary operator for comparisons; `None` for the null checks.
    pub const fn comparison(self) -> Option<BinaryOperator> {
        match self {
            SqlOperator::Eq => Some(BinaryOperator::Eq),
            SqlOperator::GtEq => Some(BinaryOperator::GtEq),
            SqlOperator::Gt => Some(BinaryOperator::Gt),
            SqlOperator::LtEq => Some(BinaryOperator::LtEq),
            SqlOperator::Lt => Some(BinaryOperator::Lt),
            SqlOperator::IsNull | SqlOperator::IsNotNull => None,
        }
    }
}

impl fmt::Display for SqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an operator select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorChoice {
    pub code: i64,
    pub label: &'static str,
}

impl From<DateOperator> for OperatorChoice {
    fn from(op: DateOperator) -> Self {
        Self {
            code: op.code(),
            label: op.label(),
        }
    }
}

impl From<RangeOperator> for OperatorChoice {
    fn from(op: RangeOperator) -> Self {
        Self {
            code: op.code(),
            label: op.label(),
        }
    }
}
