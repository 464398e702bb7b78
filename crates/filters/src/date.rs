//! Date and date-range filters for datagrid queries.
//!
//! A [`DateFilter`] turns the value a user picked in a date widget into WHERE
//! fragments with bound parameters. Malformed or empty input never fails the
//! query: the filter is simply not applied.

use crate::{
    operator::{DateOperator, RangeOperator, SqlOperator},
    options::{FilterKind, FilterOptions, InputType},
    query::FilterQuery,
    settings::{RenderOptions, RenderSettings, WidgetVariant},
};
use chrono_tz::Tz;
use model::{
    core::temporal::Temporal,
    filter::{DateRange, FilterInput, FilterValue},
};
use planner::query::{
    ast::{
        common::Conjunction,
        expr::{BinaryOperator, Expr},
    },
    ident, param, qualified,
};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct DateFilter {
    name: String,
    kind: FilterKind,
    options: FilterOptions,
}

impl DateFilter {
    pub fn new(name: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: FilterOptions::default(),
        }
    }

    /// Whole-day comparison on a single value.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FilterKind::Date)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FilterKind::DateTime)
    }

    /// Start/end pair, each bound widened to whole days.
    pub fn date_range(name: impl Into<String>) -> Self {
        Self::new(name, FilterKind::DateRange)
    }

    pub fn datetime_range(name: impl Into<String>) -> Self {
        Self::new(name, FilterKind::DateTimeRange)
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.options.input_type = input_type;
        self
    }

    pub fn with_condition(mut self, condition: Conjunction) -> Self {
        self.options.condition = condition;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.options.timezone = timezone;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn field_name(&self) -> &str {
        self.options.field_name.as_deref().unwrap_or(&self.name)
    }

    /// Applies raw form data; anything without a `value` member is ignored.
    pub fn apply_json<Q>(&self, query: &mut Q, alias: &str, field: &str, data: &JsonValue)
    where
        Q: FilterQuery + ?Sized,
    {
        match FilterInput::from_json(data) {
            Some(input) => self.apply(query, alias, field, &input),
            None => debug!(filter = %self.name, "Skipping filter without a value"),
        }
    }

    /// Appends the predicate for `input` on `alias.field` to `query`, or
    /// nothing when the input carries no usable value.
    pub fn apply<Q>(&self, query: &mut Q, alias: &str, field: &str, input: &FilterInput)
    where
        Q: FilterQuery + ?Sized,
    {
        let column = if alias.is_empty() {
            ident(field)
        } else {
            qualified(alias, field)
        };

        let fragments = if self.kind.is_range() {
            match &input.value {
                FilterValue::Range(range) => self.range_fragments(query, column, input.kind, *range),
                FilterValue::Single(_) => {
                    debug!(filter = %self.name, "Skipping range filter without start/end");
                    return;
                }
            }
        } else {
            match &input.value {
                FilterValue::Single(Some(value)) => {
                    self.single_fragments(query, column, input.kind, *value)
                }
                _ => {
                    debug!(filter = %self.name, "Skipping filter with an empty value");
                    return;
                }
            }
        };

        self.emit(query, fragments);
    }

    /// Widget variant and display options for the form layer.
    pub fn render_settings(&self) -> RenderSettings {
        let variant = WidgetVariant::for_modes(self.kind.is_time(), self.kind.is_range());
        let field_type = self
            .options
            .field_type
            .clone()
            .unwrap_or_else(|| self.kind.default_field_type().to_string());

        RenderSettings {
            variant,
            options: RenderOptions {
                field_type,
                field_options: self.options.field_options.clone(),
                label: self.options.label.clone(),
                operators: variant.operator_choices(),
            },
        }
    }

    fn range_fragments<Q>(
        &self,
        query: &mut Q,
        column: Expr,
        kind: Option<i64>,
        range: DateRange,
    ) -> Vec<Expr>
    where
        Q: FilterQuery + ?Sized,
    {
        if range.is_empty() {
            debug!(filter = %self.name, "Skipping range filter with empty bounds");
            return Vec::new();
        }

        let (mut start, mut end) = (range.start, range.end);
        if !self.kind.is_time() {
            start = start.map(Temporal::at_start_of_day);
            end = end.map(Temporal::at_end_of_day);
        }
        let (Some(start), Some(end)) = (self.transform_bound(start), self.transform_bound(end))
        else {
            return Vec::new();
        };

        let compare = |op, name: &str| Expr::binary(column.clone(), op, param(name));

        match RangeOperator::resolve(kind) {
            RangeOperator::NotBetween => match (start, end) {
                (Some(start), Some(end)) => {
                    let start_name = self.bind(query, start);
                    let end_name = self.bind(query, end);
                    vec![
                        compare(BinaryOperator::Lt, &start_name)
                            .or(compare(BinaryOperator::Gt, &end_name)),
                    ]
                }
                // A half-open range excludes everything on one side only.
                (Some(start), None) => {
                    let name = self.bind(query, start);
                    vec![compare(BinaryOperator::Lt, &name)]
                }
                (None, Some(end)) => {
                    let name = self.bind(query, end);
                    vec![compare(BinaryOperator::Gt, &name)]
                }
                (None, None) => Vec::new(),
            },
            RangeOperator::Between => {
                let mut fragments = Vec::with_capacity(2);
                if let Some(start) = start {
                    let name = self.bind(query, start);
                    fragments.push(compare(BinaryOperator::GtEq, &name));
                }
                if let Some(end) = end {
                    let name = self.bind(query, end);
                    fragments.push(compare(BinaryOperator::LtEq, &name));
                }
                fragments
            }
        }
    }

    fn single_fragments<Q>(
        &self,
        query: &mut Q,
        column: Expr,
        kind: Option<i64>,
        value: Temporal,
    ) -> Vec<Expr>
    where
        Q: FilterQuery + ?Sized,
    {
        let code = kind.unwrap_or(DateOperator::Equal.code());
        let operator = DateOperator::from_code(code);
        if operator.is_none() {
            warn!(filter = %self.name, code, "Unknown date operator code, comparing with '='");
        }
        let sql_operator = operator.map_or(SqlOperator::Eq, DateOperator::sql);

        let comparison = match sql_operator.comparison() {
            Some(comparison) => comparison,
            None if sql_operator == SqlOperator::IsNull => return vec![column.is_null()],
            None => return vec![column.is_not_null()],
        };
        let Some(value) = self.transform(value) else {
            return Vec::new();
        };

        // "Equal to a date" means anywhere within that day: [value, value + 1 day).
        if !self.kind.is_time() && operator == Some(DateOperator::Equal) {
            let Some(next_day) = value.next_day() else {
                warn!(filter = %self.name, %value, "Date out of range, filter not applied");
                return Vec::new();
            };
            let start_name = self.bind(query, value);
            let end_name = self.bind(query, next_day);
            return vec![
                Expr::binary(column.clone(), BinaryOperator::GtEq, param(&start_name)),
                Expr::binary(column, BinaryOperator::Lt, param(&end_name)),
            ];
        }

        let name = self.bind(query, value);
        vec![Expr::binary(column, comparison, param(&name))]
    }

    /// With `And` every fragment joins the query on its own; with `Or` the
    /// filter's fragments are grouped first so the whole predicate is OR-ed.
    fn emit<Q>(&self, query: &mut Q, fragments: Vec<Expr>)
    where
        Q: FilterQuery + ?Sized,
    {
        if fragments.is_empty() {
            return;
        }
        debug!(filter = %self.name, fragments = fragments.len(), "Applying date filter");

        match self.options.condition {
            Conjunction::And => {
                for fragment in fragments {
                    query.apply_where(fragment, Conjunction::And);
                }
            }
            Conjunction::Or => {
                let grouped = fragments.into_iter().reduce(Expr::and);
                if let Some(grouped) = grouped {
                    query.apply_where(grouped, Conjunction::Or);
                }
            }
        }
    }

    /// `None` when a date-time has no epoch equivalent in the configured zone.
    fn transform(&self, value: Temporal) -> Option<Temporal> {
        match self.options.input_type {
            InputType::Timestamp => {
                let converted = value.into_timestamp(&self.options.timezone);
                if converted.is_none() {
                    warn!(filter = %self.name, %value, "Date out of range, filter not applied");
                }
                converted
            }
            InputType::DateTime => Some(value),
        }
    }

    /// An absent bound stays absent; a present one that fails to convert
    /// drops the whole filter.
    fn transform_bound(&self, bound: Option<Temporal>) -> Option<Option<Temporal>> {
        match bound {
            Some(value) => self.transform(value).map(Some),
            None => Some(None),
        }
    }

    fn bind<Q>(&self, query: &mut Q, value: Temporal) -> String
    where
        Q: FilterQuery + ?Sized,
    {
        let name = query.new_parameter_name(&self.name);
        query.set_parameter(&name, value.into());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use model::core::value::Value;
    use planner::{
        query::{dialect::Postgres, proxy::ProxyQuery},
        table_ref,
    };
    use serde_json::json;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> Temporal {
        Temporal::DateTime(dt(y, m, d, 0, 0, 0))
    }

    fn orders() -> ProxyQuery {
        ProxyQuery::new(table_ref!("orders"), "o")
    }

    /// Records calls so tests can see exactly what a filter asks of its query.
    #[derive(Default)]
    struct RecordingQuery {
        fragments: Vec<(String, Conjunction)>,
        parameters: Vec<(String, Value)>,
        next_id: usize,
    }

    impl FilterQuery for RecordingQuery {
        fn apply_where(&mut self, condition: Expr, conjunction: Conjunction) {
            self.fragments.push((condition.to_string(), conjunction));
        }

        fn set_parameter(&mut self, name: &str, value: Value) {
            self.parameters.push((name.to_string(), value));
        }

        fn unique_parameter_id(&mut self) -> usize {
            self.next_id += 1;
            self.next_id
        }

        fn new_parameter_name(&mut self, _prefix: &str) -> String {
            format!("p{}", self.unique_parameter_id())
        }
    }

    #[test]
    fn test_missing_value_is_a_no_op() {
        let filter = DateFilter::date("created_at");
        for data in [json!(null), json!([]), json!("2024-01-01"), json!({ "type": 3 })] {
            let mut query = orders();
            filter.apply_json(&mut query, "o", "created_at", &data);
            assert!(query.where_fragments().is_empty());
            assert!(query.parameters().is_empty());
        }
    }

    #[test]
    fn test_empty_single_value_is_a_no_op() {
        let mut query = orders();
        DateFilter::date("created_at").apply(&mut query, "o", "created_at", &FilterInput::empty());
        DateFilter::datetime("created_at").apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "type": 1, "value": "" }),
        );

        assert!(query.where_fragments().is_empty());
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_date_equal_spans_the_whole_day() {
        let mut query = orders();
        DateFilter::date("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)),
        );

        assert_eq!(
            query.where_fragments(),
            vec![
                "o.created_at >= :created_at_0",
                "o.created_at < :created_at_1"
            ]
        );
        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::DateTime(dt(2024, 1, 15, 0, 0, 0)))
        );
        assert_eq!(
            query.parameter("created_at_1"),
            Some(&Value::DateTime(dt(2024, 1, 16, 0, 0, 0)))
        );
    }

    #[test]
    fn test_date_equal_with_timestamps_adds_a_day_of_seconds() {
        let mut query = orders();
        DateFilter::date("created_at")
            .with_input_type(InputType::Timestamp)
            .apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::single(dt(2024, 1, 1, 0, 0, 0)),
            );

        assert_eq!(query.parameter("created_at_0"), Some(&Value::Int(1_704_067_200)));
        assert_eq!(
            query.parameter("created_at_1"),
            Some(&Value::Int(1_704_067_200 + 86_400))
        );
    }

    #[test]
    fn test_datetime_equal_is_a_plain_comparison() {
        let mut query = orders();
        DateFilter::datetime("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 1, 15, 10, 30, 0)),
        );

        assert_eq!(query.where_fragments(), vec!["o.created_at = :created_at_0"]);
        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::DateTime(dt(2024, 1, 15, 10, 30, 0)))
        );
    }

    #[test]
    fn test_single_operators() {
        let cases = [
            (1, "o.created_at >= :created_at_0"),
            (2, "o.created_at > :created_at_0"),
            (4, "o.created_at <= :created_at_0"),
            (5, "o.created_at < :created_at_0"),
        ];
        for (code, expected) in cases {
            let mut query = orders();
            DateFilter::date("created_at").apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)).with_kind(code),
            );
            assert_eq!(query.where_fragments(), vec![expected]);
            assert_eq!(query.parameters().len(), 1);
        }
    }

    #[test]
    fn test_null_checks_bind_nothing() {
        let mut query = orders();
        DateFilter::date("deleted_at").apply(
            &mut query,
            "o",
            "deleted_at",
            &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)).with_kind(DateOperator::Null.code()),
        );
        assert_eq!(query.where_fragments(), vec!["o.deleted_at IS NULL"]);
        assert!(query.parameters().is_empty());

        let mut query = orders();
        DateFilter::datetime("deleted_at")
            .with_input_type(InputType::Timestamp)
            .apply(
                &mut query,
                "o",
                "deleted_at",
                &FilterInput::single(0_i64).with_kind(DateOperator::NotNull.code()),
            );
        assert_eq!(query.where_fragments(), vec!["o.deleted_at IS NOT NULL"]);
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_unknown_code_compares_with_equal() {
        let mut query = orders();
        DateFilter::date("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)).with_kind(99),
        );

        assert_eq!(query.where_fragments(), vec!["o.created_at = :created_at_0"]);
        assert_eq!(query.parameters().len(), 1);
    }

    #[test]
    fn test_zero_timestamp_is_not_empty() {
        let mut query = orders();
        DateFilter::datetime("created_at")
            .with_input_type(InputType::Timestamp)
            .apply(&mut query, "o", "created_at", &FilterInput::single(0_i64).with_kind(1));

        assert_eq!(query.where_fragments(), vec!["o.created_at >= :created_at_0"]);
        assert_eq!(query.parameter("created_at_0"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_range_with_both_bounds_empty_is_a_no_op() {
        let mut query = orders();
        let filter = DateFilter::date_range("created_at");
        filter.apply(&mut query, "o", "created_at", &FilterInput::range(None, None));
        filter.apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "value": { "start": "", "end": null } }),
        );
        filter.apply_json(&mut query, "o", "created_at", &json!({ "value": {} }));
        filter.apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 1, 1, 0, 0, 0)),
        );

        assert!(query.where_fragments().is_empty());
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_range_with_a_missing_key_is_a_no_op() {
        let mut query = orders();
        let filter = DateFilter::date_range("created_at");
        filter.apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "value": { "start": "2024-01-01" } }),
        );
        filter.apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "type": 2, "value": { "end": "2024-01-31" } }),
        );
        assert!(query.where_fragments().is_empty());
        assert!(query.parameters().is_empty());

        // Both keys present, one of them empty: the other bound still applies.
        filter.apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "value": { "start": "2024-01-01", "end": "" } }),
        );
        assert_eq!(query.where_fragments(), vec!["o.created_at >= :created_at_0"]);
    }

    #[test]
    fn test_between_with_start_only() {
        let mut query = orders();
        DateFilter::date_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(Some(Temporal::from(dt(2024, 1, 1, 8, 15, 0))), None),
        );

        assert_eq!(query.where_fragments(), vec!["o.created_at >= :created_at_0"]);
        assert_eq!(query.parameters().len(), 1);
        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::DateTime(dt(2024, 1, 1, 0, 0, 0)))
        );
    }

    #[test]
    fn test_date_range_widens_to_whole_days() {
        let mut query = orders();
        DateFilter::date_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(
                Some(Temporal::from(dt(2024, 1, 1, 8, 15, 0))),
                Some(Temporal::from(dt(2024, 1, 31, 8, 15, 0))),
            ),
        );

        assert_eq!(
            query.where_fragments(),
            vec![
                "o.created_at >= :created_at_0",
                "o.created_at <= :created_at_1"
            ]
        );
        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::DateTime(dt(2024, 1, 1, 0, 0, 0)))
        );
        assert_eq!(
            query.parameter("created_at_1"),
            Some(&Value::DateTime(dt(2024, 1, 31, 23, 59, 59)))
        );
    }

    #[test]
    fn test_datetime_range_keeps_times() {
        let mut query = orders();
        DateFilter::datetime_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(None, Some(Temporal::from(dt(2024, 1, 31, 8, 15, 0)))),
        );

        assert_eq!(query.where_fragments(), vec!["o.created_at <= :created_at_0"]);
        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::DateTime(dt(2024, 1, 31, 8, 15, 0)))
        );
    }

    #[test]
    fn test_range_timestamps_are_not_clamped() {
        let mut query = orders();
        DateFilter::date_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(Some(Temporal::Timestamp(1_704_100_000)), None),
        );

        assert_eq!(query.parameter("created_at_0"), Some(&Value::Int(1_704_100_000)));
    }

    #[test]
    fn test_not_between_with_both_bounds() {
        let mut query = orders();
        DateFilter::date_range("created_at")
            .with_input_type(InputType::Timestamp)
            .apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::range(Some(day(2024, 1, 1)), Some(day(2024, 1, 31)))
                    .with_kind(RangeOperator::NotBetween.code()),
            );

        assert_eq!(
            query.where_fragments(),
            vec!["o.created_at < :created_at_0 OR o.created_at > :created_at_1"]
        );
        assert_eq!(query.parameter("created_at_0"), Some(&Value::Int(1_704_067_200)));
        // 2024-01-31 23:59:59 UTC
        assert_eq!(query.parameter("created_at_1"), Some(&Value::Int(1_706_745_599)));
    }

    #[test]
    fn test_not_between_with_one_bound_never_leaves_a_placeholder_unbound() {
        let mut query = orders();
        DateFilter::datetime_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(Some(day(2024, 1, 1)), None).with_kind(2),
        );
        assert_eq!(query.where_fragments(), vec!["o.created_at < :created_at_0"]);
        assert!(query.to_sql(&Postgres).is_ok());

        let mut query = orders();
        DateFilter::datetime_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(None, Some(day(2024, 1, 31))).with_kind(2),
        );
        assert_eq!(query.where_fragments(), vec!["o.created_at > :created_at_0"]);
        assert!(query.to_sql(&Postgres).is_ok());
    }

    #[test]
    fn test_timestamp_conversion_uses_timezone() {
        let mut query = orders();
        DateFilter::datetime("created_at")
            .with_input_type(InputType::Timestamp)
            .with_timezone(Tz::Europe__Paris)
            .apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::single(dt(2024, 1, 1, 0, 0, 0)).with_kind(1),
            );

        assert_eq!(
            query.parameter("created_at_0"),
            Some(&Value::Int(1_704_067_200 - 3_600))
        );
    }

    #[test]
    fn test_out_of_range_timestamp_conversion_skips_the_filter() {
        let filter = DateFilter::datetime("created_at")
            .with_input_type(InputType::Timestamp)
            .with_timezone(Tz::America__New_York);

        let mut query = orders();
        filter.apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({ "type": 1, "value": "+262142-12-31 23:59:59" }),
        );
        filter.apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(NaiveDateTime::MAX),
        );
        assert!(query.where_fragments().is_empty());
        assert!(query.parameters().is_empty());

        let mut query = orders();
        DateFilter::datetime_range("created_at")
            .with_input_type(InputType::Timestamp)
            .with_timezone(Tz::America__New_York)
            .apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::range(Some(day(2024, 1, 1)), Some(Temporal::from(NaiveDateTime::MAX))),
            );
        assert!(query.where_fragments().is_empty());
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_null_check_ignores_an_unconvertible_value() {
        let mut query = orders();
        DateFilter::datetime("deleted_at")
            .with_input_type(InputType::Timestamp)
            .with_timezone(Tz::America__New_York)
            .apply(
                &mut query,
                "o",
                "deleted_at",
                &FilterInput::single(NaiveDateTime::MAX).with_kind(DateOperator::Null.code()),
            );
        assert_eq!(query.where_fragments(), vec!["o.deleted_at IS NULL"]);
    }

    #[test]
    fn test_two_filters_on_one_query_never_share_names() {
        let mut query = orders();
        DateFilter::date("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)),
        );
        DateFilter::date("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::single(dt(2024, 2, 15, 0, 0, 0)),
        );

        assert_eq!(query.parameters().len(), 4);
        let (sql, params) = query.to_sql(&Postgres).unwrap();
        assert_eq!(
            sql,
            r#"SELECT "o".* FROM "orders" AS "o" WHERE (((("o"."created_at" >= $1) AND ("o"."created_at" < $2)) AND ("o"."created_at" >= $3)) AND ("o"."created_at" < $4))"#
        );
        assert_eq!(
            params,
            vec![
                Value::DateTime(dt(2024, 1, 15, 0, 0, 0)),
                Value::DateTime(dt(2024, 1, 16, 0, 0, 0)),
                Value::DateTime(dt(2024, 2, 15, 0, 0, 0)),
                Value::DateTime(dt(2024, 2, 16, 0, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_names_come_from_the_query() {
        let mut query = RecordingQuery::default();
        DateFilter::date_range("created_at").apply(
            &mut query,
            "o",
            "created_at",
            &FilterInput::range(Some(day(2024, 1, 1)), Some(day(2024, 1, 2))),
        );

        assert_eq!(
            query.fragments,
            vec![
                ("o.created_at >= :p1".to_string(), Conjunction::And),
                ("o.created_at <= :p2".to_string(), Conjunction::And),
            ]
        );
        let names: Vec<&str> = query.parameters.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[test]
    fn test_or_condition_groups_the_filter() {
        let mut query = orders();
        query.and_where(qualified("o", "archived_at").is_null());
        DateFilter::date("created_at")
            .with_condition(Conjunction::Or)
            .apply(
                &mut query,
                "o",
                "created_at",
                &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)),
            );

        assert_eq!(
            query.where_clause().unwrap().to_string(),
            "o.archived_at IS NULL OR (o.created_at >= :created_at_0 AND o.created_at < :created_at_1)"
        );
    }

    #[test]
    fn test_json_input_with_numeric_type_string() {
        let mut query = orders();
        DateFilter::datetime_range("created_at").apply_json(
            &mut query,
            "o",
            "created_at",
            &json!({
                "type": "2",
                "value": { "start": "2024-01-01 00:00:00", "end": "2024-01-31 23:00:00" }
            }),
        );

        assert_eq!(
            query.where_fragments(),
            vec!["o.created_at < :created_at_0 OR o.created_at > :created_at_1"]
        );
    }

    #[test]
    fn test_field_without_alias() {
        let mut query = orders();
        DateFilter::datetime("created_at").apply(
            &mut query,
            "",
            "created_at",
            &FilterInput::single(dt(2024, 1, 15, 0, 0, 0)).with_kind(5),
        );
        assert_eq!(query.where_fragments(), vec!["created_at < :created_at_0"]);
    }

    #[test]
    fn test_render_settings() {
        let settings = DateFilter::datetime_range("created_at")
            .with_label("Created")
            .render_settings();
        assert_eq!(settings.variant, WidgetVariant::DateTimeRange);
        assert_eq!(settings.options.field_type, "datetime");
        assert_eq!(settings.options.label.as_deref(), Some("Created"));
        assert_eq!(settings.options.operators.len(), 2);

        let (variant, options) = DateFilter::date("created_at").render_settings().into_pair();
        assert_eq!(variant, WidgetVariant::Date);
        assert_eq!(options.field_type, "date");
        assert_eq!(options.label, None);

        let custom = FilterOptions {
            field_type: Some("birthday".to_string()),
            ..FilterOptions::default()
        };
        let settings = DateFilter::date_range("born_on")
            .with_options(custom)
            .render_settings();
        assert_eq!(settings.variant, WidgetVariant::DateRange);
        assert_eq!(settings.options.field_type, "birthday");
    }

    #[test]
    fn test_render_settings_serialize() {
        let settings = DateFilter::datetime("created_at").render_settings();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["variant"], json!("datetime"));
        assert_eq!(json["options"]["field_type"], json!("datetime"));
        assert_eq!(
            json["options"]["operators"][0],
            json!({ "code": 3, "label": "label_date_type_equal" })
        );
    }
}
