//! A query under construction that datagrid filters append conditions to.

use crate::query::{
    ast::{
        common::{Conjunction, TableRef},
        expr::Expr,
        select::Select,
    },
    builder::select::SelectBuilder,
    dialect::Dialect,
    error::QueryError,
    renderer::{Render, Renderer},
};
use model::core::value::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Wraps a base `SELECT` over one root entity and collects WHERE fragments
/// and named parameters from the filters applied to it.
#[derive(Debug, Clone)]
pub struct ProxyQuery {
    base: Select,
    fragments: Vec<Expr>,
    where_clause: Option<Expr>,
    parameters: BTreeMap<String, Value>,
    unique_parameter_id: usize,
}

impl ProxyQuery {
    /// `SELECT alias.* FROM table AS alias`.
    pub fn new(table: TableRef, alias: &str) -> Self {
        let base = SelectBuilder::new()
            .select(vec![Expr::Wildcard(Some(alias.to_string()))])
            .from(table, Some(alias))
            .build();

        Self {
            base,
            fragments: Vec::new(),
            where_clause: None,
            parameters: BTreeMap::new(),
            unique_parameter_id: 0,
        }
    }

    /// Appends a condition, joined to the existing WHERE clause with `conjunction`.
    pub fn apply_where(&mut self, condition: Expr, conjunction: Conjunction) {
        debug!(fragment = %condition, ?conjunction, "Applying where fragment");

        self.where_clause = Some(match self.where_clause.take() {
            None => condition.clone(),
            Some(existing) => match conjunction {
                Conjunction::And => existing.and(condition.clone()),
                Conjunction::Or => existing.or(condition.clone()),
            },
        });
        self.fragments.push(condition);
    }

    pub fn and_where(&mut self, condition: Expr) {
        self.apply_where(condition, Conjunction::And);
    }

    pub fn or_where(&mut self, condition: Expr) {
        self.apply_where(condition, Conjunction::Or);
    }

    /// Binds a value to a placeholder; binding the same name again replaces it.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    /// Returns an id never handed out before by this query.
    pub fn unique_parameter_id(&mut self) -> usize {
        let id = self.unique_parameter_id;
        self.unique_parameter_id += 1;
        id
    }

    pub fn where_clause(&self) -> Option<&Expr> {
        self.where_clause.as_ref()
    }

    /// Each applied fragment in query-language form, in application order.
    pub fn where_fragments(&self) -> Vec<String> {
        self.fragments.iter().map(ToString::to_string).collect()
    }

    /// The full statement for `dialect`, with named placeholders turned into
    /// positional ones and their values collected in the same order.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), QueryError> {
        let mut select = self.base.clone();
        select.where_clause = self.where_clause.clone();

        let mut renderer = Renderer::with_bindings(dialect, &self.parameters);
        select.render(&mut renderer);

        if let Some(name) = renderer.unbound().first() {
            return Err(QueryError::UnboundParameter(name.clone()));
        }

        let (sql, params) = renderer.finish();
        debug!(dialect = %dialect.name(), %sql, params = params.len(), "Rendered query");
        Ok((sql, params))
    }
}
