//! Defines the core rendering trait and context for converting AST to SQL.

use model::core::value::Value;
use std::collections::BTreeMap;

use crate::query::{ast::common::TableRef, dialect::Dialect};

pub mod expr;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details. Named placeholders
/// are resolved against `bindings` and turned into positional ones.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    bindings: Option<&'a BTreeMap<String, Value>>,
    unbound: Vec<String>,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            bindings: None,
            unbound: Vec::new(),
        }
    }

    pub fn with_bindings(dialect: &'a dyn Dialect, bindings: &'a BTreeMap<String, Value>) -> Self {
        Self {
            bindings: Some(bindings),
            ..Self::new(dialect)
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Placeholder names that had no bound value, in order of appearance.
    pub fn unbound(&self) -> &[String] {
        &self.unbound
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    /// Emits the positional placeholder for a named parameter. A name with
    /// no binding is kept as `:name` and recorded as unbound.
    pub fn add_named_param(&mut self, name: &str) {
        match self.bindings.and_then(|b| b.get(name)) {
            Some(value) => self.add_param(value.clone()),
            None => {
                self.unbound.push(name.to_string());
                self.sql.push(':');
                self.sql.push_str(name);
            }
        }
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.sql.push_str(&self.dialect.quote_identifier(schema));
            self.sql.push('.');
        }
        self.sql.push_str(&self.dialect.quote_identifier(&table.name));
    }
}
