//! The query-builder seam date filters write to.

use model::core::value::Value;
use planner::query::{
    ast::{common::Conjunction, expr::Expr},
    proxy::ProxyQuery,
};

/// What a filter may do to a query: append conditions, bind values and
/// ask for fresh parameter ids. Filters never read anything else back.
pub trait FilterQuery {
    fn apply_where(&mut self, condition: Expr, conjunction: Conjunction);

    fn set_parameter(&mut self, name: &str, value: Value);

    /// An id that this query has never returned before.
    fn unique_parameter_id(&mut self) -> usize;

    /// `prefix` with dots replaced by underscores, suffixed with a fresh id.
    fn new_parameter_name(&mut self, prefix: &str) -> String {
        format!("{}_{}", prefix.replace('.', "_"), self.unique_parameter_id())
    }
}

impl FilterQuery for ProxyQuery {
    fn apply_where(&mut self, condition: Expr, conjunction: Conjunction) {
        ProxyQuery::apply_where(self, condition, conjunction);
    }

    fn set_parameter(&mut self, name: &str, value: Value) {
        ProxyQuery::set_parameter(self, name, value);
    }

    fn unique_parameter_id(&mut self) -> usize {
        ProxyQuery::unique_parameter_id(self)
    }
}
