use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A placeholder in the WHERE clause has no value bound to it.
    #[error("Parameter `{0}` is referenced but not bound")]
    UnboundParameter(String),

    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}
