use filters::error::FilterError;
use planner::query::error::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid filter option: {0}")]
    Filter(#[from] FilterError),

    #[error("Failed to render query: {0}")]
    Query(#[from] QueryError),
}
