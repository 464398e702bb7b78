pub mod date;
pub mod error;
pub mod operator;
pub mod options;
pub mod query;
pub mod settings;

pub use date::DateFilter;
pub use options::{FilterKind, FilterOptions, InputType};
pub use query::FilterQuery;
