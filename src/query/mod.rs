//! Listing queries: parameter parsing and the search/sort/paginate pipeline.

pub mod params;
pub mod pipeline;

pub use params::{ListParams, SortOrder, DEFAULT_LIMIT, DEFAULT_SORT_BY};
pub use pipeline::{run, QueryResult};
