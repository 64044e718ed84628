//! Listing query parameters.
//!
//! Parses the raw `page`/`limit`/`sortBy`/`sortOrder`/`search` query string
//! into a structured form with the pipeline's defaults filled in.

use std::collections::HashMap;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;

/// Default sort key.
pub const DEFAULT_SORT_BY: &str = "createdAt";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending (the default: newest submissions first)
    #[default]
    Desc,
}

impl SortOrder {
    fn parse(value: &str) -> Self {
        match value {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Parsed listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    /// Case-insensitive substring filter; empty means no filtering
    pub search: String,
    /// Record key to sort on
    pub sort_by: String,
    /// Sort direction
    pub sort_order: SortOrder,
    /// 1-indexed page number
    pub page: usize,
    /// Page size
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Desc,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Parse listing parameters from a raw query map.
    ///
    /// Unknown keys are ignored. Values that fail to parse fall back to the
    /// defaults. `page` is clamped to at least 1 (pages are 1-indexed) and
    /// `limit` to at least 1 so the page count stays defined.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut result = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "search" => result.search = value.clone(),
                "sortBy" => {
                    if !value.is_empty() {
                        result.sort_by = value.clone();
                    }
                }
                "sortOrder" => result.sort_order = SortOrder::parse(value),
                "page" => result.page = value.parse().unwrap_or(result.page).max(1),
                "limit" => result.limit = value.parse().unwrap_or(result.limit).max(1),
                _ => {}
            }
        }

        result
    }
}
