//! The listing pipeline: search, then sort, then paginate.
//!
//! Order matters: the filter runs first so totals and page counts reflect
//! the filtered set, the sort runs on the filtered set, and the page slice
//! is taken last. Out-of-range pages produce an empty slice, never an
//! error.

use std::cmp::Ordering;

use serde_json::Value;

use crate::store::SubmissionRecord;

use super::params::{ListParams, SortOrder};

/// Record keys the search filter matches against. Search is intentionally
/// scoped to these identity fields; other fields never match.
const SEARCH_FIELDS: [&str; 3] = ["fullName", "email", "department"];

/// A page of submissions plus the counts clients page with.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The page slice, in sorted order
    pub submissions: Vec<SubmissionRecord>,
    /// Total records after filtering (not the page size)
    pub total: usize,
    /// Echoed 1-indexed page number
    pub page: usize,
    /// Total page count for the filtered set
    pub total_pages: usize,
}

/// Runs the full pipeline over the submission collection.
pub fn run(submissions: Vec<SubmissionRecord>, params: &ListParams) -> QueryResult {
    let mut records = submissions;

    if !params.search.is_empty() {
        let needle = params.search.to_lowercase();
        records.retain(|record| matches_search(record, &needle));
    }

    // Stable sort: records with equal (or incomparable) keys keep their
    // encounter order.
    records.sort_by(|a, b| {
        let ordering = compare_values(a.get(&params.sort_by), b.get(&params.sort_by));
        match params.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = records.len();
    let total_pages = total.div_ceil(params.limit);

    let start = (params.page - 1).saturating_mul(params.limit);
    let page_slice = if start >= total {
        Vec::new()
    } else {
        let end = (start + params.limit).min(total);
        records[start..end].to_vec()
    };

    QueryResult {
        submissions: page_slice,
        total,
        page: params.page,
        total_pages,
    }
}

/// Case-insensitive substring match against the fixed search field subset;
/// any field matching retains the record.
fn matches_search(record: &SubmissionRecord, needle: &str) -> bool {
    SEARCH_FIELDS.iter().any(|key| {
        record
            .get(*key)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Natural ordering of sort keys: numeric for numbers, lexicographic for
/// strings, false-before-true for booleans. A missing key compares equal to
/// anything, and mixed types fall back to their text rendering.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => render(x).cmp(&render(y)),
        _ => Ordering::Equal,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, email: &str, dept: &str, age: i64, created: &str) -> SubmissionRecord {
        json!({
            "id": format!("id-{name}"),
            "fullName": name,
            "email": email,
            "department": dept,
            "age": age,
            "createdAt": created,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn sample() -> Vec<SubmissionRecord> {
        vec![
            record("Ada Lovelace", "ada@example.com", "engineering", 36, "2024-01-03T00:00:00.000Z"),
            record("Grace Hopper", "grace@example.com", "engineering", 45, "2024-01-01T00:00:00.000Z"),
            record("Mary Shelley", "mary@books.org", "marketing", 28, "2024-01-02T00:00:00.000Z"),
        ]
    }

    #[test]
    fn test_default_sort_is_created_at_desc() {
        let result = run(sample(), &ListParams::default());
        let names: Vec<&str> = result
            .submissions
            .iter()
            .map(|r| r["fullName"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Ada Lovelace", "Mary Shelley", "Grace Hopper"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_numeric_sort_asc() {
        let params = ListParams {
            sort_by: "age".into(),
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let result = run(sample(), &params);
        let ages: Vec<i64> = result
            .submissions
            .iter()
            .map(|r| r["age"].as_i64().unwrap())
            .collect();
        assert_eq!(ages, [28, 36, 45]);
    }

    #[test]
    fn test_search_is_case_insensitive_or_across_fields() {
        let params = ListParams {
            search: "BOOKS".into(),
            ..Default::default()
        };
        let result = run(sample(), &params);
        assert_eq!(result.total, 1);
        assert_eq!(result.submissions[0]["fullName"], json!("Mary Shelley"));

        // department match
        let params = ListParams {
            search: "engineering".into(),
            ..Default::default()
        };
        assert_eq!(run(sample(), &params).total, 2);
    }

    #[test]
    fn test_search_ignores_unlisted_fields() {
        let params = ListParams {
            search: "36".into(),
            ..Default::default()
        };
        assert_eq!(run(sample(), &params).total, 0);
    }

    #[test]
    fn test_search_runs_before_pagination() {
        let params = ListParams {
            search: "engineering".into(),
            limit: 1,
            ..Default::default()
        };
        let result = run(sample(), &params);
        assert_eq!(result.total, 2);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.submissions.len(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let params = ListParams {
            page: 9,
            ..Default::default()
        };
        let result = run(sample(), &params);
        assert!(result.submissions.is_empty());
        assert_eq!(result.page, 9);
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_missing_sort_key_preserves_encounter_order() {
        let params = ListParams {
            sort_by: "nonexistent".into(),
            ..Default::default()
        };
        let result = run(sample(), &params);
        let names: Vec<&str> = result
            .submissions
            .iter()
            .map(|r| r["fullName"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Ada Lovelace", "Grace Hopper", "Mary Shelley"]);
    }

    #[test]
    fn test_empty_collection() {
        let result = run(Vec::new(), &ListParams::default());
        assert!(result.submissions.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }
}
