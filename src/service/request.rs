//! Raw request shape and its one-time validation into a typed query spec.

use crate::query::{parse_sort, Operator, Page, SortSpec, DEFAULT_PER_PAGE};
use chrono::NaiveDate;
use serde::Deserialize;

/// The raw query-parameter shape accepted verbatim from the table UI.
///
/// Field names and defaults mirror the URL parameters (`page`, `per_page`,
/// `sort` as `"<column>.<asc|desc>"`, resource filter fields, `from`/`to`
/// date bounds, `operator`).
#[derive(Debug, Clone, Deserialize)]
pub struct TableRequest {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    pub sort: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub operator: Option<String>,
}

fn default_page() -> i64 {
    1
}
fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            sort: None,
            title: None,
            status: None,
            priority: None,
            from: None,
            to: None,
            operator: None,
        }
    }
}

/// The validated query spec, built exactly once at the service boundary.
/// Every default substitution happens here; nothing downstream re-checks
/// raw input.
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub page: Page,
    pub sort: Option<SortSpec>,
    pub operator: Operator,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TableQuery {
    pub fn from_request(request: &TableRequest) -> Self {
        Self {
            page: Page::normalize(Some(request.page), Some(request.per_page)),
            sort: request.sort.as_deref().and_then(parse_sort),
            operator: Operator::from_param(request.operator.as_deref()),
            date_from: request.from.as_deref().and_then(parse_date),
            date_to: request.to.as_deref().and_then(parse_date),
        }
    }
}

/// Parse a `yyyy-mm-dd` date bound; anything unparseable is treated as
/// absent rather than an error.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
