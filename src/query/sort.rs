//! Sort-string parsing and allow-list resolution.

use super::executor::TableSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A requested sort column and direction, before allow-list validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

/// Parse a `"<column>.<asc|desc>"` sort parameter.
///
/// An order token other than `asc` sorts descending. Returns `None` for an
/// empty string, which falls through to the resource's default order.
pub fn parse_sort(raw: &str) -> Option<SortSpec> {
    let mut parts = raw.split('.').filter(|part| !part.is_empty());
    let column = parts.next()?.to_string();
    let order = match parts.next() {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };
    Some(SortSpec { column, order })
}

/// Resolve the ORDER BY expression for a request.
///
/// A recognized sortable column is used as requested; anything else falls
/// back to the resource's deterministic default, which carries an id
/// tiebreak so pagination cannot drift between pages.
pub fn resolve_order_by(sort: Option<&SortSpec>, spec: &TableSpec) -> String {
    match sort {
        Some(s) if spec.sortable.contains(&s.column.as_str()) => {
            format!("{} {}", s.column, s.order.as_sql())
        }
        _ => spec.default_order.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: TableSpec = TableSpec {
        table: "tasks",
        sortable: &["title", "status", "created_at"],
        default_order: "created_at DESC, id DESC",
    };

    #[test]
    fn test_parse_column_and_order() {
        let sort = parse_sort("title.asc").unwrap();
        assert_eq!(sort.column, "title");
        assert_eq!(sort.order, SortOrder::Asc);

        let sort = parse_sort("title.desc").unwrap();
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_missing_or_garbage_order_token_sorts_descending() {
        assert_eq!(parse_sort("title").unwrap().order, SortOrder::Desc);
        assert_eq!(parse_sort("title.down").unwrap().order, SortOrder::Desc);
    }

    #[test]
    fn test_empty_sort_is_none() {
        assert!(parse_sort("").is_none());
        assert!(parse_sort("..").is_none());
    }

    #[test]
    fn test_recognized_column_resolves_as_requested() {
        let sort = parse_sort("title.asc");
        assert_eq!(resolve_order_by(sort.as_ref(), &SPEC), "title ASC");
    }

    #[test]
    fn test_unrecognized_column_falls_back_to_default() {
        let sort = parse_sort("secret_column.asc");
        assert_eq!(
            resolve_order_by(sort.as_ref(), &SPEC),
            "created_at DESC, id DESC"
        );
    }

    #[test]
    fn test_absent_sort_falls_back_to_default() {
        assert_eq!(resolve_order_by(None, &SPEC), "created_at DESC, id DESC");
    }

    #[test]
    fn test_leading_dot_yields_order_token_as_column() {
        // ".desc" has no column part, so "desc" becomes the column name,
        // which then fails the allow-list and falls back to the default.
        let sort = parse_sort(".desc").unwrap();
        assert_eq!(sort.column, "desc");
        assert_eq!(
            resolve_order_by(Some(&sort), &SPEC),
            "created_at DESC, id DESC"
        );
    }
}
