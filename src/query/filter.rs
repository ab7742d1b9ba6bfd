//! Single filter clause to predicate translation.

use super::predicate::Predicate;

/// How a filter value is matched against its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact equality
    Exact,
    /// Case-sensitive substring match (`LIKE '%value%'`)
    Contains,
}

/// One logical filter request from the table UI: a column, an optional raw
/// value, and how to match it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub column: &'static str,
    pub value: Option<String>,
    pub match_mode: MatchMode,
    /// Enumerated columns (status, priority) match whole values only. The
    /// builder does not validate against the permitted set; an out-of-set
    /// value simply matches zero rows.
    pub enumerated: bool,
}

impl FilterClause {
    /// Free-text clause matched as a substring.
    pub fn contains(column: &'static str, value: Option<&str>) -> Self {
        Self {
            column,
            value: value.map(str::to_string),
            match_mode: MatchMode::Contains,
            enumerated: false,
        }
    }

    /// Free-text clause matched exactly.
    pub fn exact(column: &'static str, value: Option<&str>) -> Self {
        Self {
            column,
            value: value.map(str::to_string),
            match_mode: MatchMode::Exact,
            enumerated: false,
        }
    }

    /// Clause on an enumerated column. A dot-separated value is a faceted
    /// multi-select and becomes an IN list.
    pub fn enumerated(column: &'static str, value: Option<&str>) -> Self {
        Self {
            column,
            value: value.map(str::to_string),
            match_mode: MatchMode::Exact,
            enumerated: true,
        }
    }

    /// Translate this clause into a predicate. An absent or empty value
    /// yields [`Predicate::NoConstraint`], which composition drops.
    pub fn build(&self) -> Predicate {
        let value = match self.value.as_deref() {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Predicate::NoConstraint,
        };

        if self.enumerated && value.contains('.') {
            let values: Vec<String> = value
                .split('.')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            return Predicate::InList {
                column: self.column,
                values,
            };
        }

        match self.match_mode {
            MatchMode::Exact => Predicate::Eq {
                column: self.column,
                value: value.to_string(),
            },
            MatchMode::Contains => Predicate::Like {
                column: self.column,
                pattern: format!("%{}%", escape_like(value)),
            },
        }
    }
}

/// Escape `LIKE` pattern metacharacters so a literal `%` or `_` in a filter
/// value matches itself.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
