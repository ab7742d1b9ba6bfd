//! Composition of filter clauses and date bounds into one predicate.

use super::filter::FilterClause;
use super::predicate::Predicate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Timestamp column bounded by the `from`/`to` request fields.
const CREATED_AT: &str = "created_at";

/// Logical operator applied across a request's filter clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl Operator {
    /// Interpret the raw `operator` query parameter. Anything other than
    /// `"or"` means AND.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("or") => Self::Or,
            _ => Self::And,
        }
    }

    /// The query-parameter form of this operator.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Combine filter clauses and an optional creation-date range into one
/// predicate.
///
/// Clauses with empty values are dropped. The date range only applies when
/// both bounds are present; a partial range is skipped entirely. Returns
/// [`Predicate::NoConstraint`] when nothing remains, which the executor
/// treats as an unrestricted fetch.
pub fn compose(
    clauses: &[FilterClause],
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    operator: Operator,
) -> Predicate {
    let mut predicates: Vec<Predicate> = clauses.iter().map(FilterClause::build).collect();

    if let (Some(from), Some(to)) = (date_from, date_to) {
        predicates.push(Predicate::DateBetween {
            column: CREATED_AT,
            from,
            to,
        });
    }

    match operator {
        Operator::And => Predicate::and(predicates),
        Operator::Or => Predicate::or(predicates),
    }
}
