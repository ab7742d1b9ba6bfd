//! Tagged predicate tree for WHERE clause construction.
//!
//! "No constraint" is a variant, not a nullable value, so absent filters are
//! dropped during composition instead of being mistaken for always-false.

use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};

/// A boolean condition over a resource's rows.
///
/// Column names are `&'static str` drawn from the resource's column tables;
/// caller-supplied values are always bound, never interpolated.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Absence of a constraint. Skipped by composition; renders as `TRUE`
    /// if it ever reaches SQL on its own.
    NoConstraint,
    /// Exact equality against a text column
    Eq {
        column: &'static str,
        value: String,
    },
    /// Substring match; the pattern is pre-escaped by the filter builder
    Like {
        column: &'static str,
        pattern: String,
    },
    /// Membership in a fixed list of values
    InList {
        column: &'static str,
        values: Vec<String>,
    },
    /// Closed interval on a timestamp column, bounds at midnight
    DateBetween {
        column: &'static str,
        from: NaiveDate,
        to: NaiveDate,
    },
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Whether this predicate actually restricts the result set.
    pub fn is_constraint(&self) -> bool {
        !matches!(self, Predicate::NoConstraint)
    }

    /// Combine predicates with AND, dropping non-constraints.
    pub fn and(predicates: Vec<Predicate>) -> Predicate {
        Self::combine(predicates, false)
    }

    /// Combine predicates with OR, dropping non-constraints.
    pub fn or(predicates: Vec<Predicate>) -> Predicate {
        Self::combine(predicates, true)
    }

    fn combine(predicates: Vec<Predicate>, use_or: bool) -> Predicate {
        let mut constraints: Vec<Predicate> = predicates
            .into_iter()
            .filter(Predicate::is_constraint)
            .collect();

        match constraints.len() {
            0 => Predicate::NoConstraint,
            1 => constraints.remove(0),
            _ if use_or => Predicate::Or(constraints),
            _ => Predicate::And(constraints),
        }
    }

    /// Render this predicate into the query, binding all values.
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Predicate::NoConstraint => {
                builder.push("TRUE");
            }
            Predicate::Eq { column, value } => {
                builder.push(*column);
                builder.push(" = ");
                builder.push_bind(value.clone());
            }
            Predicate::Like { column, pattern } => {
                builder.push(*column);
                builder.push(" LIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" ESCAPE '\\'");
            }
            Predicate::InList { column, values } => {
                // An empty IN () is not valid SQL; an empty list matches nothing.
                if values.is_empty() {
                    builder.push("FALSE");
                    return;
                }
                builder.push(*column);
                builder.push(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        builder.push(", ");
                    }
                    builder.push_bind(value.clone());
                }
                builder.push(")");
            }
            Predicate::DateBetween { column, from, to } => {
                builder.push(*column);
                builder.push(" >= ");
                builder.push_bind(*from);
                builder.push(" AND ");
                builder.push(*column);
                builder.push(" <= ");
                builder.push_bind(*to);
            }
            Predicate::And(predicates) => Self::push_group(builder, predicates, " AND "),
            Predicate::Or(predicates) => Self::push_group(builder, predicates, " OR "),
        }
    }

    fn push_group(
        builder: &mut QueryBuilder<'_, Postgres>,
        predicates: &[Predicate],
        separator: &str,
    ) {
        // Composition never emits empty groups; render one as no-op anyway.
        if predicates.is_empty() {
            builder.push("TRUE");
            return;
        }
        builder.push("(");
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                builder.push(separator);
            }
            predicate.push_sql(builder);
        }
        builder.push(")");
    }
}
