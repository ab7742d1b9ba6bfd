//! # Table Query Engine
//!
//! Turns UI-supplied filter, sort, and pagination parameters into a safe,
//! counted PostgreSQL query.
//!
//! ## Key Components
//!
//! - [`predicate`] - Tagged predicate tree rendered with bound parameters
//! - [`filter`] - Single filter clause to predicate translation
//! - [`compose`] - AND/OR composition with date-range bounds
//! - [`sort`] - Sort-string parsing and allow-list resolution
//! - [`pagination`] - Page normalization, offsets, and page-count math
//! - [`executor`] - Transactional fetch-plus-count execution
//!
//! ## Safety
//!
//! Column identifiers are compile-time constants drawn from each resource's
//! [`TableSpec`]; caller-supplied values only ever reach the database as
//! bound parameters. An unrecognized sort column falls back to the
//! resource's deterministic default order rather than being interpolated.

pub mod compose;
pub mod executor;
pub mod filter;
pub mod pagination;
pub mod predicate;
pub mod sort;

pub use compose::{compose, Operator};
pub use executor::{fetch_paged, PagedRows, TableSpec};
pub use filter::{FilterClause, MatchMode};
pub use pagination::{Page, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use predicate::Predicate;
pub use sort::{parse_sort, resolve_order_by, SortOrder, SortSpec};
