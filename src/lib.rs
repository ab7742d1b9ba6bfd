//! # Datatable Core Rust
//!
//! Rust core for server-driven admin data tables, turning raw table-UI query
//! parameters (filters, sort, pagination) into safe, counted PostgreSQL
//! queries and a stable `{ data, pageCount }` envelope.
//!
//! ## Overview
//!
//! The crate is organized as a one-directional pipeline. Raw request
//! parameters are validated once at the service boundary into a typed query
//! spec, lowered into a composable predicate tree, and executed as a
//! fetch-plus-count pair inside a single transaction so the page count can
//! never drift from the rows it describes.
//!
//! ## Module Organization
//!
//! - [`models`] - Row types and single-transaction mutations for each resource
//! - [`query`] - Predicate building, composition, sorting, and paginated execution
//! - [`service`] - Per-resource table query services with the fail-soft read contract
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`constants`] - Enumerated value sets shared by models and filters
//!
//! ## Read Contract
//!
//! Every table read degrades to a valid empty envelope instead of surfacing
//! an error. Consumers branch on "empty vs non-empty", never on failure
//! states; the underlying cause is recorded through `tracing` only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datatable_core::config::DatatableConfig;
//! use datatable_core::service::{get_tasks, TableRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatatableConfig::from_env()?;
//! let pool = config.connect().await?;
//!
//! let request = TableRequest {
//!     sort: Some("title.asc".to_string()),
//!     status: Some("done".to_string()),
//!     ..Default::default()
//! };
//! let envelope = get_tasks(&pool, &request).await;
//! println!("{} rows over {} pages", envelope.data.len(), envelope.page_count);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod service;

pub use config::DatatableConfig;
pub use constants::{PostStatus, TaskLabel, TaskPriority, TaskStatus};
pub use error::{DatatableError, Result};
pub use models::{Post, Task, View};
pub use query::{FilterClause, Operator, Page, Predicate, SortOrder, SortSpec};
pub use service::{get_posts, get_tasks, get_views, TableRequest, TableResponse};
