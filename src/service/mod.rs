//! # Table Query Services
//!
//! The public entry point per resource. Each service validates the raw
//! request once, delegates to the query engine, and returns the stable
//! `{ data, pageCount }` envelope. Reads never surface an error: any
//! failure in the pipeline degrades to a valid empty envelope and the
//! cause is recorded through `tracing`.

pub mod posts;
pub mod request;
pub mod tasks;
pub mod views;

pub use posts::get_posts;
pub use request::{TableQuery, TableRequest};
pub use tasks::{get_tasks, task_count_by_priority, task_count_by_status};
pub use views::{get_views, request_with_view};

use serde::Serialize;

/// The envelope every table read resolves to. Serializes as
/// `{ "data": [...], "pageCount": n }` - the shape the table UI binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse<T> {
    pub data: Vec<T>,
    pub page_count: i64,
}

impl<T> TableResponse<T> {
    /// The degraded result substituted for any failed read.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            page_count: 0,
        }
    }
}
