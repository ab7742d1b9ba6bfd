//! Task table query service.

use super::request::{TableQuery, TableRequest};
use super::TableResponse;
use crate::error::Result;
use crate::logging::{log_table_query, log_table_query_failure};
use crate::models::task::{PriorityCount, StatusCount, Task};
use crate::query::{compose, fetch_paged, FilterClause};
use sqlx::PgPool;

/// Fetch one page of tasks for a raw table request.
///
/// Never fails: validation problems are recovered by default substitution
/// and any data-access failure degrades to the empty envelope.
pub async fn get_tasks(pool: &PgPool, request: &TableRequest) -> TableResponse<Task> {
    match fetch_task_page(pool, request).await {
        Ok(envelope) => envelope,
        Err(error) => {
            log_table_query_failure("tasks", &error);
            TableResponse::empty()
        }
    }
}

async fn fetch_task_page(pool: &PgPool, request: &TableRequest) -> Result<TableResponse<Task>> {
    let query = TableQuery::from_request(request);

    let clauses = [
        FilterClause::contains("title", request.title.as_deref()),
        FilterClause::enumerated("status", request.status.as_deref()),
        FilterClause::enumerated("priority", request.priority.as_deref()),
    ];
    let predicate = compose(&clauses, query.date_from, query.date_to, query.operator);

    let paged = fetch_paged::<Task>(
        pool,
        &Task::TABLE,
        &predicate,
        query.sort.as_ref(),
        query.page,
    )
    .await?;

    log_table_query("tasks", query.page.number, query.page.size, paged.total_count);

    Ok(TableResponse {
        page_count: query.page.total_pages(paged.total_count),
        data: paged.rows,
    })
}

/// Tasks per status for the dashboard rollup; degrades to empty on failure.
pub async fn task_count_by_status(pool: &PgPool) -> Vec<StatusCount> {
    match Task::count_by_status(pool).await {
        Ok(counts) => counts,
        Err(error) => {
            log_table_query_failure("tasks/status-counts", &error);
            Vec::new()
        }
    }
}

/// Tasks per priority for the dashboard rollup; degrades to empty on failure.
pub async fn task_count_by_priority(pool: &PgPool) -> Vec<PriorityCount> {
    match Task::count_by_priority(pool).await {
        Ok(counts) => counts,
        Err(error) => {
            log_table_query_failure("tasks/priority-counts", &error);
            Vec::new()
        }
    }
}
