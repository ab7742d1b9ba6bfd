//! Post table query service.

use super::request::{TableQuery, TableRequest};
use super::TableResponse;
use crate::error::Result;
use crate::logging::{log_table_query, log_table_query_failure};
use crate::models::post::Post;
use crate::query::{compose, fetch_paged, FilterClause};
use sqlx::PgPool;

/// Fetch one page of posts for a raw table request.
///
/// Posts filter on title and status only; a `priority` parameter is
/// ignored. Same fail-soft contract as the task service.
pub async fn get_posts(pool: &PgPool, request: &TableRequest) -> TableResponse<Post> {
    match fetch_post_page(pool, request).await {
        Ok(envelope) => envelope,
        Err(error) => {
            log_table_query_failure("posts", &error);
            TableResponse::empty()
        }
    }
}

async fn fetch_post_page(pool: &PgPool, request: &TableRequest) -> Result<TableResponse<Post>> {
    let query = TableQuery::from_request(request);

    let clauses = [
        FilterClause::contains("title", request.title.as_deref()),
        FilterClause::enumerated("status", request.status.as_deref()),
    ];
    let predicate = compose(&clauses, query.date_from, query.date_to, query.operator);

    let paged = fetch_paged::<Post>(
        pool,
        &Post::TABLE,
        &predicate,
        query.sort.as_ref(),
        query.page,
    )
    .await?;

    log_table_query("posts", query.page.number, query.page.size, paged.total_count);

    Ok(TableResponse {
        page_count: query.page.total_pages(paged.total_count),
        data: paged.rows,
    })
}
