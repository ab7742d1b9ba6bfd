//! Transactional paginated execution: one row fetch plus one count against
//! the same predicate.

use super::pagination::Page;
use super::predicate::Predicate;
use super::sort::{resolve_order_by, SortSpec};
use crate::error::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Static description of a table resource exposed to the query engine.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    /// Columns a caller may sort by
    pub sortable: &'static [&'static str],
    /// Fallback ORDER BY expression; must produce a total ordering
    pub default_order: &'static str,
}

/// One page of rows together with the total count of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedRows<T> {
    pub rows: Vec<T>,
    pub total_count: i64,
}

/// Fetch one page of rows and the total matching count.
///
/// Both queries run inside a single transaction so an insert or delete
/// landing between them cannot desynchronize the count from the rows.
/// Data-access failures surface as [`crate::error::DatatableError`]; the
/// services above decide how to degrade.
pub async fn fetch_paged<T>(
    pool: &PgPool,
    spec: &TableSpec,
    predicate: &Predicate,
    sort: Option<&SortSpec>,
    page: Page,
) -> Result<PagedRows<T>>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let order_by = resolve_order_by(sort, spec);
    let mut tx = pool.begin().await?;

    let mut select = QueryBuilder::<Postgres>::new(format!("SELECT * FROM {}", spec.table));
    push_where(&mut select, predicate);
    select.push(" ORDER BY ");
    select.push(order_by);
    select.push(" LIMIT ");
    select.push_bind(page.size);
    select.push(" OFFSET ");
    select.push_bind(page.offset());

    let rows = select.build_query_as::<T>().fetch_all(&mut *tx).await?;

    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", spec.table));
    push_where(&mut count, predicate);

    let total_count: i64 = count.build_query_scalar().fetch_one(&mut *tx).await?;

    tx.commit().await?;

    Ok(PagedRows { rows, total_count })
}

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    if predicate.is_constraint() {
        builder.push(" WHERE ");
        predicate.push_sql(builder);
    }
}
