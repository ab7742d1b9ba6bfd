//! # Saved View Model
//!
//! A saved view names a reusable table configuration: visible columns plus
//! the filter parameters to re-apply. The collection is capped; creating a
//! view beyond the cap evicts the oldest one in the same transaction.

use crate::error::DatatableError;
use crate::query::Operator;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Maximum number of saved views kept per installation.
pub const MAX_SAVED_VIEWS: i64 = 10;

/// One filter stored inside a saved view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFilter {
    pub field: String,
    pub value: String,
    #[serde(default)]
    pub is_multi: bool,
}

/// Filter parameters stored with a saved view, re-applied over a request
/// when the view is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub operator: Option<Operator>,
    pub sort: Option<String>,
    #[serde(default)]
    pub filters: Vec<ViewFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct View {
    pub id: Uuid,
    pub name: String,
    pub columns: Option<Vec<String>>,
    pub filter_params: Option<Json<FilterParams>>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New view for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewView {
    pub name: String,
    pub columns: Option<Vec<String>>,
    pub filter_params: Option<FilterParams>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewChanges {
    pub name: Option<String>,
    pub columns: Option<Vec<String>>,
    pub filter_params: Option<FilterParams>,
}

impl View {
    /// List saved views, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<View>, sqlx::Error> {
        sqlx::query_as::<_, View>(
            r#"
            SELECT id, name, columns, filter_params, created_at, updated_at
            FROM views
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Find a view by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<View>, sqlx::Error> {
        sqlx::query_as::<_, View>(
            r#"
            SELECT id, name, columns, filter_params, created_at, updated_at
            FROM views
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Create a saved view, evicting the oldest view when the collection
    /// has reached [`MAX_SAVED_VIEWS`]. Insert and eviction share one
    /// transaction.
    pub async fn create(pool: &PgPool, new_view: &NewView) -> crate::error::Result<View> {
        if new_view.name.trim().is_empty() {
            return Err(DatatableError::Validation(
                "view name must not be empty".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        let view = sqlx::query_as::<_, View>(
            r#"
            INSERT INTO views (name, columns, filter_params)
            VALUES ($1, $2, $3)
            RETURNING id, name, columns, filter_params, created_at, updated_at
            "#,
        )
        .bind(&new_view.name)
        .bind(new_view.columns.as_deref())
        .bind(new_view.filter_params.as_ref().map(Json))
        .fetch_one(&mut *tx)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM views")
            .fetch_one(&mut *tx)
            .await?;

        if total >= MAX_SAVED_VIEWS {
            sqlx::query(
                r#"
                DELETE FROM views
                WHERE id = (
                    SELECT id FROM views
                    WHERE id <> $1
                    ORDER BY created_at ASC
                    LIMIT 1
                )
                "#,
            )
            .bind(view.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(view)
    }

    /// Apply a partial update to one view.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &ViewChanges,
    ) -> Result<Option<View>, sqlx::Error> {
        sqlx::query_as::<_, View>(
            r#"
            UPDATE views
            SET name = COALESCE($2, name),
                columns = COALESCE($3, columns),
                filter_params = COALESCE($4, filter_params),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, columns, filter_params, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.columns.as_deref())
        .bind(changes.filter_params.as_ref().map(Json))
        .fetch_optional(pool)
        .await
    }

    /// Delete one view; returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM views WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
