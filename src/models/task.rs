//! # Task Model
//!
//! Row type and mutations for the tasks table, the primary resource behind
//! the admin table. Enumerated columns are stored as text; [`NewTask`] and
//! [`TaskChanges`] accept the typed value sets so writes cannot introduce
//! out-of-set values.
//!
//! ## Database Schema
//!
//! Maps to the `tasks` table:
//! - `id`: Primary key (UUID, generated)
//! - `code`: Human-facing unique code, `TASK-<4 digits>`
//! - `title`: Optional display title
//! - `status` / `label` / `priority`: Enumerated text columns
//! - `created_at` / `updated_at`: Timestamps, auto-populated

use crate::constants::{TaskLabel, TaskPriority, TaskStatus};
use crate::query::TableSpec;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub code: String,
    pub title: Option<String>,
    pub status: String,
    pub label: String,
    pub priority: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New task for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub status: TaskStatus,
    pub label: TaskLabel,
    pub priority: TaskPriority,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub label: Option<TaskLabel>,
    pub priority: Option<TaskPriority>,
}

/// Group-by rollup of tasks per status
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Group-by rollup of tasks per priority
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PriorityCount {
    pub priority: String,
    pub count: i64,
}

impl Task {
    /// Table description consumed by the query engine
    pub const TABLE: TableSpec = TableSpec {
        table: "tasks",
        sortable: &[
            "code",
            "title",
            "status",
            "label",
            "priority",
            "created_at",
            "updated_at",
        ],
        default_order: "created_at DESC, id DESC",
    };

    /// Generate a unique human-facing task code.
    pub fn generate_code() -> String {
        format!("TASK-{:04}", Uuid::new_v4().as_u128() % 10_000)
    }

    /// Create a new task
    pub async fn create(pool: &PgPool, new_task: &NewTask) -> Result<Task, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (code, title, status, label, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, code, title, status, label, priority, created_at, updated_at
            "#,
        )
        .bind(Self::generate_code())
        .bind(new_task.title.as_deref())
        .bind(new_task.status.to_string())
        .bind(new_task.label.to_string())
        .bind(new_task.priority.to_string())
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Find a task by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, code, title, status, label, priority, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Apply a partial update to one task.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                status = COALESCE($3, status),
                label = COALESCE($4, label),
                priority = COALESCE($5, priority),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, code, title, status, label, priority, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.status.map(|s| s.to_string()))
        .bind(changes.label.map(|l| l.to_string()))
        .bind(changes.priority.map(|p| p.to_string()))
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Apply the same partial update to every task in `ids`.
    pub async fn update_many(
        pool: &PgPool,
        ids: &[Uuid],
        changes: &TaskChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                status = COALESCE($3, status),
                label = COALESCE($4, label),
                priority = COALESCE($5, priority),
                updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .bind(changes.title.as_deref())
        .bind(changes.status.map(|s| s.to_string()))
        .bind(changes.label.map(|l| l.to_string()))
        .bind(changes.priority.map(|p| p.to_string()))
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete one task; returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every task in `ids`; returns the number removed.
    pub async fn delete_many(pool: &PgPool, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count tasks grouped by status
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM tasks GROUP BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Count tasks grouped by priority
    pub async fn count_by_priority(pool: &PgPool) -> Result<Vec<PriorityCount>, sqlx::Error> {
        sqlx::query_as::<_, PriorityCount>(
            "SELECT priority, COUNT(*) AS count FROM tasks GROUP BY priority",
        )
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        let code = Task::generate_code();
        assert!(code.starts_with("TASK-"));
        assert_eq!(code.len(), 9);
        assert!(code[5..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sortable_columns_exclude_id() {
        // id participates only in the default-order tiebreak
        assert!(!Task::TABLE.sortable.contains(&"id"));
        assert!(Task::TABLE.sortable.contains(&"created_at"));
    }
}
