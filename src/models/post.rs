//! # Post Model
//!
//! Row type and mutations for the posts table. Posts share the task status
//! value set but carry an author and a comment count instead of label and
//! priority.

use crate::constants::PostStatus;
use crate::query::TableSpec;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub author: String,
    pub nb_comments: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New post for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub status: PostStatus,
    pub author: String,
    pub nb_comments: Option<i32>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub status: Option<PostStatus>,
    pub author: Option<String>,
    pub nb_comments: Option<i32>,
}

impl Post {
    /// Table description consumed by the query engine
    pub const TABLE: TableSpec = TableSpec {
        table: "posts",
        sortable: &[
            "title",
            "status",
            "author",
            "nb_comments",
            "created_at",
            "updated_at",
        ],
        default_order: "created_at DESC, id DESC",
    };

    /// Create a new post
    pub async fn create(pool: &PgPool, new_post: &NewPost) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, status, author, nb_comments)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, status, author, nb_comments, created_at, updated_at
            "#,
        )
        .bind(&new_post.title)
        .bind(new_post.status.to_string())
        .bind(&new_post.author)
        .bind(new_post.nb_comments.unwrap_or(0))
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Find a post by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, status, author, nb_comments, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Apply a partial update to one post.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &PostChanges,
    ) -> Result<Option<Post>, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                status = COALESCE($3, status),
                author = COALESCE($4, author),
                nb_comments = COALESCE($5, nb_comments),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, status, author, nb_comments, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.status.map(|s| s.to_string()))
        .bind(changes.author.as_deref())
        .bind(changes.nb_comments)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Apply the same partial update to every post in `ids`.
    pub async fn update_many(
        pool: &PgPool,
        ids: &[Uuid],
        changes: &PostChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                status = COALESCE($3, status),
                updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .bind(changes.title.as_deref())
        .bind(changes.status.map(|s| s.to_string()))
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete one post; returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every post in `ids`; returns the number removed.
    pub async fn delete_many(pool: &PgPool, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
