//! Test data factories with a builder interface.
//!
//! Not every test binary uses every factory.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use datatable_core::models::{FilterParams, Post, Task, View};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TaskFactory {
    code: String,
    title: Option<String>,
    status: String,
    label: String,
    priority: String,
    created_at: Option<NaiveDateTime>,
}

impl Default for TaskFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFactory {
    pub fn new() -> Self {
        Self {
            // UUID-derived codes keep concurrent factory inserts collision-free
            code: format!("TASK-{}", Uuid::new_v4()),
            title: Some("Fix the flux capacitor".to_string()),
            status: "todo".to_string(),
            label: "bug".to_string(),
            priority: "low".to_string(),
            created_at: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = priority.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn create(&self, pool: &PgPool) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (code, title, status, label, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), COALESCE($6, NOW()))
            RETURNING id, code, title, status, label, priority, created_at, updated_at
            "#,
        )
        .bind(&self.code)
        .bind(self.title.as_deref())
        .bind(&self.status)
        .bind(&self.label)
        .bind(&self.priority)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Clone)]
pub struct PostFactory {
    title: String,
    status: String,
    author: String,
    nb_comments: i32,
    created_at: Option<NaiveDateTime>,
}

impl Default for PostFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFactory {
    pub fn new() -> Self {
        Self {
            title: "Weekly status report".to_string(),
            status: "in-progress".to_string(),
            author: "Morgan".to_string(),
            nb_comments: 0,
            created_at: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn create(&self, pool: &PgPool) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, status, author, nb_comments, created_at, updated_at)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), COALESCE($5, NOW()))
            RETURNING id, title, status, author, nb_comments, created_at, updated_at
            "#,
        )
        .bind(&self.title)
        .bind(&self.status)
        .bind(&self.author)
        .bind(self.nb_comments)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
    }
}

#[derive(Debug, Clone)]
pub struct ViewFactory {
    name: String,
    columns: Option<Vec<String>>,
    filter_params: Option<FilterParams>,
}

impl Default for ViewFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFactory {
    pub fn new() -> Self {
        Self {
            name: format!("view-{}", Uuid::new_v4()),
            columns: None,
            filter_params: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_filter_params(mut self, filter_params: FilterParams) -> Self {
        self.filter_params = Some(filter_params);
        self
    }

    pub async fn create(&self, pool: &PgPool) -> Result<View, sqlx::Error> {
        sqlx::query_as::<_, View>(
            r#"
            INSERT INTO views (name, columns, filter_params)
            VALUES ($1, $2, $3)
            RETURNING id, name, columns, filter_params, created_at, updated_at
            "#,
        )
        .bind(&self.name)
        .bind(self.columns.as_deref())
        .bind(self.filter_params.as_ref().map(Json))
        .fetch_one(pool)
        .await
    }
}
