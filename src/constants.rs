//! # Enumerated Value Sets
//!
//! The fixed value sets behind the enumerated columns (status, label,
//! priority). Models accept these as typed enums; filters compare their text
//! form, so an out-of-set filter value matches zero rows instead of erroring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status values as rendered in the table UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    /// Check if this status represents finished work
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Done | Self::Canceled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
            Self::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "canceled" => Ok(Self::Canceled),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

/// Task label values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskLabel {
    Bug,
    Feature,
    Enhancement,
    Documentation,
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bug => write!(f, "bug"),
            Self::Feature => write!(f, "feature"),
            Self::Enhancement => write!(f, "enhancement"),
            Self::Documentation => write!(f, "documentation"),
        }
    }
}

impl std::str::FromStr for TaskLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "enhancement" => Ok(Self::Enhancement),
            "documentation" => Ok(Self::Documentation),
            _ => Err(format!("Invalid task label: {s}")),
        }
    }
}

/// Task priority values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid task priority: {s}")),
        }
    }
}

/// Post status values (same lifecycle set as tasks)
pub type PostStatus = TaskStatus;

/// Permitted value sets for enumerated columns, in text form
pub mod value_sets {
    pub const TASK_STATUSES: &[&str] = &["todo", "in-progress", "done", "canceled"];
    pub const TASK_LABELS: &[&str] = &["bug", "feature", "enhancement", "documentation"];
    pub const TASK_PRIORITIES: &[&str] = &["low", "medium", "high"];
    pub const POST_STATUSES: &[&str] = TASK_STATUSES;

    /// Column names a saved view is allowed to filter on
    pub const VIEW_FILTER_FIELDS: &[&str] = &["title", "status", "priority"];
}
