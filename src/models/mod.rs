pub mod post;
pub mod task;
pub mod view;

// Re-export core models for easy access
pub use post::{NewPost, Post, PostChanges};
pub use task::{NewTask, PriorityCount, StatusCount, Task, TaskChanges};
pub use view::{FilterParams, NewView, View, ViewChanges, ViewFilter};
