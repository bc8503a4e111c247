pub mod session;
pub mod task;

pub use session::Session;
pub use task::{Task, TaskFilter, TaskInput, TaskStats, TaskStatus};
