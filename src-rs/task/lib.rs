pub mod memory;
pub mod types;

pub use memory::{ApiCall, MemoryTaskApi};
pub use types::{Filter, Task, TaskId, TaskInput, TaskStatus};
