pub mod repo;
pub mod task;

pub use repo::RepoContext;
pub use task::{TaskInformation, TaskReference};
