//! Client for representing automation tasks as issues in a remote tracker.
//!
//! Three operations, each a single outbound round trip against the GitHub
//! API: create an issue for a task, close it, or replace its title and body.
//! Ongoing task state lives entirely in the remote tracker; the only local
//! artifact is the [`TaskReference`] returned by creation.
//!
//! ```no_run
//! use task_tracker::{RepoContext, TaskInformation, TaskTracker, TrackerConfig};
//!
//! # async fn run() -> Result<(), task_tracker::TrackerError> {
//! let tracker = TaskTracker::github(
//!     TrackerConfig::from_env(),
//!     RepoContext::new("octocat", "hello-world", "R_kgDOabcdef"),
//! );
//! let reference = tracker
//!     .create_task(&TaskInformation::new("Fix bug", "details"))
//!     .await?;
//! tracker.complete_task(&reference).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod tracker;
pub mod transport;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use model::{RepoContext, TaskInformation, TaskReference};
pub use tracker::TaskTracker;
pub use transport::{
    CreateIssueInput, GitHubTransport, IssuePatch, IssueState, IssueTarget, IssueTransport,
};
