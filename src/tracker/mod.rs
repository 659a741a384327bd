use std::sync::Arc;

use tracing::debug;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::model::{RepoContext, TaskInformation, TaskReference};
use crate::transport::{
    CreateIssueInput, GitHubTransport, IssuePatch, IssueState, IssueTarget, IssueTransport,
};

/// Client translating task operations into calls against a remote issue
/// tracker. Holds no mutable state; concurrent calls are independent round
/// trips and remote ordering is the service's responsibility.
pub struct TaskTracker {
    config: TrackerConfig,
    repo: RepoContext,
    transport: Arc<dyn IssueTransport>,
}

impl TaskTracker {
    pub fn new(
        config: TrackerConfig,
        repo: RepoContext,
        transport: Arc<dyn IssueTransport>,
    ) -> Self {
        Self {
            config,
            repo,
            transport,
        }
    }

    /// Client backed by the GitHub API.
    pub fn github(config: TrackerConfig, repo: RepoContext) -> Self {
        Self::new(config, repo, Arc::new(GitHubTransport::new()))
    }

    /// Create a tracker issue for a task and return its reference.
    ///
    /// Configured label ids and milestone id are attached verbatim; the
    /// remote service validates them. Fails with `MissingIssueNumber` when
    /// the response carries no usable number — the remote issue may still
    /// have been created in that case.
    pub async fn create_task(
        &self,
        information: &TaskInformation,
    ) -> Result<TaskReference, TrackerError> {
        let token = self.config.bearer_token()?;
        let input = CreateIssueInput {
            repository_id: self.repo.node_id.clone(),
            title: information.title.clone(),
            body: information.body.clone(),
            label_ids: self.config.label_ids.clone(),
            milestone_id: self.config.milestone_id.clone(),
        };
        let number = self.transport.create_issue(token, &input).await?;
        let reference = match number {
            Some(number) if number > 0 => TaskReference::from_number(number)?,
            _ => return Err(TrackerError::MissingIssueNumber),
        };
        debug!(%reference, title = %information.title, "created tracker issue");
        Ok(reference)
    }

    /// Close the referenced issue. Exactly one outbound call; no retry.
    pub async fn complete_task(&self, reference: &TaskReference) -> Result<(), TrackerError> {
        let token = self.config.bearer_token()?;
        let patch = IssuePatch {
            state: Some(IssueState::Closed),
            ..IssuePatch::default()
        };
        self.transport
            .update_issue(token, &self.target(reference), &patch)
            .await?;
        debug!(%reference, "closed tracker issue");
        Ok(())
    }

    /// Replace the referenced issue's title and body. Both fields are always
    /// sent together; the issue's state is untouched.
    pub async fn update_task(
        &self,
        reference: &TaskReference,
        information: &TaskInformation,
    ) -> Result<(), TrackerError> {
        let token = self.config.bearer_token()?;
        let patch = IssuePatch {
            state: None,
            title: Some(information.title.clone()),
            body: Some(information.body.clone()),
        };
        self.transport
            .update_issue(token, &self.target(reference), &patch)
            .await?;
        debug!(%reference, title = %information.title, "updated tracker issue");
        Ok(())
    }

    fn target(&self, reference: &TaskReference) -> IssueTarget {
        IssueTarget {
            owner: self.repo.owner.clone(),
            repo: self.repo.name.clone(),
            number: reference.number(),
        }
    }
}
