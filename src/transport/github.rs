use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::{CreateIssueInput, IssuePatch, IssueTarget, IssueTransport};
use crate::error::TrackerError;

const DEFAULT_API_URL: &str = "https://api.github.com";

const CREATE_ISSUE_MUTATION: &str = r#"
mutation CreateIssue($input: CreateIssueInput!) {
  createIssue(input: $input) {
    issue {
      number
    }
  }
}"#;

/// Production transport over the GitHub API: GraphQL for issue creation,
/// REST for issue updates.
pub struct GitHubTransport {
    base_url: String,
    client: reqwest::Client,
}

impl GitHubTransport {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Point the transport at a different API root (GitHub Enterprise, or a
    /// local stub in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GitHubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct GqlResponse {
    data: Option<GqlData>,
    errors: Option<Vec<GqlError>>,
}

#[derive(Deserialize)]
struct GqlError {
    message: String,
}

#[derive(Deserialize)]
struct GqlData {
    #[serde(rename = "createIssue")]
    create_issue: Option<CreateIssuePayload>,
}

#[derive(Deserialize)]
struct CreateIssuePayload {
    issue: Option<CreatedIssue>,
}

#[derive(Deserialize)]
struct CreatedIssue {
    number: Option<u64>,
}

#[async_trait]
impl IssueTransport for GitHubTransport {
    async fn create_issue(
        &self,
        token: &str,
        input: &CreateIssueInput,
    ) -> Result<Option<u64>, TrackerError> {
        let body = serde_json::json!({
            "query": CREATE_ISSUE_MUTATION,
            "variables": { "input": input },
        });
        let resp = self
            .client
            .post(format!("{}/graphql", self.base_url))
            .bearer_auth(token)
            .header("User-Agent", user_agent())
            .json(&body)
            .send()
            .await
            .context("createIssue request failed")
            .map_err(TrackerError::Remote)?;

        let resp = resp
            .error_for_status()
            .context("createIssue request rejected")
            .map_err(TrackerError::Remote)?;

        let gql: GqlResponse = resp
            .json()
            .await
            .context("failed to parse createIssue response")
            .map_err(TrackerError::Remote)?;

        if let Some(errors) = gql.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(TrackerError::Remote(anyhow::anyhow!(
                "createIssue returned errors: {}",
                messages.join("; ")
            )));
        }

        Ok(gql
            .data
            .and_then(|data| data.create_issue)
            .and_then(|payload| payload.issue)
            .and_then(|issue| issue.number))
    }

    async fn update_issue(
        &self,
        token: &str,
        target: &IssueTarget,
        patch: &IssuePatch,
    ) -> Result<(), TrackerError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}",
            self.base_url, target.owner, target.repo, target.number
        );
        let resp = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .header("User-Agent", user_agent())
            .header("Accept", "application/vnd.github+json")
            .json(patch)
            .send()
            .await
            .with_context(|| format!("issue update request failed for #{}", target.number))
            .map_err(TrackerError::Remote)?;

        resp.error_for_status()
            .with_context(|| format!("issue update rejected for #{}", target.number))
            .map_err(TrackerError::Remote)?;
        Ok(())
    }
}

// GitHub rejects requests without a User-Agent.
fn user_agent() -> String {
    format!("task-tracker/{}", env!("CARGO_PKG_VERSION"))
}
