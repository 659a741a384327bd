pub mod github;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TrackerError;

pub use github::GitHubTransport;

/// Input to the GraphQL `createIssue` mutation. Optional fields are omitted
/// from the payload entirely when unset, not sent as empty values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueInput {
    pub repository_id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<String>,
}

/// Path parameters of a REST issue update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTarget {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Body of a REST issue update. Unset fields are not sent, so a close
/// carries only `state` and a title/body edit carries no `state`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IssuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Outbound calls against the remote issue tracker. Constructed once and
/// injected into the client; tests substitute a recording fake.
#[async_trait]
pub trait IssueTransport: Send + Sync {
    /// Issue the create mutation and return the assigned issue number as
    /// received, `None` when the response lacks one. The caller decides
    /// whether a missing number is fatal.
    async fn create_issue(
        &self,
        token: &str,
        input: &CreateIssueInput,
    ) -> Result<Option<u64>, TrackerError>;

    /// Apply a partial update to an existing issue.
    async fn update_issue(
        &self,
        token: &str,
        target: &IssueTarget,
        patch: &IssuePatch,
    ) -> Result<(), TrackerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_input_omits_unset_optionals() {
        let input = CreateIssueInput {
            repository_id: "R_1".into(),
            title: "T".into(),
            body: String::new(),
            label_ids: None,
            milestone_id: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "repositoryId": "R_1", "title": "T", "body": "" })
        );
    }

    #[test]
    fn create_input_serializes_camel_case_overrides() {
        let input = CreateIssueInput {
            repository_id: "R_1".into(),
            title: "T".into(),
            body: "B".into(),
            label_ids: Some(vec!["LA_1".into(), "LA_2".into()]),
            milestone_id: Some("MI_9".into()),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["labelIds"], serde_json::json!(["LA_1", "LA_2"]));
        assert_eq!(json["milestoneId"], "MI_9");
    }

    #[test]
    fn close_patch_carries_only_state() {
        let patch = IssuePatch {
            state: Some(IssueState::Closed),
            ..IssuePatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "closed" }));
    }

    #[test]
    fn edit_patch_carries_no_state() {
        let patch = IssuePatch {
            state: None,
            title: Some("New".into()),
            body: Some("B".into()),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "New", "body": "B" }));
    }
}
