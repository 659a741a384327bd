use thiserror::Error;

/// Failure modes of the tracker client. Nothing is retried or swallowed;
/// every variant surfaces directly to the caller.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// No bearer token is configured. Raised before any network call.
    #[error("missing GitHub token (set GITHUB_TOKEN)")]
    MissingCredential,

    /// A task reference did not match the `#<positive integer>` shape.
    #[error("malformed task reference {0:?}, expected \"#<number>\"")]
    MalformedReference(String),

    /// The remote call failed: network, auth, permission, or service-side
    /// validation. Propagated unchanged.
    #[error("issue tracker call failed: {0}")]
    Remote(#[source] anyhow::Error),

    /// The create response was well-formed but carried no usable issue
    /// number. The remote issue may still have been created.
    #[error("createIssue response did not contain an issue number")]
    MissingIssueNumber,
}
