/// Identifying triple for the target repository, resolved by the caller
/// (typically from local source-control metadata). Never mutated here.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
    /// GitHub's internal node id, consumed by the GraphQL create mutation.
    pub node_id: String,
}

impl RepoContext {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        node_id: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            node_id: node_id.into(),
        }
    }
}
