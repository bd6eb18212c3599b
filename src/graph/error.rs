use derive_more::{Display, Error, IsVariant};

/// An edge was added between nodes which aren't both in the graph.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cannot add an edge, missing the {endpoint}!")]
pub struct MissingNode {
    pub endpoint: Endpoint,
}

impl MissingNode {
    /// Succeeds only when both endpoints are present.
    pub(crate) const fn check(has_from: bool, has_to: bool) -> Result<(), MissingNode> {
        let endpoint = match (has_from, has_to) {
            (true, true) => return Ok(()),
            (false, true) => Endpoint::From,
            (true, false) => Endpoint::To,
            (false, false) => Endpoint::Both,
        };
        Err(MissingNode { endpoint })
    }
}

/// Which side of an edge was missing.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Endpoint {
    #[display("source node")]
    From,
    #[display("target node")]
    To,
    #[display("source and target nodes")]
    Both,
}
