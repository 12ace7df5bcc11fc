use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge between nonexistent nodes: {src} -> {dest}")]
    EdgeBetweenNonexistentNodes { src: String, dest: String },
}

impl Error {
    /// True for both the plain and the edge-specific not-found kinds
    pub fn is_node_not_found(&self) -> bool {
        matches!(
            self,
            Error::NodeNotFound(_) | Error::EdgeBetweenNonexistentNodes { .. }
        )
    }
}
