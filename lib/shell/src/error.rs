use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid command")]
    InvalidCommand(String),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error(transparent)]
    Graph(#[from] sparsegraph_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
