use thiserror::Error;

/// Errors raised while building a chain.
///
/// Ticking a chain never fails; degenerate geometry is absorbed by the solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    #[error("invalid chain configuration: {0}")]
    InvalidConfiguration(String),
}

impl ChainError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
