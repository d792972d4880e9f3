use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("message not found: {0}")]
    NotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl CoreError {
    /// True for business-rule outcomes the caller can act on; false for
    /// storage faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
