use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ClinicError {
    /// Whether the error describes a server-side fault whose details must not
    /// reach the client.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClinicError::Database(_) | ClinicError::Internal(_))
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
