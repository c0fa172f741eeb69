use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
