use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemberAPIError {
    #[error("Member with email already exists: {0}")]
    EmailAlreadyExists(String),
    #[error("Member not found: {0}")]
    MemberNotFound(uuid::Uuid),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
