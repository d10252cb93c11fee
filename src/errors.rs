use thiserror::Error;

use crate::trades::TradeError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced portfolio or organization is absent. Typically raised
    /// by the storage collaborator before the calculators run.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Cross-tenant access, raised by the access-control collaborator.
    /// The calculators assume pre-validated, same-tenant input.
    #[error("Access denied: {0}")]
    Unauthorized(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
