use thiserror::Error;

/// Error for BusinessId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BusinessIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BusinessNameError {
    #[error("Business name must not be empty")]
    Empty,

    #[error("Business name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    #[error("Latitude must be within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
}

/// Top-level error for all business-related operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BusinessError {
    #[error("Invalid business ID: {0}")]
    InvalidBusinessId(#[from] BusinessIdError),

    #[error("Invalid business name: {0}")]
    InvalidName(#[from] BusinessNameError),

    #[error("Invalid location: {0}")]
    InvalidLocation(#[from] LocationError),

    #[error("Business not found: {0}")]
    NotFound(String),

    #[error("Business with name {0} already exists")]
    NameAlreadyExists(String),

    #[error("Not authorized to modify this business")]
    NotOwner,

    #[error("Member is not a known user: {0}")]
    UnknownMember(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
