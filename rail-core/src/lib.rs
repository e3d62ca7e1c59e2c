pub mod identity;
pub mod operation;
pub mod payload;
pub mod repository;
pub mod response;
pub mod search;

pub use identity::{SessionClaims, TokenIssuer};
pub use operation::Operation;
pub use payload::Payload;
pub use response::{ApiFailure, ApiResponse, ApiSuccess, LoginData, ResponseData, SignupData};
pub use search::{SearchParams, TrainSearchResult};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Conflict: {0}")]
    ConflictError(String),
    #[error("Identity error: {0}")]
    IdentityError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
