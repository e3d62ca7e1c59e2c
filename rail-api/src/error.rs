use rail_core::{ApiFailure, CoreError};

/// Internal failure causes, collapsed into a user-facing `ApiFailure` at the dispatcher boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("duplicate account")]
    DuplicateAccount,
    #[error("not found: {0}")]
    NotFoundError(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("internal error: {0}")]
    InternalServerError(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConflictError(_) => AppError::DuplicateAccount,
            CoreError::UnknownOperation(name) => AppError::InvalidEndpoint(name),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl From<AppError> for ApiFailure {
    fn from(err: AppError) -> Self {
        let message = match err {
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::DuplicateAccount => "User with this mobile or email already exists",
            AppError::NotFoundError(_) => "PNR not found",
            AppError::InvalidEndpoint(name) => {
                tracing::warn!(operation = %name, "Call to unknown endpoint");
                "Invalid endpoint"
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                "Internal service error"
            }
        };
        ApiFailure::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_public_messages() {
        let duplicate: ApiFailure = AppError::from(CoreError::ConflictError("x".into())).into();
        assert_eq!(duplicate.message, "User with this mobile or email already exists");

        let unknown: ApiFailure = AppError::from(CoreError::UnknownOperation("bookTicket".into())).into();
        assert_eq!(unknown.message, "Invalid endpoint");

        let overflow: ApiFailure = AppError::from(CoreError::InternalError("expiry overflow".into())).into();
        assert_eq!(overflow.message, "Internal service error");

        let identity: ApiFailure = AppError::from(CoreError::IdentityError("bad key".into())).into();
        assert_eq!(identity.message, "Internal service error");
    }
}
