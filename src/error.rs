use bytes::Bytes;
use thiserror::Error;
use tonic::{Code, Status};

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Failed precondition: {0}")]
    FailedPrecondition(FieldErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation(FieldErrors::single(field, message))
    }

    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }

    pub fn staff_only() -> Self {
        AppError::PermissionDenied("Staff privileges required".to_string())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Field errors travel as the status message (human readable) and as a JSON
/// object in the status details.
fn field_status(code: Code, errors: &FieldErrors) -> Status {
    Status::with_details(code, errors.to_string(), Bytes::from(errors.to_json()))
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                Status::internal(format!("Database error: {}", e))
            }
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::Validation(errors) => field_status(Code::InvalidArgument, &errors),
            AppError::PermissionDenied(msg) => Status::permission_denied(msg),
            AppError::Unauthenticated => Status::unauthenticated("Authentication required"),
            AppError::FailedPrecondition(errors) => {
                field_status(Code::FailedPrecondition, &errors)
            }
            AppError::Internal(msg) => Status::internal(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_invalid_argument_with_details() {
        let status: Status = AppError::field("name", "An item with this name already exists.").into();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "name: An item with this name already exists.");

        let details: serde_json::Value = serde_json::from_slice(status.details()).unwrap();
        assert_eq!(details["name"][0], "An item with this name already exists.");
    }

    #[test]
    fn test_other_variants() {
        let status: Status = AppError::not_found("Item").into();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Item not found");

        let status: Status = AppError::staff_only().into();
        assert_eq!(status.code(), Code::PermissionDenied);

        let status: Status = AppError::Unauthenticated.into();
        assert_eq!(status.code(), Code::Unauthenticated);

        let status: Status =
            AppError::FailedPrecondition(FieldErrors::single("status", "closed")).into();
        assert_eq!(status.code(), Code::FailedPrecondition);
    }
}
