//! Directory-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory controller is no longer running")]
    ControllerClosed,

    #[error("Controller task failed: {message}")]
    TaskFailed { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_convert() {
        let err: DirectoryError = SharedError::DuplicateVendorId { id: "7".to_string() }.into();
        assert!(matches!(err, DirectoryError::SharedError(SharedError::DuplicateVendorId { .. })));

        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DirectoryError = json.into();
        assert!(matches!(err, DirectoryError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
