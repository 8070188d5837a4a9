//! Result and error types for the core library

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<duckdb::Error> for Error {
    fn from(e: duckdb::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication failures shown to the user
///
/// `code()` returns the message key the front-ends translate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    LoginRequiredFields,

    #[error("Invalid username or password")]
    LoginFailed,

    #[error("All fields are required")]
    AllFieldsRequired,

    #[error("Passwords do not match")]
    PasswordsMismatch,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Not logged in. Run `dl login` first")]
    NotLoggedIn,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::LoginRequiredFields => "loginRequiredFields",
            AuthError::LoginFailed => "loginFailed",
            AuthError::AllFieldsRequired => "allFieldsRequired",
            AuthError::PasswordsMismatch => "passwordsMismatch",
            AuthError::UsernameTaken => "usernameTaken",
            AuthError::NotLoggedIn => "notLoggedIn",
        }
    }
}

/// Timestamp conversion failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    #[error("Invalid date")]
    InvalidDate,
}

impl ConvertError {
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::InvalidTimestamp => "invalidTimestamp",
            ConvertError::InvalidDate => "invalidDate",
        }
    }
}

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: None,
        }
    }

    /// Create a failed result with context
    pub fn fail_with_context(
        error: impl Into<String>,
        context: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: Some(context),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            // Auth failures carry their message key so callers can translate
            Err(Error::Auth(e)) => Self::fail(e.code()),
            Err(Error::Convert(e)) => Self::fail(e.code()),
            Err(e) => Self::fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_ok() {
        let result: OperationResult<i32> = OperationResult::ok(42);
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_from_result_uses_auth_codes() {
        let err: Result<()> = Err(AuthError::UsernameTaken.into());
        let result: OperationResult<()> = err.into();
        assert!(!result.success);
        assert_eq!(result.error, Some("usernameTaken".to_string()));
    }

    #[test]
    fn test_from_result_other_errors() {
        let err: Result<i32> = Err(Error::validation("bad input"));
        let result: OperationResult<i32> = err.into();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Validation error"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AuthError::PasswordsMismatch.code(), "passwordsMismatch");
        assert_eq!(AuthError::AllFieldsRequired.code(), "allFieldsRequired");
        assert_eq!(ConvertError::InvalidDate.code(), "invalidDate");
    }
}
