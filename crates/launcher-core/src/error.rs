//! Central error types for the launcher.
//!
//! Every failure the launcher can recover from flows through `LauncherError`.
//! Errors implement `Serialize` so host commands can return them over IPC.

use serde::Serialize;
use thiserror::Error;

use crate::registry::ToolKind;

/// Main error type for launcher operations.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// Reading or writing a persisted record failed
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tool window could not be constructed
    #[error("Could not open {tool}: {message}")]
    WindowCreation { tool: ToolKind, message: String },

    /// An existing window refused a show/hide/focus/close request
    #[error("Window error: {0}")]
    Window(String),

    /// A bookmark target could not be handed to the platform
    #[error("Failed to open {target}: {message}")]
    Open { target: String, message: String },

    /// The requested capability is not available on this platform
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Serialize for LauncherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<String> for LauncherError {
    fn from(msg: String) -> Self {
        LauncherError::Other(msg)
    }
}

impl From<&str> for LauncherError {
    fn from(msg: &str) -> Self {
        LauncherError::Other(msg.to_string())
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error, converting it to `LauncherError::Other`.
    fn context(self, msg: &str) -> LauncherResult<T>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F: FnOnce() -> String>(self, f: F) -> LauncherResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context(self, msg: &str) -> LauncherResult<T> {
        self.map_err(|e| LauncherError::Other(format!("{}: {}", msg, e)))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> LauncherResult<T> {
        self.map_err(|e| LauncherError::Other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to `LauncherError::Other` with the given message.
    fn context(self, msg: &str) -> LauncherResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> LauncherResult<T> {
        self.ok_or_else(|| LauncherError::Other(msg.to_string()))
    }
}

/// Type alias for Results using `LauncherError`.
pub type LauncherResult<T> = Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_creation_display() {
        let err = LauncherError::WindowCreation {
            tool: ToolKind::DataManager,
            message: "webview failed".to_string(),
        };
        assert_eq!(err.to_string(), "Could not open Data Manager: webview failed");
    }

    #[test]
    fn test_error_serialization() {
        let err = LauncherError::Open {
            target: "https://example.com".to_string(),
            message: "no handler".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Failed to open https://example.com: no handler\"");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), &str> = Err("original error");
        let msg = result.context("operation failed").unwrap_err().to_string();
        assert!(msg.contains("operation failed"));
        assert!(msg.contains("original error"));
    }

    #[test]
    fn test_result_ext_with_context_ok_passthrough() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(result.with_context(|| "unused".to_string()).unwrap(), 42);
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let msg = opt.context("value was missing").unwrap_err().to_string();
        assert!(msg.contains("value was missing"));
    }
}
