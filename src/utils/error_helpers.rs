//! Helper functions for attaching path context to I/O failures.

use crate::error::{DeserializationError, StorageError};
use std::io;
use std::path::Path;

/// Display form of a path used in every error and log line.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Convert an I/O error to StorageError with path context
pub fn convert_io_error(error: io::Error, path: &Path) -> StorageError {
    StorageError::FileIo {
        path: display_path(path),
        source: error,
    }
}

/// Convert an I/O error on a binary container to DeserializationError
pub fn convert_missing_container(error: io::Error, path: &Path) -> DeserializationError {
    DeserializationError::Missing {
        path: display_path(path),
        source: error,
    }
}

/// Short description of a JSON value kind, for NotAMapping errors
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

/// Helper macro for standardizing map_err patterns on filesystem calls
#[macro_export]
macro_rules! map_io_error {
    ($result:expr, $path:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_io_error(e, $path))
    };
}
