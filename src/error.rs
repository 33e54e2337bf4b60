use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    #[error("DeserializationError: {0}")]
    Deserialization(#[from] DeserializationError),
    #[error("DecodeError: {0}")]
    Decode(#[from] DecodeError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
}

/// Failures while reading a structured (YAML/JSON) document or a field of it.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("document is empty: {path}")]
    EmptyDocument { path: String },
    #[error("malformed YAML in {path}: {source}")]
    MalformedYaml {
        path: String,
        source: serde_yaml_ng::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    MalformedJson {
        path: String,
        source: serde_json::Error,
    },
    #[error("expected a mapping at the top of {path}, found {found}")]
    NotAMapping { path: String, found: &'static str },
    #[error("field '{field}' is missing")]
    MissingField { field: String },
    #[error("field '{field}' has an unexpected type: {source}")]
    FieldType {
        field: String,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum DeserializationError {
    #[error("binary file missing or unreadable at {path}: {source}")]
    Missing {
        path: String,
        source: std::io::Error,
    },
    #[error("binary file at {path} has no valid container header")]
    BadHeader { path: String },
    #[error("binary file at {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        source: ciborium::de::Error<std::io::Error>,
    },
    #[error("binary file at {path} has {remaining} unexpected trailing bytes")]
    TrailingBytes { path: String, remaining: usize },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64 input: {source}")]
    InvalidBase64 { source: base64::DecodeError },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Serialization failed for {path}: {message}")]
    Serialize { path: String, message: String },
    #[error("Expected a mapping to write to {path}, found {found}")]
    NotAMapping { path: String, found: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file {path} could not be parsed: {message}")]
    Parse { path: String, message: String },
    #[error("Invalid settings value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "notice",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Parse(ParseError::MissingField { .. } | ParseError::FieldType { .. }) => {
                ErrorSeverity::Medium
            }
            AppError::Parse(_) => ErrorSeverity::High,
            AppError::Deserialization(DeserializationError::Missing { .. }) => {
                ErrorSeverity::Medium
            }
            AppError::Deserialization(_) => ErrorSeverity::High,
            AppError::Decode(_) => ErrorSeverity::Medium,
            AppError::Storage(StorageError::FileIo { source, .. }) => match source.kind() {
                std::io::ErrorKind::PermissionDenied => ErrorSeverity::High,
                std::io::ErrorKind::StorageFull => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Low,
        }
    }

    /// True when the failure is the empty-document condition rather than
    /// a syntax error.
    pub fn is_empty_document(&self) -> bool {
        matches!(self, AppError::Parse(ParseError::EmptyDocument { .. }))
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Parse(ParseError::EmptyDocument { path }) => {
                Some(format!("'{}' has no content; add at least one key", path))
            }
            AppError::Parse(ParseError::NotAMapping { .. }) => {
                Some("the top level of the document must be key: value pairs".to_string())
            }
            AppError::Deserialization(DeserializationError::BadHeader { .. }) => Some(
                "the file was not written by save_object; regenerate it".to_string(),
            ),
            AppError::Decode(_) => {
                Some("expected standard base64 with '=' padding".to_string())
            }
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::EmptyDocument {
            path: "config.yaml".to_string(),
        };
        assert_eq!(format!("{}", err), "document is empty: config.yaml");

        let err = ParseError::NotAMapping {
            path: "params.yaml".to_string(),
            found: "a sequence",
        };
        assert_eq!(
            format!("{}", err),
            "expected a mapping at the top of params.yaml, found a sequence"
        );
    }

    #[test]
    fn test_app_error_display_wraps_inner() {
        let app_err = AppError::from(CliError::InvalidArguments("no input".to_string()));
        assert_eq!(format!("{}", app_err), "CliError: Invalid arguments: no input");

        let app_err = AppError::from(ParseError::MissingField {
            field: "model.epochs".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "ParseError: field 'model.epochs' is missing"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DeserializationError::Missing {
            path: "model.bin".to_string(),
            source: io,
        };
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn test_empty_document_is_distinguished() {
        let empty = AppError::from(ParseError::EmptyDocument {
            path: "a.yaml".to_string(),
        });
        assert!(empty.is_empty_document());
        assert_eq!(empty.severity(), ErrorSeverity::High);
        assert!(empty.troubleshooting_hint().is_some());

        let missing = AppError::from(ParseError::MissingField {
            field: "x".to_string(),
        });
        assert!(!missing.is_empty_document());
        assert_eq!(missing.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_storage_severity_follows_io_kind() {
        let denied = AppError::from(StorageError::FileIo {
            path: "/root".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(denied.severity(), ErrorSeverity::High);

        let other = AppError::from(StorageError::FileIo {
            path: "/tmp/x".to_string(),
            source: std::io::Error::other("boom"),
        });
        assert_eq!(other.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_hint_uses_reason() {
        let err = AppError::Config(ConfigError::InvalidValue {
            field: "log_level".to_string(),
            value: "loud".to_string(),
            reason: "use one of off, error, warn, info, debug, trace".to_string(),
        });
        assert_eq!(
            err.troubleshooting_hint().as_deref(),
            Some("use one of off, error, warn, info, debug, trace")
        );
        assert_eq!(err.severity().label(), "error");
    }
}
