//! YAML and JSON document files.

use crate::error::{ParseError, StorageError};
use crate::map_io_error;
use crate::storage::document::Document;
use crate::utils::error_helpers::{display_path, value_kind};
use crate::utils::logging::Logger;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

const JSON_INDENT: &[u8] = b"    ";

/// Load a YAML file as a [`Document`].
///
/// A file with no content (empty, whitespace, comments only, or an explicit
/// null) fails with [`ParseError::EmptyDocument`] rather than a syntax error.
pub fn read_structured<P: AsRef<Path>>(path: P, logger: &dyn Logger) -> crate::Result<Document> {
    let path = path.as_ref();
    let origin = display_path(path);
    let content = map_io_error!(fs::read_to_string(path), path)?;

    if is_blank_yaml(&content) {
        return Err(ParseError::EmptyDocument { path: origin }.into());
    }

    let value: Value = serde_yaml_ng::from_str(&content).map_err(|source| {
        ParseError::MalformedYaml {
            path: origin.clone(),
            source,
        }
    })?;
    let document = Document::from_value(value, &origin)?;

    logger.info(&format!("yaml file: {} loaded successfully", origin));
    Ok(document)
}

/// Write `data` as YAML, replacing any existing file.
pub fn write_yaml<P, T>(path: P, data: &T, logger: &dyn Logger) -> crate::Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let value = to_mapping(path, data)?;
    let content = serde_yaml_ng::to_string(&value).map_err(|e| StorageError::Serialize {
        path: display_path(path),
        message: e.to_string(),
    })?;
    map_io_error!(fs::write(path, content), path)?;

    logger.info(&format!("yaml file saved at: {}", display_path(path)));
    Ok(())
}

/// Write `data` as JSON indented by four spaces, replacing any existing file.
pub fn write_json<P, T>(path: P, data: &T, logger: &dyn Logger) -> crate::Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let value = to_mapping(path, data)?;

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| StorageError::Serialize {
            path: display_path(path),
            message: e.to_string(),
        })?;
    map_io_error!(fs::write(path, buf), path)?;

    logger.info(&format!("json file saved at: {}", display_path(path)));
    Ok(())
}

/// Load a JSON file as a [`Document`].
pub fn read_json<P: AsRef<Path>>(path: P, logger: &dyn Logger) -> crate::Result<Document> {
    let path = path.as_ref();
    let origin = display_path(path);
    let content = map_io_error!(fs::read_to_string(path), path)?;

    if content.trim().is_empty() {
        return Err(ParseError::EmptyDocument { path: origin }.into());
    }

    let value: Value =
        serde_json::from_str(&content).map_err(|source| ParseError::MalformedJson {
            path: origin.clone(),
            source,
        })?;
    let document = Document::from_value(value, &origin)?;

    logger.info(&format!("json file loaded successfully from: {}", origin));
    Ok(document)
}

/// No node at all: only whitespace, comments and document markers.
fn is_blank_yaml(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn to_mapping<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<Value, StorageError> {
    let value = serde_json::to_value(data).map_err(|e| StorageError::Serialize {
        path: display_path(path),
        message: e.to_string(),
    })?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(StorageError::NotAMapping {
            path: display_path(path),
            found: value_kind(&value),
        })
    }
}
