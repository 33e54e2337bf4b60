//! Binary object container: the `PKOB` magic followed by a CBOR body.
//!
//! CBOR is self-describing, so dynamically typed values (`Document`,
//! `serde_json::Value`, untagged enums) load back as well as plain structs.
//! The format only has to round trip values written and read by this crate.

use crate::error::{DeserializationError, StorageError};
use crate::map_io_error;
use crate::utils::error_helpers::{convert_missing_container, display_path};
use crate::utils::logging::Logger;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const MAGIC: &[u8; 4] = b"PKOB";

/// Serialize `value` into a binary container at `path`, replacing any existing file.
pub fn save_object<P, T>(path: P, value: &T, logger: &dyn Logger) -> crate::Result<()>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let mut container = MAGIC.to_vec();
    ciborium::ser::into_writer(value, &mut container).map_err(|e| StorageError::Serialize {
        path: display_path(path),
        message: e.to_string(),
    })?;
    map_io_error!(fs::write(path, container), path)?;

    logger.info(&format!("binary file saved at: {}", display_path(path)));
    Ok(())
}

/// Read back a value written by [`save_object`].
pub fn load_object<P, T>(path: P, logger: &dyn Logger) -> crate::Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let container = fs::read(path).map_err(|e| convert_missing_container(e, path))?;
    let value = decode_container(&container, path)?;

    logger.info(&format!("binary file loaded from: {}", display_path(path)));
    Ok(value)
}

fn decode_container<T: DeserializeOwned>(
    container: &[u8],
    path: &Path,
) -> Result<T, DeserializationError> {
    let mut body = container
        .strip_prefix(MAGIC.as_slice())
        .ok_or_else(|| DeserializationError::BadHeader {
            path: display_path(path),
        })?;

    let value = ciborium::de::from_reader(&mut body).map_err(|source| {
        DeserializationError::Corrupt {
            path: display_path(path),
            source,
        }
    })?;
    if !body.is_empty() {
        return Err(DeserializationError::TrailingBytes {
            path: display_path(path),
            remaining: body.len(),
        });
    }
    Ok(value)
}
