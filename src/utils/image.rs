//! Base64 transport for image files.

use crate::error::DecodeError;
use crate::map_io_error;
use crate::utils::error_helpers::display_path;
use crate::utils::logging::Logger;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// Decode base64 text and write the raw bytes to `output_path`, replacing any existing file.
///
/// ASCII whitespace (line wrapping from upload handlers) is skipped. Nothing is
/// written when the input is not valid base64.
pub fn decode_image<S, P>(encoded: S, output_path: P, logger: &dyn Logger) -> crate::Result<()>
where
    S: AsRef<[u8]>,
    P: AsRef<Path>,
{
    let output_path = output_path.as_ref();
    let bytes = decode_base64(encoded.as_ref())?;
    map_io_error!(fs::write(output_path, bytes), output_path)?;
    logger.info(&format!("image decoded to: {}", display_path(output_path)));
    Ok(())
}

/// Read the whole file and return its base64 encoding as bytes.
pub fn encode_image<P: AsRef<Path>>(input_path: P, logger: &dyn Logger) -> crate::Result<Vec<u8>> {
    encode_image_to_string(input_path, logger).map(String::into_bytes)
}

pub fn encode_image_to_string<P: AsRef<Path>>(
    input_path: P,
    logger: &dyn Logger,
) -> crate::Result<String> {
    let input_path = input_path.as_ref();
    let bytes = map_io_error!(fs::read(input_path), input_path)?;
    let encoded = STANDARD.encode(bytes);
    logger.info(&format!("image encoded from: {}", display_path(input_path)));
    Ok(encoded)
}

fn decode_base64(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let compact: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact)
        .map_err(|source| DecodeError::InvalidBase64 { source })
}
