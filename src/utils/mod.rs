//! Utils module - Shared utilities and helpers
//!
//! Filesystem helpers, the base64 image codec, and the logging interfaces
//! passed into every operation.

/// File system operations and path handling
pub mod file;

/// Base64 image encode/decode
pub mod image;

/// Injected logging sinks
pub mod logging;

pub mod error_helpers;

pub use file::{create_directories, file_size_kb};
pub use image::{decode_image, encode_image, encode_image_to_string};
