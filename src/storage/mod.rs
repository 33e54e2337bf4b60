//! Storage layer for persist-kit
//!
//! Structured documents (YAML/JSON), the binary object container, and the
//! CLI settings file.

pub mod binary;
pub mod document;
pub mod settings;
pub mod structured;

pub use binary::{load_object, save_object};
pub use document::Document;
pub use structured::{read_json, read_structured, write_json, write_yaml};
