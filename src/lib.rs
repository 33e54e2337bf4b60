//! # persist-kit
//!
//! Persistence and encoding utilities for ML project scaffolding: YAML/JSON
//! documents, a binary object container, directory and file-size helpers, and
//! a base64 image codec.
//!
//! Every operation is a synchronous pass-through to its format library and
//! takes the [`utils::logging::Logger`] it reports to.
//!
//! ```rust,no_run
//! use persist_kit::storage::{read_structured, write_json};
//! use persist_kit::utils::logging::LogFacade;
//!
//! # fn main() -> persist_kit::Result<()> {
//! let config = read_structured("config/config.yaml", &LogFacade)?;
//! let root: String = config.field("artifacts_root")?;
//! write_json("scores.json", &config, &LogFacade)?;
//! # Ok(())
//! # }
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Storage/Utils)
pub mod cli; // Command-line interface
pub mod storage; // Structured documents, binary objects, settings

/// Support modules (used across layers)
pub mod error; // Error handling
pub mod utils; // Filesystem, image codec, logging

pub type Result<T> = std::result::Result<T, AppError>;
