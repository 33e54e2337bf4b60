//! File system operations and path handling utilities
//!
//! Directory creation and file size reporting for artifact folders.

use crate::map_io_error;
use crate::utils::error_helpers::display_path;
use crate::utils::logging::Logger;
use std::fs;
use std::path::Path;

/// Create every directory in `paths`, in order, together with missing ancestors.
///
/// An existing directory is left alone. With `verbose`, one line is logged per
/// path processed, including paths that already existed.
pub fn create_directories<P: AsRef<Path>>(
    paths: &[P],
    verbose: bool,
    logger: &dyn Logger,
) -> crate::Result<()> {
    for path in paths {
        let path = path.as_ref();
        map_io_error!(fs::create_dir_all(path), path)?;
        if verbose {
            logger.info(&format!("created directory at: {}", display_path(path)));
        }
    }
    Ok(())
}

/// Size of the file at `path` as `"~ <N> KB"`.
///
/// Bytes are divided by 1024 and rounded to the nearest integer; exact halves
/// round to the even neighbour.
pub fn file_size_kb<P: AsRef<Path>>(path: P, logger: &dyn Logger) -> crate::Result<String> {
    let path = path.as_ref();
    let metadata = map_io_error!(fs::metadata(path), path)?;
    let size = format_size_kb(metadata.len());
    logger.info(&format!("size of {}: {}", display_path(path), size));
    Ok(size)
}

pub fn format_size_kb(bytes: u64) -> String {
    let kb = (bytes as f64 / 1024.0).round_ties_even() as u64;
    format!("~ {} KB", kb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, StorageError};
    use crate::utils::logging::MemoryLogger;
    use tempfile::TempDir;

    #[test]
    fn test_create_directories_creates_nested_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("artifacts/data_ingestion/raw");
        let flat = temp_dir.path().join("logs");
        let logger = MemoryLogger::new();

        create_directories(&[&nested, &flat], true, &logger).expect("Failed to create directories");

        assert!(nested.is_dir());
        assert!(flat.is_dir());
        assert_eq!(logger.len(), 2);
        assert!(logger.lines()[0].starts_with("created directory at: "));
        assert!(logger.lines()[0].ends_with("raw"));
    }

    #[test]
    fn test_create_directories_is_idempotent_and_logs_every_call() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let paths = vec![
            temp_dir.path().join("a"),
            temp_dir.path().join("b"),
            temp_dir.path().join("c"),
        ];
        let logger = MemoryLogger::new();

        create_directories(&paths, true, &logger).expect("first call");
        create_directories(&paths, true, &logger).expect("second call");

        assert!(paths.iter().all(|p| p.is_dir()));
        assert_eq!(logger.len(), 6);
        assert_eq!(logger.lines()[0], logger.lines()[3]);
    }

    #[test]
    fn test_create_directories_quiet() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let logger = MemoryLogger::new();

        create_directories(&[temp_dir.path().join("quiet")], false, &logger)
            .expect("Failed to create directory");

        assert!(logger.is_empty());
    }

    #[test]
    fn test_create_directories_fails_over_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("occupied");
        std::fs::write(&file, b"x").expect("Failed to write file");
        let logger = MemoryLogger::new();

        let err = create_directories(&[&file], true, &logger).unwrap_err();

        assert!(matches!(err, AppError::Storage(StorageError::FileIo { .. })));
        assert!(logger.is_empty());
    }

    #[test]
    fn test_file_size_kb_rounds_to_nearest() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let logger = MemoryLogger::new();

        let exact = temp_dir.path().join("exact.bin");
        std::fs::write(&exact, vec![0u8; 2048]).expect("Failed to write file");
        assert_eq!(file_size_kb(&exact, &logger).unwrap(), "~ 2 KB");

        let half = temp_dir.path().join("half.bin");
        std::fs::write(&half, vec![0u8; 1536]).expect("Failed to write file");
        assert_eq!(file_size_kb(&half, &logger).unwrap(), "~ 2 KB");

        assert_eq!(logger.len(), 2);
    }

    #[test]
    fn test_format_size_kb_edges() {
        assert_eq!(format_size_kb(0), "~ 0 KB");
        assert_eq!(format_size_kb(511), "~ 0 KB");
        assert_eq!(format_size_kb(512), "~ 0 KB");
        assert_eq!(format_size_kb(513), "~ 1 KB");
        assert_eq!(format_size_kb(2560), "~ 2 KB");
        assert_eq!(format_size_kb(3584), "~ 4 KB");
        assert_eq!(format_size_kb(1024 * 1024), "~ 1024 KB");
    }

    #[test]
    fn test_file_size_kb_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let logger = MemoryLogger::new();

        let result = file_size_kb(temp_dir.path().join("absent"), &logger);

        assert!(matches!(result, Err(AppError::Storage(StorageError::FileIo { .. }))));
        assert!(logger.is_empty());
    }
}
