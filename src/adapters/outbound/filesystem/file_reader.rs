use crate::ports::outbound::DocumentReader;
use crate::shared::error::CompareError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (50 MB). Rule exports are small; a
/// larger file is almost certainly the wrong input.
const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// FileSystemReader adapter for reading XML exports from disk
///
/// This adapter implements the DocumentReader port, with the same
/// guard rails for symlinks and oversized files on every read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| CompareError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(CompareError::FileReadError {
                path: path.to_path_buf(),
                details: "Security: path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(CompareError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(CompareError::FileReadError {
                path: path.to_path_buf(),
                details: format!(
                    "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            CompareError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CompareError::DocumentNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Point pipo-diff at the receiver determination XML exported from the Integration Directory.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path)
    }
}
