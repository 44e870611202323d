use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading raw XML rule exports
///
/// This port abstracts the file system operations needed to read one
/// environment's receiver determination export.
pub trait DocumentReader {
    /// Reads the XML export at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the XML file
    ///
    /// # Returns
    /// The raw content of the file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    fn read_document(&self, path: &Path) -> Result<String>;
}
