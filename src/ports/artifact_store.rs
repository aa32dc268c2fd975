//! Filesystem access for generation inputs and outputs.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading generation inputs and publishing the rendered artifact.
///
/// Paths are passed already resolved against the run's base directory.
pub trait ArtifactStore {
    /// Read a file verbatim as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Replace `path` with `content` in one step.
    ///
    /// Implementations must leave any existing file untouched when the write
    /// fails, and must not create missing parent directories.
    fn replace_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
