use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Default)]
pub struct MemoryArtifactStore {
    pub files: RefCell<HashMap<PathBuf, String>>,
    pub reads: RefCell<Vec<PathBuf>>,
    pub writes: RefCell<Vec<PathBuf>>,
    pub fail_writes: RefCell<bool>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    pub fn with_failing_writes(self) -> Self {
        *self.fail_writes.borrow_mut() = true;
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files.borrow().get(path).cloned().ok_or_else(|| AppError::ReadFailed {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        })
    }

    fn replace_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if *self.fail_writes.borrow() {
            return Err(AppError::WriteFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.writes.borrow_mut().push(path.to_path_buf());
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
