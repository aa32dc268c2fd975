//! `ArtifactStore` implementation backed by the local filesystem.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Local filesystem store.
///
/// Output is staged in a temporary file beside the destination and renamed
/// over it, so readers only ever see the previous or the complete new file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for LocalFilesystem {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path)
            .map_err(|source| AppError::ReadFailed { path: path.to_path_buf(), source })
    }

    fn replace_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let write_failed =
            |source: io::Error| AppError::WriteFailed { path: path.to_path_buf(), source };

        let destination = resolve_destination(path).map_err(write_failed)?;
        if destination.is_dir() {
            return Err(write_failed(io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination is a directory",
            )));
        }
        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Masked by the process umask like any newly created file.
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut staged = builder.tempfile_in(parent).map_err(write_failed)?;
        staged.write_all(content.as_bytes()).map_err(write_failed)?;
        staged.as_file().sync_all().map_err(write_failed)?;

        if let Ok(existing) = fs::metadata(&destination) {
            staged.as_file().set_permissions(existing.permissions()).map_err(write_failed)?;
        }

        staged.persist(&destination).map_err(|err| write_failed(err.error))?;
        Ok(())
    }
}

const MAX_SYMLINK_HOPS: usize = 40;

/// Follow symlinks at `path` so the link's target is replaced, not the link.
///
/// Dangling links resolve to the path they point at.
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    let mut resolved = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&resolved) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::read_link(&resolved)?;
                resolved = match resolved.parent() {
                    Some(parent) => parent.join(target),
                    None => target,
                };
            }
            Ok(_) => return Ok(resolved),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(resolved),
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::other("too many levels of symbolic links"))
}
