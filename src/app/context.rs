use std::path::{Path, PathBuf};

use crate::domain::TemplateRenderer;
use crate::ports::ArtifactStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, R: TemplateRenderer> {
    root: PathBuf,
    store: S,
    renderer: R,
}

impl<S: ArtifactStore, R: TemplateRenderer> AppContext<S, R> {
    /// Create a new application context rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, store: S, renderer: R) -> Self {
        Self { root: root.into(), store, renderer }
    }

    /// Base directory that relative configured paths are joined onto.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
