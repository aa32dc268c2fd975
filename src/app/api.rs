//! API Facade for the application.
//!
//! Glues context creation and command execution together.

use std::path::{Path, PathBuf};

use crate::adapters::{LocalFilesystem, MinijinjaTemplateRenderer};
use crate::app::{AppContext, commands::generate};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{AppError, GenerateConfig, RenderContext, TemplateSyntax};

/// Create an `AppContext` for a given base directory.
fn create_context(
    root: PathBuf,
    syntax: TemplateSyntax,
) -> AppContext<LocalFilesystem, MinijinjaTemplateRenderer> {
    AppContext::new(root, LocalFilesystem::new(), MinijinjaTemplateRenderer::new(syntax))
}

/// Generate the stack template relative to the current directory.
pub fn generate(config: &GenerateConfig) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, config)
}

/// Generate the stack template with relative paths resolved against `root`.
pub fn generate_at(
    root: impl Into<PathBuf>,
    config: &GenerateConfig,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(root.into(), config.syntax);
    generate::execute(&ctx, config)
}

/// Load a TOML configuration file from disk.
pub fn load_config(path: &Path) -> Result<GenerateConfig, AppError> {
    crate::app::config::load_config(path, &LocalFilesystem::new())
}

/// Render a template in memory.
pub fn render(
    template: &str,
    context: &RenderContext,
    syntax: TemplateSyntax,
) -> Result<String, AppError> {
    crate::adapters::template::render(template, context, syntax)
}
