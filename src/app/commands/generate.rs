//! Render the configured fragments into the stack template and publish it.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, GenerateConfig, RenderContext, TemplateRenderer, resolve_path};
use crate::ports::ArtifactStore;

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Output path exactly as configured.
    pub output: PathBuf,
    /// Number of bytes written to the output.
    pub bytes_written: usize,
    /// Fragment names rendered into the template, in configured order.
    pub fragments: Vec<String>,
}

impl GenerateOutcome {
    pub fn display_path(&self) -> String {
        self.output.display().to_string()
    }
}

/// Execute the generate command.
///
/// Every input is read and the template fully rendered before the output is
/// touched; the output is then replaced in one step.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    config: &GenerateConfig,
) -> Result<GenerateOutcome, AppError>
where
    S: ArtifactStore,
    R: TemplateRenderer,
{
    config.validate()?;

    let mut context = RenderContext::new();
    for fragment in &config.fragments {
        let path = resolve_path(ctx.root(), &fragment.path);
        debug!("Reading fragment '{}' from {}", fragment.name, path.display());
        let text = ctx.store().read_text(&path)?;
        context.insert(fragment.name.clone(), text)?;
    }

    let template_path = resolve_path(ctx.root(), &config.template);
    debug!("Reading template {}", template_path.display());
    let template = ctx.store().read_text(&template_path)?;

    let template_name = config.template.display().to_string();
    let rendered = ctx.renderer().render(&template, &context, &template_name)?;
    debug!("Rendered {} ({} bytes)", template_name, rendered.len());

    let output_path = resolve_path(ctx.root(), &config.output);
    if config.check_json {
        check_json(&output_path, &rendered)?;
    }

    let content = with_line_terminator(rendered);
    ctx.store().replace_file(&output_path, &content)?;
    info!("Wrote {} ({} bytes)", output_path.display(), content.len());

    Ok(GenerateOutcome {
        output: config.output.clone(),
        bytes_written: content.len(),
        fragments: context.names().map(|name| name.to_string()).collect(),
    })
}

fn check_json(output_path: &Path, rendered: &str) -> Result<(), AppError> {
    serde_json::from_str::<serde_json::Value>(rendered)
        .map(|_| ())
        .map_err(|err| AppError::InvalidJson {
            path: output_path.to_path_buf(),
            details: err.to_string(),
        })
}

/// Terminate the document with a newline unless it already ends with one.
fn with_line_terminator(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
