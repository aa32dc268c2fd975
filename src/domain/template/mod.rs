pub mod context;
pub mod renderer;

pub use context::RenderContext;
pub use renderer::{TemplateError, TemplateRenderer, TemplateSyntax};
