pub mod config;
pub mod error;
pub mod fragment;
pub mod template;

pub use config::{GenerateConfig, SOCIALWORKER_FRAGMENT, WEB_SERVER_FRAGMENT, resolve_path};
pub use error::AppError;
pub use fragment::{Fragment, FragmentName};
pub use template::{RenderContext, TemplateError, TemplateRenderer, TemplateSyntax};
