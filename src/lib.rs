//! stackgen: render userdata bootstrap scripts into a CloudFormation stack template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, generate, generate_at, load_config, render};
pub use domain::{
    AppError, Fragment, FragmentName, GenerateConfig, RenderContext, SOCIALWORKER_FRAGMENT,
    TemplateError, TemplateSyntax, WEB_SERVER_FRAGMENT,
};
