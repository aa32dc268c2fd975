use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::RenderContext;
use crate::domain::AppError;

/// Delimiter family used by a template document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSyntax {
    /// `<%= value %>`, `<% statement %>`, `<%# comment %>`.
    ///
    /// `<%%` renders as a literal `<%`.
    #[default]
    Erb,
    /// `{{ value }}`, `{% statement %}`, `{# comment #}`.
    Jinja,
}

impl TemplateSyntax {
    pub const ALL: [TemplateSyntax; 2] = [TemplateSyntax::Erb, TemplateSyntax::Jinja];

    pub fn label(self) -> &'static str {
        match self {
            TemplateSyntax::Erb => "erb",
            TemplateSyntax::Jinja => "jinja",
        }
    }
}

impl fmt::Display for TemplateSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemplateSyntax {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TemplateSyntax::ALL.into_iter().find(|syntax| syntax.label() == value).ok_or_else(|| {
            AppError::config_error(format!(
                "Unknown template syntax '{}': expected one of erb, jinja",
                value
            ))
        })
    }
}

/// Failure while parsing or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Malformed interpolation or statement syntax.
    #[error("Template syntax error in {template}: {reason}")]
    Syntax { template: String, reason: String },

    /// The template referenced a name that is not in the render context.
    #[error("Template {template} references an undefined value: {reason}")]
    Undefined { template: String, reason: String },

    /// Any other evaluation failure.
    #[error("Failed to render template {template}: {reason}")]
    Render { template: String, reason: String },
}

/// Trait for rendering templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `context` - The named values in scope.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, TemplateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_syntaxes() {
        assert_eq!("erb".parse::<TemplateSyntax>().unwrap(), TemplateSyntax::Erb);
        assert_eq!("jinja".parse::<TemplateSyntax>().unwrap(), TemplateSyntax::Jinja);
    }

    #[test]
    fn rejects_unknown_syntax() {
        assert!("mustache".parse::<TemplateSyntax>().is_err());
    }

    #[test]
    fn default_is_erb() {
        assert_eq!(TemplateSyntax::default(), TemplateSyntax::Erb);
    }
}
