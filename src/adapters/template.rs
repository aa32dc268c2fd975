use std::borrow::Cow;

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

use crate::domain::{AppError, RenderContext, TemplateError, TemplateRenderer, TemplateSyntax};

/// Template renderer using Minijinja.
///
/// Values are inserted verbatim: no auto-escaping, strict undefined lookups,
/// and the template's trailing newline is kept.
#[derive(Debug, Clone, Copy)]
pub struct MinijinjaTemplateRenderer {
    syntax: TemplateSyntax,
}

impl MinijinjaTemplateRenderer {
    pub fn new(syntax: TemplateSyntax) -> Self {
        Self { syntax }
    }

    fn environment<'source>(
        &self,
        template_name: &str,
    ) -> Result<Environment<'source>, TemplateError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        if let Some(syntax) = syntax_config(self.syntax).map_err(|err| TemplateError::Render {
            template: template_name.to_string(),
            reason: format!("Failed to configure {} syntax: {}", self.syntax, err),
        })? {
            env.set_syntax(syntax);
        }
        Ok(env)
    }
}

impl Default for MinijinjaTemplateRenderer {
    fn default() -> Self {
        Self::new(TemplateSyntax::default())
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, TemplateError> {
        let source = match self.syntax {
            TemplateSyntax::Erb => escape_literal_tags(template),
            TemplateSyntax::Jinja => Cow::Borrowed(template),
        };
        let mut env = self.environment(template_name)?;
        env.add_template(template_name, &source)
            .map_err(|err| template_error(template_name, &err))?;
        env.get_template(template_name)
            .map_err(|err| template_error(template_name, &err))?
            .render(context)
            .map_err(|err| template_error(template_name, &err))
    }
}

/// Render `template` in memory with the given syntax.
pub fn render(
    template: &str,
    context: &RenderContext,
    syntax: TemplateSyntax,
) -> Result<String, AppError> {
    Ok(MinijinjaTemplateRenderer::new(syntax).render(template, context, "<inline>")?)
}

/// Rewrite ERB's `<%%` escape into an expression that prints a literal `<%`.
fn escape_literal_tags(template: &str) -> Cow<'_, str> {
    if template.contains("<%%") {
        Cow::Owned(template.replace("<%%", "<%= \"<%\" %>"))
    } else {
        Cow::Borrowed(template)
    }
}

fn syntax_config(syntax: TemplateSyntax) -> Result<Option<SyntaxConfig>, minijinja::Error> {
    match syntax {
        TemplateSyntax::Jinja => Ok(None),
        TemplateSyntax::Erb => SyntaxConfig::builder()
            .block_delimiters("<%", "%>")
            .variable_delimiters("<%=", "%>")
            .comment_delimiters("<%#", "%>")
            .build()
            .map(Some),
    }
}

fn template_error(template_name: &str, err: &minijinja::Error) -> TemplateError {
    let template = template_name.to_string();
    let reason = err.to_string();
    match err.kind() {
        ErrorKind::SyntaxError => TemplateError::Syntax { template, reason },
        ErrorKind::UndefinedError => TemplateError::Undefined { template, reason },
        _ => TemplateError::Render { template, reason },
    }
}
