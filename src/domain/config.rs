//! Generation configuration domain model.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AppError, Fragment, FragmentName, TemplateSyntax};

pub const WEB_SERVER_FRAGMENT: &str = "web_server_bootstrap_script";
pub const SOCIALWORKER_FRAGMENT: &str = "socialworker_bootstrap_script";

/// Inputs and output of a single generation run.
///
/// Defaults reproduce the fixed layout of the web stack build directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Template document to render.
    #[serde(default = "default_template")]
    pub template: PathBuf,
    /// Destination of the rendered document.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Named text inputs, in the order they are read.
    #[serde(default = "default_fragments")]
    pub fragments: Vec<Fragment>,
    /// Delimiter family of the template.
    #[serde(default)]
    pub syntax: TemplateSyntax,
    /// Reject rendered output that is not well-formed JSON.
    #[serde(default)]
    pub check_json: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            fragments: default_fragments(),
            syntax: TemplateSyntax::default(),
            check_json: false,
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fragments.is_empty() {
            return Err(AppError::config_error("At least one fragment must be configured"));
        }
        let mut seen: HashSet<&FragmentName> = HashSet::new();
        for fragment in &self.fragments {
            if !seen.insert(&fragment.name) {
                return Err(AppError::DuplicateFragment(fragment.name.to_string()));
            }
        }
        if self.output.as_os_str().is_empty() {
            return Err(AppError::config_error("Output path must not be empty"));
        }
        if self.template.as_os_str().is_empty() {
            return Err(AppError::config_error("Template path must not be empty"));
        }
        Ok(())
    }
}

/// Resolve a configured path against the run's base directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}

fn default_template() -> PathBuf {
    PathBuf::from("./templates/web_stack_autoscale.tmpl.erb")
}

fn default_output() -> PathBuf {
    PathBuf::from("./json/web_stack_autoscale.tmpl.json")
}

fn default_fragments() -> Vec<Fragment> {
    vec![
        Fragment {
            name: FragmentName(WEB_SERVER_FRAGMENT.to_string()),
            path: PathBuf::from("./user-data/web_server-userdata.txt"),
        },
        Fragment {
            name: FragmentName(SOCIALWORKER_FRAGMENT.to_string()),
            path: PathBuf::from("./user-data/socialworker-userdata.txt"),
        },
    ]
}
