use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

use super::AppError;

/// A validated fragment name, usable as a template identifier.
///
/// Guarantees:
/// - Non-empty
/// - First character is an ASCII letter or `_`
/// - Remaining characters are ASCII alphanumerics or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentName(pub(super) String);

impl FragmentName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        let mut chars = name.chars();
        let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_head || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::InvalidFragmentName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FragmentName> for String {
    fn from(val: FragmentName) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for FragmentName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FragmentName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A named text input read from disk and exposed to the template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fragment {
    pub name: FragmentName,
    pub path: PathBuf,
}

impl Fragment {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self { name: FragmentName::new(name)?, path: path.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_snake_case_name() {
        assert!(FragmentName::new("web_server_bootstrap_script").is_ok());
    }

    #[test]
    fn leading_underscore_is_valid() {
        assert!(FragmentName::new("_private").is_ok());
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(FragmentName::new("").is_err());
    }

    #[test]
    fn leading_digit_is_invalid() {
        assert!(FragmentName::new("1script").is_err());
    }

    #[test]
    fn dash_is_invalid() {
        assert!(matches!(
            FragmentName::new("web-server"),
            Err(AppError::InvalidFragmentName(name)) if name == "web-server"
        ));
    }

    #[test]
    fn display_impl() {
        let name = FragmentName::new("socialworker_bootstrap_script").unwrap();
        assert_eq!(format!("{}", name), "socialworker_bootstrap_script");
    }

    #[test]
    fn deserialize_rejects_invalid_name() {
        let result: Result<Fragment, _> = toml::from_str("name = \"a b\"\npath = \"x.txt\"");
        assert!(result.is_err());
    }
}
