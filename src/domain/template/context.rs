use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{AppError, FragmentName};

/// Named values exposed to a template during rendering.
///
/// Only the values inserted here are in scope. Insertion order is kept so
/// diagnostics and serialization follow the configured fragment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: Vec<(FragmentName, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named value. Fails if the name is already present.
    pub fn insert(&mut self, name: FragmentName, value: impl Into<String>) -> Result<(), AppError> {
        if self.contains(name.as_str()) {
            return Err(AppError::DuplicateFragment(name.into()));
        }
        self.values.push((name, value.into()));
        Ok(())
    }

    /// Builder form of [`RenderContext::insert`].
    pub fn with_value(mut self, name: &str, value: impl Into<String>) -> Result<Self, AppError> {
        self.insert(FragmentName::new(name)?, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().find(|(key, _)| key.as_str() == name).map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &FragmentName> {
        self.values.iter().map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for RenderContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}
