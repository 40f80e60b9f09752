//! Activity template lookup

use std::collections::BTreeMap;

use weekplan_domain::{ActivityTemplate, Result, ScheduleConfig, WeekplanError};

/// Read-only view over the configured activity templates
#[derive(Debug, Clone, Copy)]
pub struct TemplateCatalog<'a> {
    templates: &'a BTreeMap<String, ActivityTemplate>,
}

impl<'a> TemplateCatalog<'a> {
    /// Wrap an existing template map
    pub fn new(templates: &'a BTreeMap<String, ActivityTemplate>) -> Self {
        Self { templates }
    }

    /// Catalog over `config.templates`
    pub fn from_config(config: &'a ScheduleConfig) -> Self {
        Self::new(&config.templates)
    }

    /// Template registered under `key`, if any
    pub fn get(&self, key: &str) -> Option<&'a ActivityTemplate> {
        self.templates.get(key)
    }

    /// Look up `key` on behalf of `pattern`
    ///
    /// # Errors
    /// Returns [`WeekplanError::UnknownTemplate`] naming both the pattern and
    /// the missing key.
    pub fn resolve(&self, pattern: &str, key: &str) -> Result<&'a ActivityTemplate> {
        self.get(key).ok_or_else(|| WeekplanError::UnknownTemplate {
            pattern: pattern.to_string(),
            key: key.to_string(),
        })
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates are configured
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
