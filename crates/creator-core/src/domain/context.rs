//! Placeholder substitution context.

use crate::domain::{entities::ProjectDescriptor, package::PackageIdentity};

pub const TOP_LEVEL_PACKAGE: &str = "__TOP_LEVEL_PACKAGE__";
pub const APP_NAME: &str = "__APP_NAME__";
pub const APP_NAME_LOWER: &str = "__APP_NAME_LWR_CASE__";
pub const PROJECT_NAME: &str = "__PROJECT_NAME__";
pub const LOCALE: &str = "__LOCALE__";
pub const LANGUAGE: &str = "__LANGUAGE__";
pub const FLAG_FILE: &str = "__FLAG_FILE__";
pub const MESSAGE_BUNDLE: &str = "__MESSAGE_BUNDLE__";

/// Ordered placeholder → value pairs.
///
/// Replacement is literal and runs in insertion order, so a value inserted
/// early may itself contain a later placeholder and get substituted again.
/// Templates never rely on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    entries: Vec<(&'static str, String)>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four keys every addon template may use.
    pub fn for_descriptor(descriptor: &ProjectDescriptor) -> Self {
        Self::for_package(descriptor.identity())
            .with(PROJECT_NAME, descriptor.display_name().to_lowercase())
    }

    /// Package-derived keys only.
    pub fn for_package(package: &PackageIdentity) -> Self {
        Self::new()
            .with(TOP_LEVEL_PACKAGE, package.as_str())
            .with(APP_NAME, package.app_name())
            .with(APP_NAME_LOWER, package.app_name_lower())
    }

    /// Insert or overwrite a key, keeping its original position.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&self, template: &str) -> String {
        self.entries
            .iter()
            .fold(template.to_string(), |text, (key, value)| {
                text.replace(key, value)
            })
    }
}
