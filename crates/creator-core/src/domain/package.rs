//! Top-level package identity.
//!
//! Every generated artifact is named after the package the user supplies:
//! group ids, artifact ids, source directories, class names and command
//! tokens are all derived here so the derivation rules live in one place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A dotted namespace such as `com.example.foo`.
///
/// Invariant: non-empty, every segment is a valid identifier. Enforced at
/// construction; the value is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageIdentity(String);

impl PackageIdentity {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package as a relative path: `com.example.foo` -> `com/example/foo`.
    pub fn path(&self) -> String {
        self.0.replace('.', "/")
    }

    /// Last segment, as written: `com.acme.flightBooking` -> `flightBooking`.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Capitalized short name used for class names: `Flightbooking`.
    pub fn app_name(&self) -> String {
        capitalize(self.short_name())
    }

    /// Lower-cased short name used for command tokens: `flightbooking`.
    pub fn app_name_lower(&self) -> String {
        self.short_name().to_lowercase()
    }

    /// Project name used when the caller gives none: `com-acme-flightbooking`.
    pub fn default_project_name(&self) -> String {
        self.0.replace('.', "-")
    }

    /// `<package>.<suffix>`, the artifact naming scheme for modules.
    pub fn qualify(&self, suffix: &str) -> String {
        format!("{}.{}", self.0, suffix)
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageIdentity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageIdentity {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageIdentity> for String {
    fn from(value: PackageIdentity) -> Self {
        value.0
    }
}

fn validate(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidPackage {
        package: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("package cannot be empty"));
    }

    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(invalid("empty segment between dots")),
            Some(c) if !(c.is_alphabetic() || c == '_' || c == '$') => {
                return Err(invalid(&format!(
                    "segment '{segment}' must start with a letter or underscore"
                )));
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '$')) {
            return Err(invalid(&format!(
                "segment '{segment}' contains illegal character '{bad}'"
            )));
        }
    }

    Ok(())
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
