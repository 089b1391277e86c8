//! Domain value objects: Archetype, Locale.
//!
//! # Design
//!
//! These are pure value types: `Copy` or cheap to clone, equality-by-value, no
//! identity. They hold NO generation rules. Everything an archetype needs at
//! generation time lives in `catalog.rs`. This file's only job is to define
//! the types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Archetypes
//!
//! 1. Add the enum variant here and to [`Archetype::ALL`]
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add an `ArchetypeSpec` entry in `catalog.rs`
//! 4. Done: the orchestrator dispatches by table lookup

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ─────────────────────────────────────────────────────────────────

/// The closed set of project kinds the engine can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Standalone simple addon.
    Simple,
    /// Simple addon nested under a suite's aggregator.
    SimpleChild,
    /// Standalone advanced addon (metadata provider, annotation, commands).
    Advanced,
    /// Advanced addon nested under a suite's aggregator.
    AdvancedChild,
    /// Root POM of a suite.
    Parent,
    /// OSGi bundle aggregator sitting between the parent and the addons.
    OsgiBundles,
    /// The suite module bundling the addons.
    Suite,
    /// OBR repository module publishing the suite.
    Repository,
    /// Language bundle for the web scaffolding.
    I18n,
    /// OSGi wrapper around a plain library.
    Wrapper,
}

impl Archetype {
    pub const ALL: [Archetype; 10] = [
        Self::Simple,
        Self::SimpleChild,
        Self::Advanced,
        Self::AdvancedChild,
        Self::Parent,
        Self::OsgiBundles,
        Self::Suite,
        Self::Repository,
        Self::I18n,
        Self::Wrapper,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::SimpleChild => "simple-child",
            Self::Advanced => "advanced",
            Self::AdvancedChild => "advanced-child",
            Self::Parent => "parent",
            Self::OsgiBundles => "osgi-bundles",
            Self::Suite => "suite",
            Self::Repository => "repository",
            Self::I18n => "i18n",
            Self::Wrapper => "wrapper",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "simple" => Ok(Self::Simple),
            "simple-child" | "simplechild" => Ok(Self::SimpleChild),
            "advanced" => Ok(Self::Advanced),
            "advanced-child" | "advancedchild" => Ok(Self::AdvancedChild),
            "parent" | "root" => Ok(Self::Parent),
            "osgi-bundles" | "osgibundles" => Ok(Self::OsgiBundles),
            "suite" => Ok(Self::Suite),
            "repository" | "repo" => Ok(Self::Repository),
            "i18n" => Ok(Self::I18n),
            "wrapper" => Ok(Self::Wrapper),
            other => Err(DomainError::UnknownArchetype(other.to_string())),
        }
    }
}

// ── Locale ────────────────────────────────────────────────────────────────────

/// A language + country pair, e.g. `fr_FR`.
///
/// The country drives the flag icon and the language-name lookup; the
/// language code is substituted into the generated language class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Result<Self, DomainError> {
        let language = language.into().to_lowercase();
        let country = country.into().to_uppercase();

        let well_formed = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic());
        if !well_formed(&language) || !well_formed(&country) {
            return Err(DomainError::InvalidLocale(format!("{language}_{country}")));
        }

        Ok(Self { language, country })
    }

    /// Lower-case language code, e.g. `fr`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Upper-case country code, e.g. `FR`.
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.country)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    /// Accepts `fr_FR` and `fr-FR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, country) = s
            .split_once(['_', '-'])
            .ok_or_else(|| DomainError::InvalidLocale(s.to_string()))?;
        Self::new(language, country).map_err(|_| DomainError::InvalidLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_round_trips_through_str() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_str(archetype.as_str()).unwrap(), archetype);
        }
    }

    #[test]
    fn archetype_parse_accepts_legacy_spellings() {
        assert_eq!(Archetype::from_str("ADVANCEDCHILD").unwrap(), Archetype::AdvancedChild);
        assert_eq!(Archetype::from_str("osgi_bundles").unwrap(), Archetype::OsgiBundles);
        assert!(matches!(
            Archetype::from_str("plugin"),
            Err(DomainError::UnknownArchetype(_))
        ));
    }

    #[test]
    fn locale_normalizes_case() {
        let locale: Locale = "FR-fr".parse().unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.country(), "FR");
        assert_eq!(locale.to_string(), "fr_FR");
    }

    #[test]
    fn locale_requires_country() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("fr_".parse::<Locale>().is_err());
        assert!("f1_FR".parse::<Locale>().is_err());
    }
}
