//! Language naming rules for i18n bundles.

use crate::domain::package::capitalize;

const DESCRIPTION_TAGS: [&str; 3] = ["#mvc", "#localization", "locale:"];

/// ISO 3166 country names keyed by alpha-2 code.
///
/// Source format is one `NAME;CC` entry per line. Lines without a `;` are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    entries: Vec<(String, String)>,
}

impl CountryTable {
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| line.split_once(';'))
            .map(|(name, code)| (name.trim().to_string(), code.trim().to_uppercase()))
            .filter(|(name, code)| !name.is_empty() && !code.is_empty())
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human language name for a country code, e.g. `FR` -> `France`.
    pub fn language_for(&self, country: &str) -> Option<String> {
        let country = country.to_uppercase();
        self.entries
            .iter()
            .find(|(_, code)| *code == country)
            .map(|(name, _)| display_name(name))
    }
}

/// `KOREA, REPUBLIC OF` -> `Korea`; `UNITED KINGDOM` -> `United Kingdom`.
fn display_name(raw: &str) -> String {
    let name = raw.split(',').next().unwrap_or(raw);
    name.split_whitespace()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Class-name form of a language: words title-cased and concatenated.
pub fn language_class_name(language: &str) -> String {
    language
        .split_whitespace()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect()
}

/// Description for an i18n bundle POM.
///
/// A blank description is derived from the language; the discovery tags are
/// appended unless all of them are already present.
pub fn bundle_description(description: Option<&str>, class_name: &str, country: &str) -> String {
    let base = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("{class_name} language support for Spring Roo Web MVC JSP Scaffolding")
        });

    if DESCRIPTION_TAGS.iter().all(|tag| base.contains(tag)) {
        base
    } else {
        format!(
            "{base}; #mvc,#localization,locale:{}",
            country.to_lowercase()
        )
    }
}
