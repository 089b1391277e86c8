//! Generator settings supplied by the host.

use serde::{Deserialize, Serialize};

/// Default flag icon archive.
pub const DEFAULT_ICON_SET_URL: &str =
    "http://www.famfamfam.com/lab/icons/flags/famfamfam_flag_icons.zip";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Zip archive holding `png/<cc>.png` flag icons.
    pub icon_set_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icon_set_url: DEFAULT_ICON_SET_URL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Use `url` unless it is blank.
    pub fn with_icon_set_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.icon_set_url = url.to_string();
        }
        self
    }
}
