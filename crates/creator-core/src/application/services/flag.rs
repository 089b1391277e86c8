//! Flag icon extraction from a zipped icon set.

use std::io::{Cursor, Read};

use tracing::{info, instrument};
use zip::{ZipArchive, result::ZipError};

use crate::{
    application::{
        ApplicationError,
        ports::AssetFetcher,
    },
    config::GeneratorConfig,
    domain::Locale,
    error::CreatorResult,
};

pub struct FlagInstaller<'a> {
    fetcher: &'a dyn AssetFetcher,
    config: &'a GeneratorConfig,
}

impl<'a> FlagInstaller<'a> {
    pub fn new(fetcher: &'a dyn AssetFetcher, config: &'a GeneratorConfig) -> Self {
        Self { fetcher, config }
    }

    /// Download the icon set and pull out `png/<cc>.png`.
    #[instrument(skip(self), fields(url = %self.config.icon_set_url, locale = %locale))]
    pub fn fetch_flag(&self, locale: &Locale) -> CreatorResult<Vec<u8>> {
        let url = &self.config.icon_set_url;
        let archive_bytes = self.fetcher.fetch(url)?;

        let mut archive =
            ZipArchive::new(Cursor::new(archive_bytes)).map_err(|e| ApplicationError::FetchFailed {
                url: url.clone(),
                reason: format!("not a zip archive: {e}"),
            })?;

        let entry_name = format!("png/{}", flag_file_name(locale));
        let mut entry = match archive.by_name(&entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(ApplicationError::AssetNotFound {
                    asset: "flag icon".into(),
                    locale: locale.to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(ApplicationError::FetchFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ApplicationError::FetchFailed {
                url: url.clone(),
                reason: format!("reading {entry_name}: {e}"),
            })?;
        info!(entry = %entry_name, size = bytes.len(), "Flag icon extracted");
        Ok(bytes)
    }
}

/// `<cc>.png`, lower-case country code.
pub fn flag_file_name(locale: &Locale) -> String {
    format!("{}.png", locale.country().to_lowercase())
}
