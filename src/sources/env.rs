//! Environment variable configuration source.

use super::ConfigSource;
use crate::error::Result;
use crate::normalize::{normalize_key, normalize_value};
use std::collections::HashMap;

/// Environment variable configuration source.
///
/// Every variable is included, with no prefix filtering. Keys are normalized,
/// so `APP_DB_HOST=localhost` becomes `app.db.host = localhost`.
///
/// The environment is captured when the source is constructed, not when it is
/// loaded.
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::sources::{ConfigSource, EnvSource};
///
/// let source = EnvSource::from_entries(["APP_DB_HOST=localhost"]);
/// let map = source.load().unwrap();
/// assert_eq!(map["app.db.host"], "localhost");
/// ```
#[derive(Debug, Clone)]
pub struct EnvSource {
    entries: Vec<(String, String)>,
}

impl EnvSource {
    /// Snapshot the current process environment.
    ///
    /// Variables that are not valid Unicode are converted lossily.
    pub fn new() -> Self {
        let entries = std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Use an explicit list of `KEY=VALUE` entries instead of the process
    /// environment.
    ///
    /// Each entry is split at its first `=`; entries without one are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let entry: String = entry.into();
                let (key, value) = entry.split_once('=')?;
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        Self { entries }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        let map = self
            .entries
            .iter()
            .map(|(key, value)| (normalize_key(key), normalize_value(value)))
            .collect();
        Ok(map)
    }

    fn source_type(&self) -> &'static str {
        "env"
    }
}
