//! JSON file configuration source.

use super::ConfigSource;
use super::file::{check_extension, read_file};
use crate::error::{ConfigError, Result};
use crate::normalize::flatten;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// JSON file configuration source.
///
/// The path must end in `.json`. The document's top level must be an object;
/// nested objects and arrays are flattened into dotted keys.
///
/// # Examples
///
/// ```rust,no_run
/// use flatmerge_config::sources::{ConfigSource, JsonSource};
///
/// // {"server": {"port": 8080}} -> server.port = 8080
/// let map = JsonSource::new("config/default.json").load()?;
/// # Ok::<(), flatmerge_config::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a JSON source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for JsonSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        check_extension(&self.path, &["json"], ".json")?;
        let content = read_file(&self.path)?;

        let decoded: HashMap<String, config::Value> =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                format: "json",
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(flatten(&decoded))
    }

    fn source_type(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
