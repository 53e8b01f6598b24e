//! YAML file configuration source.

use super::ConfigSource;
use super::file::{check_extension, read_file};
use crate::error::{ConfigError, Result};
use crate::normalize::flatten;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// YAML file configuration source.
///
/// The path must end in `.yaml` or `.yml`. An empty document yields an empty
/// map; any other top level than a mapping is a parse error.
///
/// # Examples
///
/// ```rust,no_run
/// use flatmerge_config::sources::{ConfigSource, YamlSource};
///
/// let map = YamlSource::new("config/default.yaml").load()?;
/// # Ok::<(), flatmerge_config::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct YamlSource {
    path: PathBuf,
}

impl YamlSource {
    /// Create a YAML source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for YamlSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        check_extension(&self.path, &["yaml", "yml"], ".yaml or .yml")?;
        let content = read_file(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let decoded: Option<HashMap<String, config::Value>> = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError {
                format: "yaml",
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(decoded.map(|map| flatten(&map)).unwrap_or_default())
    }

    fn source_type(&self) -> &'static str {
        "yaml"
    }

    fn name(&self) -> String {
        format!("yaml:{}", self.path.display())
    }
}
