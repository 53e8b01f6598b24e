//! File-based configuration sources and the helpers they share.

use super::ConfigSource;
use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: &str = "one of .json, .yaml, .yml, .xml";

/// Reject `path` unless its extension is one of `allowed` (without the dot).
pub(crate) fn check_extension(path: &Path, allowed: &[&str], expected: &'static str) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if allowed.contains(&ext) => Ok(()),
        _ => Err(invalid_extension(path, expected)),
    }
}

fn invalid_extension(path: &Path, expected: &'static str) -> ConfigError {
    ConfigError::InvalidExtension {
        path: path.to_path_buf(),
        expected,
        found: path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default(),
    }
}

/// Open `path` for reading, reporting failures as [`ConfigError::FileOpen`].
pub(crate) fn open_file(path: &Path) -> Result<File> {
    tracing::trace!(path = %path.display(), "opening configuration file");
    File::open(path).map_err(|source| ConfigError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Open and fully read `path` as UTF-8 text.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    let mut file = open_file(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}

/// File source that picks its format from the file extension.
///
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
/// - `.xml` -> XML
///
/// Any other extension (or a format whose cargo feature is disabled) fails
/// with [`ConfigError::InvalidExtension`] when loaded.
///
/// # Examples
///
/// ```rust,no_run
/// use flatmerge_config::sources::{ConfigSource, FileSource};
///
/// let source = FileSource::new("config/default.yaml");
/// let map = source.load()?;
/// # Ok::<(), flatmerge_config::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        match self.extension() {
            #[cfg(feature = "json")]
            Some("json") => super::JsonSource::new(&self.path).load(),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => super::YamlSource::new(&self.path).load(),
            #[cfg(feature = "xml")]
            Some("xml") => super::XmlSource::new(&self.path).load(),
            _ => Err(invalid_extension(&self.path, SUPPORTED_EXTENSIONS)),
        }
    }

    fn source_type(&self) -> &'static str {
        match self.extension() {
            Some("json") => "json",
            Some("yaml" | "yml") => "yaml",
            Some("xml") => "xml",
            _ => "file",
        }
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
