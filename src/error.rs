//! Error types for flatmerge-config.

use std::path::PathBuf;

/// Result type alias for flatmerge-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration sources.
///
/// The store itself never fails: `get` and `set` are infallible. Every variant
/// here originates in a source adapter, and [`ConfigStore::load`] wraps it in
/// [`ConfigError::Source`] so the failing adapter can be identified.
///
/// [`ConfigStore::load`]: crate::core::ConfigStore::load
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file path does not carry the extension the adapter requires.
    #[error("Invalid file extension '{found}' for {}: expected {expected}", .path.display())]
    InvalidExtension {
        /// Path handed to the adapter
        path: PathBuf,
        /// Extension(s) the adapter accepts, e.g. `.yaml or .yml`
        expected: &'static str,
        /// Extension actually found (empty when the path has none)
        found: String,
    },

    /// The file could not be opened.
    #[error("Failed to open file {}: {source}", .path.display())]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file was opened but reading its contents failed.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file contents are not valid for the adapter's format.
    #[error("Failed to parse {format} content in {}: {message}", .path.display())]
    ParseError {
        /// Format name (`json`, `yaml`, `xml`)
        format: &'static str,
        /// Path of the offending file
        path: PathBuf,
        /// Decoder error message
        message: String,
    },

    /// A command-line key had neither an `=` nor a following value.
    #[error("Invalid argument format, expected a value after key '{0}'")]
    MalformedArgument(String),

    /// A source failed while the store was loading.
    #[error("Failed to load source '{name}': {source}")]
    Source {
        /// Name of the failing source, as reported by `ConfigSource::name`
        name: String,
        /// The adapter's own error
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Wrap an adapter error with the name of the source that produced it.
    pub(crate) fn from_source(name: impl Into<String>, err: ConfigError) -> Self {
        Self::Source {
            name: name.into(),
            source: Box::new(err),
        }
    }

    /// Return the innermost error beneath any [`ConfigError::Source`] wrappers.
    pub fn root(&self) -> &ConfigError {
        match self {
            Self::Source { source, .. } => source.root(),
            other => other,
        }
    }
}
