//! Builder for constructing ConfigStore instances.

use crate::core::ConfigStore;
use crate::error::Result;
use crate::sources::{ArgsSource, ConfigSource, EnvSource, FileSource};
use std::path::PathBuf;

#[cfg(feature = "json")]
use crate::sources::JsonSource;
#[cfg(feature = "xml")]
use crate::sources::XmlSource;
#[cfg(feature = "yaml")]
use crate::sources::YamlSource;

/// Builder for constructing a [`ConfigStore`].
///
/// Sources are applied in the order they are added: each one overrides keys
/// set by the ones before it. There is no other priority signal.
///
/// # Examples
///
/// ```rust,no_run
/// use flatmerge_config::prelude::*;
///
/// let store = ConfigStore::builder()
///     .with_env()
///     .with_args()
///     .with_file("config/default.xml")
///     .with_file("config/default.json")
///     .with_file("config/local.yaml")
///     .load()?;
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Default)]
pub struct ConfigStoreBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigStoreBuilder {
    /// Create a builder with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the process environment, captured now.
    pub fn with_env(self) -> Self {
        self.with_source(EnvSource::new())
    }

    /// Add an explicit list of `KEY=VALUE` environment entries.
    pub fn with_env_vars<I, S>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_source(EnvSource::from_entries(entries))
    }

    /// Add the process arguments (program name excluded), captured now.
    pub fn with_args(self) -> Self {
        self.with_source(ArgsSource::new())
    }

    /// Add an explicit argument list.
    pub fn with_arg_list<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_source(ArgsSource::from_args(args))
    }

    /// Add a JSON file.
    #[cfg(feature = "json")]
    pub fn with_json(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(JsonSource::new(path))
    }

    /// Add a YAML file.
    #[cfg(feature = "yaml")]
    pub fn with_yaml(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(YamlSource::new(path))
    }

    /// Add an XML file.
    #[cfg(feature = "xml")]
    pub fn with_xml(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(XmlSource::new(path))
    }

    /// Add a file whose format is picked from its extension.
    ///
    /// An unsupported extension is reported when the store is loaded.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(FileSource::new(path))
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Build the store without loading it.
    pub fn build(self) -> ConfigStore {
        ConfigStore::new(self.sources)
    }

    /// Build the store and run an initial [`ConfigStore::load`].
    ///
    /// # Errors
    ///
    /// Returns the first source failure.
    pub fn load(self) -> Result<ConfigStore> {
        let store = self.build();
        store.load()?;
        Ok(store)
    }
}
