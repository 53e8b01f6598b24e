//! The shared configuration store.

use crate::core::{ConfigStoreBuilder, ConfigValue};
use crate::error::{ConfigError, Result};
use crate::sources::ConfigSource;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Flat, thread-safe configuration store fed by an ordered list of sources.
///
/// Keys are normalized dotted paths such as `app.db.host`. [`load`] applies
/// the sources in the order they were supplied, so later sources override
/// earlier ones key by key.
///
/// # Locking
///
/// The map sits behind a reader/writer lock. Any number of [`get`] calls run
/// together; each [`set`] takes the lock exclusively for one key. [`load`]
/// writes one key at a time and never holds the lock across a whole source,
/// so concurrent readers may observe a partially merged state. Clones share
/// the same map.
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::prelude::*;
///
/// let store = ConfigStore::builder()
///     .with_env_vars(["APP_DB_HOST=localhost"])
///     .with_arg_list(["app.db.port=5432"])
///     .build();
/// store.load()?;
///
/// assert_eq!(store.get_text("app.db.host").as_deref(), Some("localhost"));
/// assert_eq!(store.get("missing", ConfigValue::from("fallback")), ConfigValue::from("fallback"));
/// # Ok::<(), ConfigError>(())
/// ```
///
/// [`load`]: ConfigStore::load
/// [`get`]: ConfigStore::get
/// [`set`]: ConfigStore::set
#[derive(Clone)]
pub struct ConfigStore {
    sources: Arc<[Box<dyn ConfigSource>]>,
    data: Arc<RwLock<HashMap<String, ConfigValue>>>,
}

impl ConfigStore {
    /// Create an empty store that will apply `sources` in the given order.
    pub fn new(sources: Vec<Box<dyn ConfigSource>>) -> Self {
        Self {
            sources: sources.into(),
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new builder for constructing a store.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Load every source in order and merge its keys into the store.
    ///
    /// Each key overwrites whatever was stored before. The first failing
    /// source aborts the load; keys merged from earlier sources stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Source`] wrapping the failing adapter's error.
    pub fn load(&self) -> Result<()> {
        for source in self.sources.iter() {
            let values = source.load().map_err(|e| {
                tracing::warn!(source = %source.name(), error = %e, "configuration source failed");
                ConfigError::from_source(source.name(), e)
            })?;

            tracing::debug!(
                source = %source.name(),
                kind = source.source_type(),
                keys = values.len(),
                "merging configuration source"
            );

            for (key, value) in values {
                self.set(key, value);
            }
        }

        Ok(())
    }

    /// Get the value stored under `key`, or `default` when it is absent.
    pub fn get(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.data
            .read()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// Get the text stored under `key`, if present and textual.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .get(key)
            .and_then(ConfigValue::as_text)
            .map(str::to_string)
    }

    /// Store `value` under `key`, replacing any existing value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.data.write().insert(key.into(), value.into());
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Copy of the whole map, taken under a single read lock.
    pub fn snapshot(&self) -> HashMap<String, ConfigValue> {
        self.data.read().clone()
    }

    /// Source names in the order they are applied.
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("sources", &self.source_names())
            .field("keys", &self.len())
            .finish()
    }
}
