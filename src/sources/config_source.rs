//! Configuration source trait.

use crate::error::Result;
use std::collections::HashMap;

/// Trait for configuration sources.
///
/// A source produces a flat map of normalized dotted keys to textual values.
/// Implement it to feed custom providers into a
/// [`ConfigStore`](crate::core::ConfigStore); the store applies sources in
/// the order they were supplied, later ones overriding earlier ones.
///
/// Loading is synchronous and blocking. There is no timeout or retry.
pub trait ConfigSource: Send + Sync {
    /// Load configuration as a flat key-value map.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<HashMap<String, String>>;

    /// Short identifier of the source kind (`env`, `args`, `json`, `yaml`, `xml`).
    fn source_type(&self) -> &'static str;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String {
        self.source_type().to_string()
    }
}
