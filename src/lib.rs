//! # flatmerge-config
//!
//! Layered configuration flattened into one queryable key space.
//!
//! ## Overview
//!
//! `flatmerge-config` merges several hierarchical sources into a single flat
//! store of dotted, lowercase keys:
//! - Process environment (`APP_DB_HOST` -> `app.db.host`)
//! - Command-line arguments (`key=value` or `key value`)
//! - JSON, YAML and XML files, with nested tables flattened and list
//!   elements indexed (`servers.server.0.ip`)
//!
//! Sources are applied strictly in the order given; a later source
//! overrides any key an earlier one set.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flatmerge_config::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let store = ConfigStore::builder()
//!     .with_env()
//!     .with_file("config/default.yaml")
//!     .with_args()
//!     .load()?;
//!
//! let host = store.get("app.db.host", "localhost");
//! println!("Database host: {:?}", host.as_text());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `json`: JSON file source (default)
//! - `yaml`: YAML file source (default)
//! - `xml`: XML file source (default)

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod normalize;
pub mod sources;
pub mod xml;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigStore, ConfigStoreBuilder, ConfigValue};
    pub use crate::error::{ConfigError, Result};
    pub use crate::sources::{ArgsSource, ConfigSource, EnvSource, FileSource};

    #[cfg(feature = "json")]
    pub use crate::sources::JsonSource;
    #[cfg(feature = "xml")]
    pub use crate::sources::XmlSource;
    #[cfg(feature = "yaml")]
    pub use crate::sources::YamlSource;
}
