//! Core configuration store types.

mod builder;
mod store;
mod value;

pub use builder::ConfigStoreBuilder;
pub use store::ConfigStore;
pub use value::ConfigValue;
