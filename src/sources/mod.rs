//! Configuration source implementations.

mod args;
mod config_source;
mod env;
mod file;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "xml")]
mod xml;
#[cfg(feature = "yaml")]
mod yaml;

pub use args::ArgsSource;
pub use config_source::ConfigSource;
pub use env::EnvSource;
pub use file::FileSource;
#[cfg(feature = "json")]
pub use json::JsonSource;
#[cfg(feature = "xml")]
pub use xml::XmlSource;
#[cfg(feature = "yaml")]
pub use yaml::YamlSource;
