//! Command-line argument configuration source.

use super::ConfigSource;
use crate::error::{ConfigError, Result};
use crate::normalize::{normalize_key, normalize_value};
use std::collections::HashMap;

/// Command-line argument configuration source.
///
/// Arguments are read left to right. `key=value` splits on the first `=`;
/// a bare `key` takes the next argument as its value. A bare key with nothing
/// after it fails with [`ConfigError::MalformedArgument`].
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::sources::{ArgsSource, ConfigSource};
///
/// let source = ArgsSource::from_args(["key1=value1", "key2", "value2"]);
/// let map = source.load().unwrap();
/// assert_eq!(map["key1"], "value1");
/// assert_eq!(map["key2"], "value2");
/// ```
#[derive(Debug, Clone)]
pub struct ArgsSource {
    args: Vec<String>,
}

impl ArgsSource {
    /// Snapshot the process arguments, excluding the program name.
    pub fn new() -> Self {
        Self {
            args: std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// Use an explicit argument list (without the program name).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ArgsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for ArgsSource {
    fn load(&self) -> Result<HashMap<String, String>> {
        let mut map = HashMap::new();
        let mut args = self.args.iter();

        while let Some(arg) = args.next() {
            let (key, value) = match arg.split_once('=') {
                Some(pair) => pair,
                None => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MalformedArgument(arg.clone()))?;
                    (arg.as_str(), value.as_str())
                }
            };
            map.insert(normalize_key(key), normalize_value(value));
        }

        Ok(map)
    }

    fn source_type(&self) -> &'static str {
        "args"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mixed_forms() {
        let source = ArgsSource::from_args([
            "key1=value1",
            "key2=value2",
            "key3=value3",
            "key4",
            "value4",
            "K_E_Y5=value5",
            "key6",
            "'val=ue6'",
        ]);

        let map = source.load().unwrap();
        let expected: HashMap<String, String> = [
            ("key1", "value1"),
            ("key2", "value2"),
            ("key3", "value3"),
            ("key4", "value4"),
            ("k.e.y5", "value5"),
            ("key6", "val=ue6"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_dangling_key_fails() {
        let source = ArgsSource::from_args(["key"]);
        let err = source.load().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedArgument(ref k) if k == "key"));
    }

    #[test]
    fn test_dangling_key_after_valid_pairs_fails() {
        let source = ArgsSource::from_args(["a=1", "b", "2", "c"]);
        assert!(matches!(
            source.load(),
            Err(ConfigError::MalformedArgument(ref k)) if k == "c"
        ));
    }

    #[test]
    fn test_paired_value_may_contain_equals() {
        let source = ArgsSource::from_args(["key", "a=b"]);
        assert_eq!(source.load().unwrap()["key"], "a=b");
    }

    #[test]
    fn test_empty_args() {
        let source = ArgsSource::from_args(Vec::<String>::new());
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_type_and_name() {
        let source = ArgsSource::from_args(["a=1"]);
        assert_eq!(source.source_type(), "args");
        assert_eq!(source.name(), "args");
    }
}
