//! Values held by the configuration store.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value stored under a configuration key.
///
/// Sources only ever produce [`ConfigValue::Text`]. [`ConfigValue::Raw`] lets
/// callers stash arbitrary typed values through
/// [`ConfigStore::set`](crate::core::ConfigStore::set).
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::core::ConfigValue;
///
/// let text = ConfigValue::from("localhost");
/// assert_eq!(text.as_text(), Some("localhost"));
///
/// let raw = ConfigValue::raw(8080u16);
/// assert_eq!(raw.downcast_ref::<u16>(), Some(&8080));
/// ```
#[derive(Clone)]
pub enum ConfigValue {
    /// Textual value, as produced by every source.
    Text(String),
    /// Opaque value set programmatically.
    Raw(Arc<dyn Any + Send + Sync>),
}

impl ConfigValue {
    /// Wrap an arbitrary value.
    pub fn raw<T: Any + Send + Sync>(value: T) -> Self {
        Self::Raw(Arc::new(value))
    }

    /// The text, if this is a [`ConfigValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    /// Borrow the inner value as `T`.
    ///
    /// Text values downcast as `String`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Text(text) => (text as &dyn Any).downcast_ref(),
            Self::Raw(value) => value.downcast_ref(),
        }
    }

    /// Whether this is a [`ConfigValue::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl PartialEq for ConfigValue {
    /// Text compares by content, raw values by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Raw(_) => f.write_str("Raw(..)"),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
