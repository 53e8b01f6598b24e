//! Key normalization.

/// Canonicalize a raw key segment: underscores become dots, then the whole
/// string is lowercased.
///
/// `a_b` and `a.b` both normalize to `a.b`. Sources are not checked for this
/// collision, so an environment variable can shadow a nested file key.
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::normalize::normalize_key;
///
/// assert_eq!(normalize_key("APP_DB_HOST"), "app.db.host");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.replace('_', ".").to_lowercase()
}
