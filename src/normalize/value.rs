//! Value normalization.

/// Strip one pair of matching outer quotes, then trim surrounding whitespace.
///
/// Single quotes are checked before double quotes. A quote at only one end is
/// left in place.
///
/// # Examples
///
/// ```rust
/// use flatmerge_config::normalize::normalize_value;
///
/// assert_eq!(normalize_value("'val=ue6'"), "val=ue6");
/// assert_eq!(normalize_value("  plain  "), "plain");
/// ```
pub fn normalize_value(value: &str) -> String {
    let unquoted = strip_pair(value, '\'')
        .or_else(|| strip_pair(value, '"'))
        .unwrap_or(value);
    unquoted.trim().to_string()
}

fn strip_pair(value: &str, quote: char) -> Option<&str> {
    value
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
}
