//! Key and value canonicalization shared by every source.
//!
//! Keys become dotted lowercase paths (`APP_DB_HOST` -> `app.db.host`), values
//! lose one pair of matching outer quotes and surrounding whitespace, and
//! nested mappings are flattened into a single string map.

mod key;
mod map;
mod value;

pub use key::normalize_key;
pub use map::flatten;
pub use value::normalize_value;
