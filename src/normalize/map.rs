//! Mapping flattener: nested tables and arrays into dotted keys.

use super::{normalize_key, normalize_value};
use config::{Value, ValueKind};
use std::collections::HashMap;

/// Flatten a decoded nested mapping into a single string map.
///
/// Tables extend the key path, array elements append their index to the key
/// that holds them (`{"a": ["x", "y"]}` becomes `a.0` and `a.1`), and scalars
/// are rendered to text. Every joined path goes through [`normalize_key`] and
/// every rendered scalar through [`normalize_value`].
///
/// Empty tables and arrays contribute no entries.
pub fn flatten<'a, I>(input: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    let mut output = HashMap::new();
    for (key, value) in input {
        reduce(&mut output, &[], key, value);
    }
    output
}

fn reduce(output: &mut HashMap<String, String>, prefix: &[&str], key: &str, value: &Value) {
    match &value.kind {
        ValueKind::Table(table) => {
            let mut nested = prefix.to_vec();
            nested.push(key);
            for (child_key, child) in table {
                reduce(output, &nested, child_key, child);
            }
        }
        // Indices extend the key itself, not the prefix.
        ValueKind::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                reduce(output, prefix, &format!("{key}.{index}"), item);
            }
        }
        scalar => {
            let mut path = prefix.join(".");
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(key);
            output.insert(normalize_key(&path), normalize_value(&render(scalar)));
        }
    }
}

/// Render a scalar in its natural textual form.
fn render(kind: &ValueKind) -> String {
    match kind {
        ValueKind::Nil => String::new(),
        ValueKind::Boolean(b) => b.to_string(),
        ValueKind::I64(n) => n.to_string(),
        ValueKind::I128(n) => n.to_string(),
        ValueKind::U64(n) => n.to_string(),
        ValueKind::U128(n) => n.to_string(),
        ValueKind::Float(n) => n.to_string(),
        ValueKind::String(s) => s.clone(),
        ValueKind::Table(_) | ValueKind::Array(_) => String::new(),
    }
}
