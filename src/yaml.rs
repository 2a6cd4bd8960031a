//! JSON to YAML emission.
//!
//! A block-style subset that covers nested objects and arrays:
//!
//! - object members print as `key: value`; a non-empty container value moves
//!   to an indented block on the following lines
//! - array elements print as `- value`; a non-empty container element starts
//!   right after the dash and continues two columns in
//! - strings are always double-quoted, so `"true"` and `"42"` stay strings
//!
//! ```rust
//! use convkit::{to_yaml, value, ConvertOptions};
//!
//! let v = value!({ "a": 1, "b": { "c": true } });
//! assert_eq!(to_yaml(&v, &ConvertOptions::default()), "a: 1\nb:\n  c: true\n");
//!
//! let v = value!({ "users": [{ "name": "Ann", "admin": false }] });
//! assert_eq!(
//!     to_yaml(&v, &ConvertOptions::default()),
//!     "users:\n  - name: \"Ann\"\n    admin: false\n"
//! );
//! ```

use crate::{ConvertOptions, Value};

/// Converts a JSON tree to YAML text.
///
/// Object nesting is indented by `options.indent` spaces per level. A scalar
/// at the top level renders as a single line.
#[must_use]
pub fn to_yaml(value: &Value, options: &ConvertOptions) -> String {
    let yaml = block(value, 0, options.indent);
    log::debug!("rendered {} bytes of YAML", yaml.len());
    yaml
}

/// Renders `value` as a block whose lines start at column `col`.
///
/// # Examples
///
/// ```rust
/// use convkit::{value, yaml};
///
/// assert_eq!(yaml::block(&value!(["x"]), 2, 2), "  - \"x\"\n");
/// ```
#[must_use]
pub fn block(value: &Value, col: usize, unit: usize) -> String {
    let mut out = String::new();
    write_block(&mut out, value, col, unit);
    out
}

fn write_block(out: &mut String, value: &Value, col: usize, unit: usize) {
    let pad = " ".repeat(col);
    match value {
        Value::Array(items) if !items.is_empty() => {
            for item in items {
                out.push_str(&pad);
                out.push_str("- ");
                if is_block(item) {
                    // first line sits after the dash, the rest stay aligned with it
                    let nested = block(item, col + 2, unit);
                    out.push_str(&nested[col + 2..]);
                } else {
                    out.push_str(&scalar(item));
                    out.push('\n');
                }
            }
        }
        Value::Object(map) if !map.is_empty() => {
            for (key, member) in map.iter() {
                out.push_str(&pad);
                out.push_str(key);
                if is_block(member) {
                    out.push_str(":\n");
                    write_block(out, member, col + unit, unit);
                } else {
                    out.push_str(": ");
                    out.push_str(&scalar(member));
                    out.push('\n');
                }
            }
        }
        other => {
            out.push_str(&pad);
            out.push_str(&scalar(other));
            out.push('\n');
        }
    }
}

fn is_block(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => crate::ser::quote(s),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}
