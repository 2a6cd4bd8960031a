//! JSON text output.
//!
//! [`Serializer`] renders a [`Value`] as indented JSON text with one member
//! per line and `": "` after each key:
//!
//! ```rust
//! use convkit::{to_json_pretty, value, ConvertOptions};
//!
//! let v = value!([{ "name": "Alice", "age": 30 }]);
//! let text = to_json_pretty(&v, &ConvertOptions::default());
//! assert_eq!(text, "[\n  {\n    \"name\": \"Alice\",\n    \"age\": 30\n  }\n]");
//! ```
//!
//! Empty containers print as `[]` and `{}`. With an indent of zero the output
//! is compact.

use crate::{ConvertOptions, Value};

/// Indented JSON writer.
pub struct Serializer {
    output: String,
    indent: usize,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: &ConvertOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            indent: options.indent,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` at the current nesting level.
    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => write_quoted(&mut self.output, s),
            Value::Array(items) if items.is_empty() => self.output.push_str("[]"),
            Value::Object(map) if map.is_empty() => self.output.push_str("{}"),
            Value::Array(items) => {
                self.output.push('[');
                self.indent_level += 1;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.write_newline();
                    self.write_value(item);
                }
                self.indent_level -= 1;
                self.write_newline();
                self.output.push(']');
            }
            Value::Object(map) => {
                self.output.push('{');
                self.indent_level += 1;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.write_newline();
                    write_quoted(&mut self.output, key);
                    self.output.push(':');
                    if self.indent > 0 {
                        self.output.push(' ');
                    }
                    self.write_value(item);
                }
                self.indent_level -= 1;
                self.write_newline();
                self.output.push('}');
            }
        }
    }

    fn write_newline(&mut self) {
        if self.indent > 0 {
            self.output.push('\n');
            for _ in 0..self.indent_level * self.indent {
                self.output.push(' ');
            }
        }
    }
}

/// Returns `s` as a quoted JSON string literal.
///
/// # Examples
///
/// ```rust
/// use convkit::ser::quote;
///
/// assert_eq!(quote("a\"b\n"), r#""a\"b\n""#);
/// ```
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted(&mut out, s);
    out
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn pretty(v: &Value) -> String {
        let mut ser = Serializer::new(&ConvertOptions::default());
        ser.write_value(v);
        ser.into_inner()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(pretty(&Value::Null), "null");
        assert_eq!(pretty(&value!(false)), "false");
        assert_eq!(pretty(&value!(2.5)), "2.5");
        assert_eq!(pretty(&value!("x")), "\"x\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(pretty(&value!([])), "[]");
        assert_eq!(pretty(&value!({ "a": {} })), "{\n  \"a\": {}\n}");
    }

    #[test]
    fn test_nested_layout() {
        let v = value!({ "a": [1, { "b": null }] });
        assert_eq!(
            pretty(&v),
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_zero_indent_is_compact() {
        let mut ser = Serializer::new(&ConvertOptions::new().with_indent(0));
        ser.write_value(&value!({ "a": [1, 2] }));
        assert_eq!(ser.into_inner(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_control_characters_escaped() {
        assert_eq!(quote("\u{1}"), "\"\\u0001\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
    }
}
