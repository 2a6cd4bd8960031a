//! JSON to XML emission.
//!
//! Every member of an object (or element of an array, keyed by its index)
//! becomes an element named after its key:
//!
//! - containers recurse one indent level deeper, with the open and close tags
//!   on their own lines
//! - scalars print inline, with a `type="..."` attribute unless they are
//!   strings
//!
//! The attribute is the JSON kind of the value, so `null` is tagged
//! `type="null"` rather than `type="object"`.
//!
//! ```rust
//! use convkit::{to_xml, value, ConvertOptions};
//!
//! let v = value!({ "user": { "name": "Ann", "age": 31 }, "ok": true });
//! let xml = to_xml(&v, &ConvertOptions::default()).unwrap();
//! assert_eq!(
//!     xml,
//!     "<user>\n  <name>Ann</name>\n  <age type=\"number\">31</age>\n</user>\n<ok type=\"boolean\">true</ok>\n"
//! );
//! ```
//!
//! The output is a pragmatic display format rather than a conforming XML
//! document: there is no prolog or single root element, and array indices
//! become element names as-is.

use crate::{ConvertOptions, Error, Result, Value};

/// Converts a JSON tree to XML text.
///
/// Unless the top-level value is an array, literal `<root>` and `</root>` tags
/// are removed from the result.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] when `value` is a scalar, since a scalar
/// has no key to name an element after.
pub fn to_xml(value: &Value, options: &ConvertOptions) -> Result<String> {
    if !value.is_container() {
        return Err(Error::invalid_format(format!(
            "XML output needs an object or array at the top level, found {}",
            value.kind_name()
        )));
    }

    let xml = fragment(value, 0, options.indent);
    log::debug!("rendered {} bytes of XML", xml.len());
    if value.is_array() {
        Ok(xml)
    } else {
        Ok(xml.replace("<root>", "").replace("</root>", ""))
    }
}

/// Renders the members of `value` as elements indented by `depth` levels of
/// `unit` spaces. Scalars render as an empty string.
///
/// # Examples
///
/// ```rust
/// use convkit::{value, xml};
///
/// assert_eq!(xml::fragment(&value!({ "a": "x" }), 1, 4), "    <a>x</a>\n");
/// ```
#[must_use]
pub fn fragment(value: &Value, depth: usize, unit: usize) -> String {
    let mut out = String::new();
    write_members(&mut out, value, depth, unit);
    out
}

fn write_members(out: &mut String, value: &Value, depth: usize, unit: usize) {
    let pad = " ".repeat(depth * unit);
    for (key, member) in value.entries() {
        if member.is_container() {
            out.push_str(&format!("{pad}<{key}>\n"));
            write_members(out, member, depth + 1, unit);
            out.push_str(&format!("{pad}</{key}>\n"));
        } else {
            let type_attr = if member.is_string() {
                String::new()
            } else {
                format!(" type=\"{}\"", member.kind_name())
            };
            out.push_str(&format!(
                "{pad}<{key}{type_attr}>{}</{key}>\n",
                escape_text(&scalar_text(member))
            ));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, ErrorKind};

    fn xml(v: &Value) -> String {
        to_xml(v, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_type_attributes() {
        let v = value!({ "s": "x", "n": 1.5, "b": false, "z": null });
        assert_eq!(
            xml(&v),
            "<s>x</s>\n<n type=\"number\">1.5</n>\n<b type=\"boolean\">false</b>\n<z type=\"null\">null</z>\n"
        );
    }

    #[test]
    fn test_array_members_keyed_by_index() {
        let v = value!({ "tags": ["a", "b"] });
        assert_eq!(xml(&v), "<tags>\n  <0>a</0>\n  <1>b</1>\n</tags>\n");
    }

    #[test]
    fn test_top_level_array() {
        let v = value!([{ "root": 1 }]);
        assert_eq!(
            xml(&v),
            "<0>\n  <root type=\"number\">1</root>\n</0>\n"
        );
    }

    #[test]
    fn test_root_wrapper_stripped() {
        let v = value!({ "root": { "a": "x" } });
        assert_eq!(xml(&v), "\n  <a>x</a>\n\n");
    }

    #[test]
    fn test_empty_container_member() {
        let v = value!({ "e": {} });
        assert_eq!(xml(&v), "<e>\n</e>\n");
    }

    #[test]
    fn test_text_escaped() {
        let v = value!({ "expr": "a < b && c" });
        assert_eq!(xml(&v), "<expr>a &lt; b &amp;&amp; c</expr>\n");
    }

    #[test]
    fn test_scalar_root_rejected() {
        let err = to_xml(&value!(5), &ConvertOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_custom_indent() {
        let v = value!({ "a": { "b": "c" } });
        let out = to_xml(&v, &ConvertOptions::new().with_indent(4)).unwrap();
        assert_eq!(out, "<a>\n    <b>c</b>\n</a>\n");
    }
}
