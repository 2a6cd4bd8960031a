//! # convkit
//!
//! Converters between common textual representations of data: number bases,
//! text and binary, color spaces, JSON to XML/YAML, CSV to JSON/SQL, Base64,
//! URL encoding, character codes, date/time formats and a small Markdown
//! transform.
//!
//! Every converter is a pure function from strings and a format tag to either
//! a complete result or exactly one [`Error`]. Nothing is cached and there is
//! no shared state between calls, so partial output never escapes.
//!
//! ## Quick Start
//!
//! ```rust
//! use convkit::{binary, color, radix, BinaryEncoding, ColorFormat, NumberBase};
//!
//! let n = radix::convert("FF", NumberBase::Hex).unwrap();
//! assert_eq!((n.decimal.as_str(), n.octal.as_str()), ("255", "377"));
//!
//! let bits = binary::text_to_binary("Hi", BinaryEncoding::Ascii).unwrap();
//! assert_eq!(bits, "01001000 01101001");
//!
//! let c = color::convert("rgb(255, 128, 0)", ColorFormat::Rgb).unwrap();
//! assert_eq!(c.hex(), "#ff8000");
//! assert_eq!(c.hsl_string(), "hsl(30, 100%, 50%)");
//! ```
//!
//! ### Structured data
//!
//! JSON text is parsed into an ordered [`Value`] tree, which the XML and YAML
//! emitters walk. Member order is preserved.
//!
//! ```rust
//! use convkit::{from_json_str, to_yaml, ConvertOptions};
//!
//! let v = from_json_str(r#"{"a":1,"b":{"c":true}}"#).unwrap();
//! assert_eq!(to_yaml(&v, &ConvertOptions::default()), "a: 1\nb:\n  c: true\n");
//! ```
//!
//! ### Dispatching by tag
//!
//! A UI that lets the user pick the converter and its options builds a
//! [`Request`] and calls [`convert`]. The [`Output`] carries the short
//! summary strings recorded in [`history`].
//!
//! ```rust
//! use convkit::{convert, ConvertOptions, CsvTarget, Request};
//!
//! let req = Request::Csv { input: "name,age\nAlice,30".into(), target: "json".parse::<CsvTarget>().unwrap() };
//! let out = convert(&req, &ConvertOptions::default()).unwrap();
//! assert_eq!((out.from.as_str(), out.to.as_str()), ("CSV", "JSON"));
//! ```
//!
//! ## Precision
//!
//! HSL and CMYK components are whole numbers, so color conversions through
//! them are lossy. Base conversion uses arbitrary-precision integers and is
//! exact for any length of input.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - number bases, binary and the small codecs
//! - **`colors.rs`** - one color in every notation
//! - **`structured.rs`** - JSON to XML and YAML, CSV to JSON and SQL
//!
//! Run any of them with: `cargo run --example <name>`

pub mod ascii;
pub mod base64;
pub mod binary;
pub mod color;
pub mod datetime;
pub mod error;
pub mod file;
pub mod history;
pub mod macros;
pub mod map;
pub mod options;
pub mod radix;
pub mod request;
pub mod ser;
pub mod tabular;
pub mod url;
pub mod value;
pub mod xml;
pub mod yaml;

pub use color::{CmykColor, ColorConversion, HslColor, RgbColor};
pub use error::{Error, ErrorKind, Result};
pub use map::Map;
pub use options::{
    AsciiDirection, Base64Operation, BinaryDirection, BinaryEncoding, ColorFormat,
    ConvertOptions, CsvTarget, FileConversion, NumberBase, StructuredTarget, UrlOperation,
};
pub use request::{convert, Output, Request};
pub use ser::Serializer;
pub use value::{Number, Value};
pub use xml::to_xml;
pub use yaml::to_yaml;

/// Parses JSON text into a [`Value`].
///
/// Object members keep their source order; a repeated key keeps its first
/// position and its last value. Nesting is bounded by `serde_json`'s
/// recursion limit, so hostile input fails instead of exhausting the stack.
///
/// # Examples
///
/// ```rust
/// use convkit::{from_json_str, value};
///
/// let v = from_json_str(r#"{"tags": ["a", "b"], "n": null}"#).unwrap();
/// assert_eq!(v, value!({ "tags": ["a", "b"], "n": null }));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the line and column of the first problem.
pub fn from_json_str(s: &str) -> Result<Value> {
    Ok(serde_json::from_str(s)?)
}

/// Parses JSON bytes into a [`Value`].
///
/// # Errors
///
/// As [`from_json_str`]; bytes that are not UTF-8 are a syntax error.
pub fn from_json_slice(v: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(v)?)
}

/// Renders a [`Value`] as JSON text indented by `options.indent`.
#[must_use]
pub fn to_json_pretty(value: &Value, options: &ConvertOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.write_value(value);
    serializer.into_inner()
}
