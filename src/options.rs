//! Format tags and conversion options.
//!
//! Every choice a user makes in a converter form (source base, binary
//! encoding, color format, output target, direction) is a closed enum here.
//! Each tag parses from the short names a UI sends (`"hex"`, `"utf16"`,
//! `"binToText"`, ...) and rejects anything else with
//! [`Error::UnsupportedOption`](crate::Error::UnsupportedOption).
//!
//! [`ConvertOptions`] carries the few knobs that affect output layout.
//!
//! ## Examples
//!
//! ```rust
//! use convkit::{BinaryEncoding, ConvertOptions, ErrorKind, NumberBase};
//!
//! let base: NumberBase = "hex".parse().unwrap();
//! assert_eq!(base, NumberBase::Hex);
//!
//! let err = "latin9".parse::<BinaryEncoding>().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedOption);
//!
//! let options = ConvertOptions::new().with_indent(4).with_table_name("people");
//! assert_eq!(options.table_name, "people");
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical tag for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($tag) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(Error::unsupported_option(format!("{} '{}'", $what, s)))
            }
        }
    };
}

tag_enum! {
    /// Radix of an integer literal.
    NumberBase, "number base" {
        #[default]
        Dec => "dec" | "decimal",
        Bin => "bin" | "binary",
        Hex => "hex" | "hexadecimal",
        Oct => "oct" | "octal",
    }
}

impl NumberBase {
    #[must_use]
    pub const fn radix(&self) -> u32 {
        match self {
            NumberBase::Dec => 10,
            NumberBase::Bin => 2,
            NumberBase::Hex => 16,
            NumberBase::Oct => 8,
        }
    }
}

tag_enum! {
    /// Per-character encoding used by the text/binary codec.
    ///
    /// `Utf8` is a fixed 16-bit group per code point, not variable-length
    /// UTF-8. `Utf16` writes each UTF-16 code unit as two little-endian bytes.
    BinaryEncoding, "binary encoding" {
        #[default]
        Ascii => "ascii",
        Utf8 => "utf8" | "utf-8",
        Utf16 => "utf16" | "utf-16" | "utf16le",
    }
}

tag_enum! {
    BinaryDirection, "binary direction" {
        #[default]
        TextToBinary => "textToBinary" | "textToBin",
        BinaryToText => "binToText" | "binaryToText",
    }
}

tag_enum! {
    /// Notation of a color literal.
    ColorFormat, "color format" {
        #[default]
        Hex => "hex",
        Rgb => "rgb",
        Hsl => "hsl",
        Cmyk => "cmyk",
    }
}

tag_enum! {
    /// Output of the JSON converter.
    StructuredTarget, "structured target" {
        #[default]
        Xml => "xml",
        Yaml => "yaml" | "yml",
    }
}

tag_enum! {
    /// Output of the CSV converter.
    CsvTarget, "CSV target" {
        #[default]
        Json => "json",
        Sql => "sql",
    }
}

tag_enum! {
    AsciiDirection, "ASCII direction" {
        #[default]
        ToCodes => "toAscii" | "toCodes",
        ToText => "toText",
    }
}

tag_enum! {
    UrlOperation, "URL operation" {
        #[default]
        Encode => "encode",
        Decode => "decode",
    }
}

tag_enum! {
    Base64Operation, "Base64 operation" {
        #[default]
        Encode => "encode",
        Decode => "decode",
    }
}

tag_enum! {
    /// Transform applied to an already-loaded file.
    FileConversion, "file conversion" {
        #[default]
        MarkdownToHtml => "md-html",
        PdfToText => "pdf-txt",
    }
}

impl FileConversion {
    /// Upper-case name of the output format, as shown in history.
    #[must_use]
    pub const fn target_label(&self) -> &'static str {
        match self {
            FileConversion::MarkdownToHtml => "HTML",
            FileConversion::PdfToText => "TXT",
        }
    }
}

/// Layout options shared by the text emitters.
///
/// # Examples
///
/// ```rust
/// use convkit::ConvertOptions;
///
/// let options = ConvertOptions::default();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.table_name, "table_name");
/// assert_eq!(options.column_type, "VARCHAR(255)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces per nesting level in XML, YAML and JSON output.
    pub indent: usize,
    /// Table used by generated SQL.
    pub table_name: String,
    /// Column type used by generated `CREATE TABLE` statements.
    pub column_type: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            indent: 2,
            table_name: "table_name".to_string(),
            column_type: "VARCHAR(255)".to_string(),
        }
    }
}

impl ConvertOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    #[must_use]
    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = column_type.into();
        self
    }
}
