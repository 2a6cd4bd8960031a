//! One entry point for every converter.
//!
//! A [`Request`] names the converter and carries its input and tag; [`convert`]
//! dispatches it and returns the output text together with the short
//! `from`/`to` summary a UI shows in its conversion history.
//!
//! ```rust
//! use convkit::{convert, ColorFormat, ConvertOptions, Request};
//!
//! let out = convert(
//!     &Request::Color { input: "#fff".into(), format: ColorFormat::Hex },
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(out.from, "HEX: #fff");
//! assert_eq!(out.to, "All format conversions");
//! assert!(out.text.starts_with("HEX: #ffffff\n"));
//! ```

use crate::datetime::{self, DateTimeInput};
use crate::history::HistoryEntry;
use crate::{
    ascii, base64, binary, color, file, radix, tabular, url, xml, yaml, AsciiDirection,
    Base64Operation, BinaryDirection, BinaryEncoding, ColorFormat, ConvertOptions, CsvTarget,
    FileConversion, NumberBase, Result, StructuredTarget, UrlOperation,
};
use chrono::{DateTime, Utc};

const BASE64_PREVIEW_CHARS: usize = 20;

/// A conversion to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Number {
        input: String,
        base: NumberBase,
    },
    Ascii {
        input: String,
        direction: AsciiDirection,
    },
    Color {
        input: String,
        format: ColorFormat,
    },
    Base64 {
        input: String,
        operation: Base64Operation,
    },
    /// JSON text to XML or YAML.
    Structured {
        json: String,
        target: StructuredTarget,
    },
    Binary {
        input: String,
        direction: BinaryDirection,
        encoding: BinaryEncoding,
    },
    DateTime {
        input: DateTimeInput,
    },
    Csv {
        input: String,
        target: CsvTarget,
    },
    Url {
        input: String,
        operation: UrlOperation,
    },
    /// A file the host has already read into memory.
    File {
        name: String,
        contents: String,
        conversion: FileConversion,
    },
}

/// Result text plus its history summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub from: String,
    pub to: String,
    pub details: Option<String>,
}

impl Output {
    fn new(text: String, from: impl Into<String>, to: impl Into<String>) -> Self {
        Output {
            text,
            from: from.into(),
            to: to.into(),
            details: None,
        }
    }

    /// The history record for this conversion.
    #[must_use]
    pub fn history_entry(&self, timestamp: DateTime<Utc>) -> HistoryEntry {
        let entry = HistoryEntry::new(self.from.clone(), self.to.clone(), timestamp);
        match &self.details {
            Some(details) => entry.with_details(details.clone()),
            None => entry,
        }
    }
}

/// Runs `request`. Either the whole conversion succeeds or nothing is
/// produced.
///
/// Date/time requests render local time in the system timezone.
///
/// # Errors
///
/// Whatever the selected converter reports.
pub fn convert(request: &Request, options: &ConvertOptions) -> Result<Output> {
    let result = dispatch(request, options);
    if let Err(e) = &result {
        log::debug!("conversion failed: {}", e);
    }
    result
}

fn dispatch(request: &Request, options: &ConvertOptions) -> Result<Output> {
    match request {
        Request::Number { input, base } => {
            let text = radix::convert(input, *base)?.to_string();
            Ok(Output::new(
                text,
                format!("{}: {}", base.as_str().to_uppercase(), input.trim()),
                "Converted to all formats",
            ))
        }
        Request::Ascii { input, direction } => {
            let text = ascii::convert(input, *direction)?;
            let (from, to) = match direction {
                AsciiDirection::ToCodes => ("Text", "ASCII Codes"),
                AsciiDirection::ToText => ("ASCII Codes", "Text"),
            };
            Ok(Output::new(text, from, to))
        }
        Request::Color { input, format } => {
            let text = color::convert(input, *format)?.to_string();
            Ok(Output::new(
                text,
                format!("{}: {}", format.as_str().to_uppercase(), input.trim()),
                "All format conversions",
            ))
        }
        Request::Base64 { input, operation } => {
            let text = base64::convert(input, *operation)?;
            Ok(match operation {
                Base64Operation::Encode => {
                    let preview: String = text.chars().take(BASE64_PREVIEW_CHARS).collect();
                    let to = format!("Base64: {}...", preview);
                    Output::new(text, "Text", to)
                }
                Base64Operation::Decode => Output::new(text, "Base64", "Decoded text"),
            })
        }
        Request::Structured { json, target } => {
            let value = crate::from_json_str(json)?;
            let text = match target {
                StructuredTarget::Xml => xml::to_xml(&value, options)?,
                StructuredTarget::Yaml => yaml::to_yaml(&value, options),
            };
            Ok(Output::new(text, "JSON", target.as_str().to_uppercase()))
        }
        Request::Binary {
            input,
            direction,
            encoding,
        } => {
            let (text, from, to) = match direction {
                BinaryDirection::TextToBinary => {
                    (binary::text_to_binary(input, *encoding)?, "Text", "Binary")
                }
                BinaryDirection::BinaryToText => {
                    (binary::binary_to_text(input, *encoding)?, "Binary", "Text")
                }
            };
            let mut output = Output::new(text, from, to);
            output.details = Some(encoding.as_str().to_uppercase());
            Ok(output)
        }
        Request::DateTime { input } => {
            let text = datetime::convert(input)?.to_string();
            Ok(Output::new(text, input.source_label(), "Converted timestamp"))
        }
        Request::Csv { input, target } => {
            let text = tabular::convert(input, *target, options)?;
            Ok(Output::new(text, "CSV", target.as_str().to_uppercase()))
        }
        Request::Url { input, operation } => {
            let text = url::convert(input, *operation)?;
            let (from, to) = match operation {
                UrlOperation::Encode => ("URL", "Encoded"),
                UrlOperation::Decode => ("Encoded URL", "Decoded"),
            };
            Ok(Output::new(text, from, to))
        }
        Request::File {
            name,
            contents,
            conversion,
        } => {
            let text = file::convert(contents, *conversion)?;
            Ok(Output::new(text, name.clone(), conversion.target_label()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn run(request: Request) -> Output {
        convert(&request, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_number_summary() {
        let out = run(Request::Number {
            input: " ff ".into(),
            base: NumberBase::Hex,
        });
        assert_eq!(out.from, "HEX: ff");
        assert_eq!(out.to, "Converted to all formats");
        assert_eq!(out.text, "Decimal: 255\nBinary: 11111111\nHex: FF\nOctal: 377");
    }

    #[test]
    fn test_base64_preview() {
        let out = run(Request::Base64 {
            input: "The quick brown fox jumps".into(),
            operation: Base64Operation::Encode,
        });
        assert_eq!(out.text, "VGhlIHF1aWNrIGJyb3duIGZveCBqdW1wcw==");
        assert_eq!(out.to, "Base64: VGhlIHF1aWNrIGJyb3du...");
    }

    #[test]
    fn test_structured() {
        let out = run(Request::Structured {
            json: r#"{"a":1,"b":{"c":true}}"#.into(),
            target: StructuredTarget::Yaml,
        });
        assert_eq!(out.text, "a: 1\nb:\n  c: true\n");
        assert_eq!((out.from.as_str(), out.to.as_str()), ("JSON", "YAML"));
    }

    #[test]
    fn test_structured_bad_json() {
        let err = convert(
            &Request::Structured {
                json: "{".into(),
                target: StructuredTarget::Xml,
            },
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_binary_details() {
        let out = run(Request::Binary {
            input: "A".into(),
            direction: BinaryDirection::TextToBinary,
            encoding: BinaryEncoding::Utf16,
        });
        assert_eq!(out.details.as_deref(), Some("UTF16"));
        let entry = out.history_entry(Utc::now());
        assert_eq!(entry.to_string(), "Text → Binary (UTF16)");
    }

    #[test]
    fn test_datetime_label() {
        let out = run(Request::DateTime {
            input: DateTimeInput::unix("0"),
        });
        assert_eq!(out.from, "Unix");
        assert!(out.text.ends_with("Unix: 0"));
    }

    #[test]
    fn test_csv_and_url_and_file() {
        let csv = run(Request::Csv {
            input: "a\n1".into(),
            target: CsvTarget::Sql,
        });
        assert_eq!(csv.to, "SQL");

        let url = run(Request::Url {
            input: "a%20b".into(),
            operation: UrlOperation::Decode,
        });
        assert_eq!((url.from.as_str(), url.to.as_str()), ("Encoded URL", "Decoded"));

        let file = run(Request::File {
            name: "notes.md".into(),
            contents: "# hi".into(),
            conversion: FileConversion::MarkdownToHtml,
        });
        assert_eq!(file.text, "<h1>hi</h1>");
        assert_eq!((file.from.as_str(), file.to.as_str()), ("notes.md", "HTML"));
    }

    #[test]
    fn test_ascii_direction_labels() {
        let out = run(Request::Ascii {
            input: "72 105".into(),
            direction: AsciiDirection::ToText,
        });
        assert_eq!(out.text, "Hi");
        assert_eq!((out.from.as_str(), out.to.as_str()), ("ASCII Codes", "Text"));
    }
}
