//! Text to decimal character codes and back.
//!
//! ```rust
//! use convkit::ascii;
//!
//! assert_eq!(ascii::to_codes("Hi!"), "72 105 33");
//! assert_eq!(ascii::to_text("72, 105,33").unwrap(), "Hi!");
//! ```

use crate::{AsciiDirection, Error, Result};

/// Writes the code point of every character as a space-separated decimal.
#[must_use]
pub fn to_codes(text: &str) -> String {
    text.chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads decimal code points separated by spaces and/or commas.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] for a token that is not a decimal integer
/// - [`Error::EncodingRange`] for a value that is not a Unicode scalar value
pub fn to_text(codes: &str) -> Result<String> {
    codes
        .split([' ', ','])
        .filter(|token| !token.is_empty())
        .map(|token| {
            let code: u32 = token
                .parse()
                .map_err(|_| Error::invalid_format(format!("'{}' is not a character code", token)))?;
            char::from_u32(code).ok_or_else(|| {
                Error::encoding_range(format!("{} is not a Unicode scalar value", code))
            })
        })
        .collect()
}

/// Runs the conversion in `direction`. Surrounding whitespace is trimmed
/// first.
pub fn convert(input: &str, direction: AsciiDirection) -> Result<String> {
    let input = input.trim();
    let out = match direction {
        AsciiDirection::ToCodes => to_codes(input),
        AsciiDirection::ToText => to_text(input)?,
    };
    log::debug!("ascii {}: {} -> {} bytes", direction, input.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_to_codes() {
        assert_eq!(to_codes("A z"), "65 32 122");
        assert_eq!(to_codes("é😀"), "233 128512");
        assert_eq!(to_codes(""), "");
    }

    #[test]
    fn test_to_text_separators() {
        assert_eq!(to_text("65 66").unwrap(), "AB");
        assert_eq!(to_text("65,66").unwrap(), "AB");
        assert_eq!(to_text(" 65 ,, 66 ").unwrap(), "AB");
        assert_eq!(to_text("").unwrap(), "");
    }

    #[test]
    fn test_to_text_errors() {
        assert_eq!(to_text("65 x").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(to_text("-1").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(to_text("55296").unwrap_err().kind(), ErrorKind::EncodingRange);
        assert_eq!(to_text("1114112").unwrap_err().kind(), ErrorKind::EncodingRange);
    }

    #[test]
    fn test_convert_trims() {
        assert_eq!(convert("  Hi \n", AsciiDirection::ToCodes).unwrap(), "72 105");
        assert_eq!(convert("\t72 105\n", AsciiDirection::ToText).unwrap(), "Hi");
    }
}
