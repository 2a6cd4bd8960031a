//! Percent-encoding with URI-component rules.
//!
//! Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is written as
//! `%XX` escapes of its UTF-8 bytes, so reserved characters such as `/`, `?`
//! and `&` are encoded too.
//!
//! ```rust
//! use convkit::url;
//!
//! assert_eq!(url::encode("a b/c?x=ü"), "a%20b%2Fc%3Fx%3D%C3%BC");
//! assert_eq!(url::decode("a%20b%2Fc%3Fx%3D%C3%BC").unwrap(), "a b/c?x=ü");
//! ```

use crate::{Error, Result, UrlOperation};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-encodes every byte outside the unreserved set.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(b >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(b & 0x0F)]));
        }
    }
    out
}

/// Replaces every `%XX` escape with its byte and reads the result as UTF-8.
///
/// `+` is left alone; it is not a space in this encoding.
///
/// # Errors
///
/// [`Error::InvalidFormat`] for a `%` not followed by two hex digits, or for
/// escapes that do not form valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes
                .get(i + 1..i + 3)
                .and_then(|pair| Some((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
                .ok_or_else(|| {
                    Error::invalid_format(format!("malformed percent escape at offset {}", i))
                })?;
            out.push(escape);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|e| {
        Error::invalid_format(format!(
            "percent escapes are not valid UTF-8 near byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

fn hex_value(digit: u8) -> Option<u8> {
    char::from(digit).to_digit(16).map(|d| d as u8)
}

/// Runs `operation` on `input`.
pub fn convert(input: &str, operation: UrlOperation) -> Result<String> {
    let out = match operation {
        UrlOperation::Encode => encode(input),
        UrlOperation::Decode => decode(input)?,
    };
    log::debug!("url {}: {} -> {} bytes", operation, input.len(), out.len());
    Ok(out)
}
