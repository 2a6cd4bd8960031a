//! Standard Base64 (RFC 4648, `+` and `/`, padded) over the UTF-8 bytes of
//! a string.
//!
//! Decoding is forgiving: ASCII whitespace is ignored, padding may be left
//! off, and unused trailing bits need not be zero.
//!
//! ```rust
//! use convkit::base64;
//!
//! assert_eq!(base64::encode("héllo"), "aMOpbGxv");
//! assert_eq!(base64::decode("aMOp bGxv").unwrap(), "héllo");
//! assert_eq!(base64::decode("SGk").unwrap(), "Hi");
//! ```

use crate::{Base64Operation, Error, Result};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';

/// Encodes the UTF-8 bytes of `text`.
#[must_use]
pub fn encode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity((bytes.len() + 2) / 3 * 4);

    for chunk in bytes.chunks(3) {
        let b = [
            chunk[0],
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
        ];
        let n = (u32::from(b[0]) << 16) | (u32::from(b[1]) << 8) | u32::from(b[2]);

        for i in 0..4 {
            if i <= chunk.len() {
                let sextet = (n >> (18 - 6 * i)) & 0x3F;
                out.push(char::from(ALPHABET[sextet as usize]));
            } else {
                out.push(char::from(PAD));
            }
        }
    }
    out
}

/// Decodes Base64 and interprets the bytes as UTF-8.
///
/// # Errors
///
/// [`Error::InvalidFormat`] for a character outside the alphabet, misplaced
/// padding, an impossible length, or bytes that are not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = decode_bytes(encoded)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::invalid_format(format!("decoded Base64 is not UTF-8: {}", e)))
}

/// Decodes Base64 to raw bytes.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    let mut symbols: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if symbols.len() % 4 == 0 {
        for _ in 0..2 {
            if symbols.last() == Some(&PAD) {
                symbols.pop();
            }
        }
    }
    if symbols.len() % 4 == 1 {
        return Err(Error::invalid_format(format!(
            "Base64 input has an impossible length of {} symbols",
            symbols.len()
        )));
    }

    let mut out = Vec::with_capacity(symbols.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for (pos, &symbol) in symbols.iter().enumerate() {
        let sextet = sextet(symbol).ok_or_else(|| {
            Error::invalid_format(format!(
                "invalid Base64 character '{}' at offset {}",
                char::from(symbol).escape_default(),
                pos
            ))
        })?;
        buffer = (buffer << 6) | u32::from(sextet);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Ok(out)
}

fn sextet(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Runs `operation` on `input`.
pub fn convert(input: &str, operation: Base64Operation) -> Result<String> {
    let out = match operation {
        Base64Operation::Encode => encode(input),
        Base64Operation::Decode => decode(input)?,
    };
    log::debug!("base64 {}: {} -> {} bytes", operation, input.len(), out.len());
    Ok(out)
}
