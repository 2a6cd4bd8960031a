//! Text to binary-string conversion and back.
//!
//! Text is processed one Unicode code point at a time. Each
//! [`BinaryEncoding`] writes a code point differently:
//!
//! | Encoding | Text → binary | Binary → text |
//! |----------|---------------|---------------|
//! | `Ascii`  | one 8-bit group; code points above 255 are rejected | each group is a code point ≤ 255 |
//! | `Utf8`   | one group zero-padded to at least 16 bits | each group is a code point |
//! | `Utf16`  | each UTF-16 code unit as two 8-bit groups, low byte first | each group is a code point; above U+FFFF it becomes a surrogate pair |
//!
//! `Utf8` is deliberately simplified: it is a fixed-width code point dump,
//! not the variable-length UTF-8 byte sequence.
//!
//! ```rust
//! use convkit::{binary, BinaryEncoding};
//!
//! let bits = binary::text_to_binary("Hi", BinaryEncoding::Ascii).unwrap();
//! assert_eq!(bits, "01001000 01101001");
//! assert_eq!(binary::binary_to_text(&bits, BinaryEncoding::Ascii).unwrap(), "Hi");
//!
//! // U+1F600 is a surrogate pair in UTF-16
//! let bits = binary::text_to_binary("😀", BinaryEncoding::Utf16).unwrap();
//! assert_eq!(bits, "00111101 11011000 00000000 11011110");
//!
//! // decoding reads every group as a code point, so the pair comes back
//! // from one wide group
//! assert_eq!(binary::binary_to_text("11111011000000000", BinaryEncoding::Utf16).unwrap(), "😀");
//! assert_eq!(binary::binary_to_text("01001000 01101001", BinaryEncoding::Utf16).unwrap(), "Hi");
//! ```

use crate::{BinaryEncoding, Error, Result};

/// Shortest accepted binary group.
pub const MIN_GROUP_BITS: usize = 8;
/// Longest accepted binary group.
pub const MAX_GROUP_BITS: usize = 32;

/// Encodes every code point of `text` as space-separated binary groups.
///
/// # Errors
///
/// [`Error::EncodingRange`] when `encoding` is `Ascii` and a code point is
/// above 255.
pub fn text_to_binary(text: &str, encoding: BinaryEncoding) -> Result<String> {
    let mut groups = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code_point = ch as u32;
        match encoding {
            BinaryEncoding::Ascii => {
                if code_point > 0xFF {
                    return Err(Error::encoding_range(format!(
                        "non-ASCII character '{}' (U+{:04X}) cannot be encoded in 8 bits",
                        ch, code_point
                    )));
                }
                groups.push(format!("{:08b}", code_point));
            }
            BinaryEncoding::Utf8 => groups.push(format!("{:016b}", code_point)),
            BinaryEncoding::Utf16 => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    let [low, high] = unit.to_le_bytes();
                    groups.push(format!("{:08b}", low));
                    groups.push(format!("{:08b}", high));
                }
            }
        }
    }
    log::debug!(
        "encoded {} characters as {} {} groups",
        text.chars().count(),
        groups.len(),
        encoding
    );
    Ok(groups.join(" "))
}

/// Decodes whitespace-separated binary groups into text.
///
/// Every group must be 8 to 32 characters of `0`/`1`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when there are no groups
/// - [`Error::InvalidFormat`] naming the first malformed group
/// - [`Error::EncodingRange`] when a value is not representable: above 255
///   for `Ascii`, not a Unicode scalar value, or an unpaired UTF-16
///   surrogate
pub fn binary_to_text(bits: &str, encoding: BinaryEncoding) -> Result<String> {
    let values = parse_groups(bits)?;
    let text = match encoding {
        BinaryEncoding::Ascii => values
            .iter()
            .map(|&value| {
                if value > 0xFF {
                    Err(Error::encoding_range(format!(
                        "ASCII only supports 8-bit values, found {}",
                        value
                    )))
                } else {
                    scalar(value)
                }
            })
            .collect::<Result<String>>()?,
        BinaryEncoding::Utf8 => values
            .iter()
            .map(|&value| scalar(value))
            .collect::<Result<String>>()?,
        BinaryEncoding::Utf16 => decode_utf16_groups(&values)?,
    };
    log::debug!("decoded {} groups as {}", values.len(), encoding);
    Ok(text)
}

fn parse_groups(bits: &str) -> Result<Vec<u32>> {
    let groups: Vec<&str> = bits.split_whitespace().collect();
    if groups.is_empty() {
        return Err(Error::empty_input("no binary groups to decode"));
    }

    groups
        .into_iter()
        .map(|group| {
            let valid = (MIN_GROUP_BITS..=MAX_GROUP_BITS).contains(&group.len())
                && group.bytes().all(|b| b == b'0' || b == b'1');
            if !valid {
                return Err(Error::invalid_format(format!(
                    "invalid binary sequence: {}",
                    group
                )));
            }
            u32::from_str_radix(group, 2)
                .map_err(|_| Error::invalid_format(format!("invalid binary sequence: {}", group)))
        })
        .collect()
}

fn scalar(value: u32) -> Result<char> {
    char::from_u32(value).ok_or_else(|| {
        Error::encoding_range(format!("0x{:X} is not a Unicode scalar value", value))
    })
}

// Each group is one code point. Values above U+FFFF are split into a
// surrogate pair; adjacent surrogate groups combine into one character.
fn decode_utf16_groups(values: &[u32]) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(values.len());
    for &value in values {
        if value > 0x10FFFF {
            return Err(Error::encoding_range(format!(
                "0x{:X} is beyond the last Unicode code point",
                value
            )));
        }
        if value > 0xFFFF {
            let offset = value - 0x10000;
            units.push((offset / 0x400 + 0xD800) as u16);
            units.push((offset % 0x400 + 0xDC00) as u16);
        } else {
            units.push(value as u16);
        }
    }

    char::decode_utf16(units)
        .map(|unit| {
            unit.map_err(|e| {
                Error::encoding_range(format!(
                    "unpaired UTF-16 surrogate 0x{:X}",
                    e.unpaired_surrogate()
                ))
            })
        })
        .collect()
}
