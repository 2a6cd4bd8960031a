//! Integer conversion between bases 2, 8, 10 and 16.
//!
//! Literals are arbitrary precision, so long binary or hex strings convert
//! without rounding.
//!
//! ```rust
//! use convkit::{radix, NumberBase};
//!
//! let out = radix::convert("FF", NumberBase::Hex).unwrap();
//! assert_eq!(out.decimal, "255");
//! assert_eq!(out.binary, "11111111");
//! assert_eq!(out.hex, "FF");
//! assert_eq!(out.octal, "377");
//! ```

use crate::{Error, NumberBase, Result};
use num_bigint::BigInt;
use std::fmt;

/// One integer rendered in every supported base.
///
/// Hex digits are upper case. Negative values keep a leading `-`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseConversion {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
    pub octal: String,
}

impl BaseConversion {
    fn from_bigint(value: &BigInt) -> Self {
        BaseConversion {
            decimal: value.to_str_radix(10),
            binary: value.to_str_radix(2),
            hex: value.to_str_radix(16).to_uppercase(),
            octal: value.to_str_radix(8),
        }
    }

    /// The rendering in a particular base.
    #[must_use]
    pub fn get(&self, base: NumberBase) -> &str {
        match base {
            NumberBase::Dec => &self.decimal,
            NumberBase::Bin => &self.binary,
            NumberBase::Hex => &self.hex,
            NumberBase::Oct => &self.octal,
        }
    }
}

impl fmt::Display for BaseConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal: {}\nBinary: {}\nHex: {}\nOctal: {}",
            self.decimal, self.binary, self.hex, self.octal
        )
    }
}

/// Parses `literal` in `base` and renders it in all four bases.
///
/// Surrounding whitespace is ignored and a single leading `-` is allowed.
/// Hex digits may be either case.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if the literal is empty or contains a character
/// outside the digit set of `base`.
pub fn convert(literal: &str, base: NumberBase) -> Result<BaseConversion> {
    let literal = literal.trim();
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() {
        return Err(Error::invalid_format(format!(
            "expected a {} integer, found '{}'",
            base_name(base),
            literal
        )));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(base.radix())) {
        return Err(Error::invalid_format(format!(
            "'{}' is not a valid digit in {} literal '{}'",
            bad,
            base_name(base),
            literal
        )));
    }

    let value = BigInt::parse_bytes(literal.as_bytes(), base.radix()).ok_or_else(|| {
        Error::invalid_format(format!("cannot parse '{}' as {}", literal, base_name(base)))
    })?;
    log::debug!("converted {} literal of {} digits", base, digits.len());
    Ok(BaseConversion::from_bigint(&value))
}

fn base_name(base: NumberBase) -> &'static str {
    match base {
        NumberBase::Dec => "decimal",
        NumberBase::Bin => "binary",
        NumberBase::Hex => "hexadecimal",
        NumberBase::Oct => "octal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_decimal() {
        let out = convert("10", NumberBase::Dec).unwrap();
        assert_eq!(out.binary, "1010");
        assert_eq!(out.hex, "A");
        assert_eq!(out.octal, "12");
    }

    #[test]
    fn test_lowercase_hex_input() {
        assert_eq!(convert("ff", NumberBase::Hex).unwrap().decimal, "255");
    }

    #[test]
    fn test_negative() {
        let out = convert("-255", NumberBase::Dec).unwrap();
        assert_eq!(out.hex, "-FF");
        assert_eq!(out.binary, "-11111111");
    }

    #[test]
    fn test_zero() {
        let out = convert("0", NumberBase::Oct).unwrap();
        assert_eq!(out, BaseConversion {
            decimal: "0".into(),
            binary: "0".into(),
            hex: "0".into(),
            octal: "0".into(),
        });
    }

    #[test]
    fn test_beyond_u64() {
        let out = convert("FFFFFFFFFFFFFFFFFFFF", NumberBase::Hex).unwrap();
        assert_eq!(out.decimal, "1208925819614629174706175");
        assert_eq!(out.binary, "1".repeat(80));
    }

    #[test]
    fn test_invalid_digits() {
        for (literal, base) in [
            ("abc", NumberBase::Dec),
            ("102", NumberBase::Bin),
            ("8", NumberBase::Oct),
            ("G1", NumberBase::Hex),
            ("1_000", NumberBase::Dec),
            ("+5", NumberBase::Dec),
            ("--5", NumberBase::Dec),
        ] {
            let err = convert(literal, base).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{literal}");
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            convert("  ", NumberBase::Hex).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
        assert!(convert("-", NumberBase::Dec).is_err());
    }

    #[test]
    fn test_display() {
        let out = convert("8", NumberBase::Dec).unwrap();
        assert_eq!(out.to_string(), "Decimal: 8\nBinary: 1000\nHex: 8\nOctal: 10");
        assert_eq!(out.get(NumberBase::Oct), "10");
    }
}
