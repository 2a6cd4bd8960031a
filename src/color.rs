//! Color conversion between HEX, RGB, HSL and CMYK.
//!
//! Every input is parsed into an [`RgbColor`], which is then rendered in all
//! four notations. HSL and CMYK components are whole degrees and percents, so
//! converting through them is lossy: an RGB → HSL → RGB trip can drift by up
//! to 5 per channel and an RGB → CMYK → RGB trip by up to 2. HEX is exact.
//!
//! ## Accepted input
//!
//! | Format | Grammar |
//! |--------|---------|
//! | HEX  | optional `#`, then 3 or 6 hex digits (`#f0a` doubles each digit) |
//! | RGB  | `rgb(INT,INT,INT)`; whitespace allowed only after the commas |
//! | HSL  | `hsl(INT,INT%,INT%)` |
//! | CMYK | `cmyk(INT%,INT%,INT%,INT%)` |
//!
//! Function names are case-insensitive and the function may appear anywhere
//! in the input (`color: rgb(1,2,3);` works). Out-of-range components are
//! pulled into range: RGB channels cap at 255, percentages at 100, and hue
//! wraps modulo 360.
//!
//! ```rust
//! use convkit::{color, ColorFormat};
//!
//! let out = color::convert("hsl(210, 65%, 20%)", ColorFormat::Hsl).unwrap();
//! assert_eq!(out.hex(), "#123354");
//! assert_eq!(out.rgb_string(), "rgb(18, 51, 84)");
//! assert_eq!(
//!     out.to_string(),
//!     "HEX: #123354\nRGB: rgb(18, 51, 84)\nHSL: 210°, 65%, 20%\nCMYK: 79%, 39%, 0%, 67%"
//! );
//! ```

use crate::{ColorFormat, Error, Result};
use std::fmt;

/// The pivot color; every conversion passes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in whole degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct HslColor {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Cyan, magenta, yellow and key, each in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CmykColor {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    /// Lower-case `#rrggbb`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convkit::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 8, 0).to_hex(), "#ff0800");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Standard RGB → HSL, rounded to whole degrees and percents.
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let sector = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (sector * 60.0, s)
        };

        HslColor {
            h: (round(h) as u16) % 360,
            s: round(s * 100.0) as u8,
            l: round(l * 100.0) as u8,
        }
    }

    /// RGB → CMYK, rounded to whole percents. Pure black is `0, 0, 0, 100`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convkit::{CmykColor, RgbColor};
    ///
    /// assert_eq!(
    ///     RgbColor::new(0, 0, 0).to_cmyk(),
    ///     CmykColor { c: 0, m: 0, y: 0, k: 100 }
    /// );
    /// ```
    #[must_use]
    pub fn to_cmyk(&self) -> CmykColor {
        let c = 1.0 - f64::from(self.r) / 255.0;
        let m = 1.0 - f64::from(self.g) / 255.0;
        let y = 1.0 - f64::from(self.b) / 255.0;
        let k = c.min(m).min(y);

        let ink = |channel: f64| -> u8 {
            if k >= 1.0 {
                0
            } else {
                round((channel - k) / (1.0 - k) * 100.0) as u8
            }
        };

        CmykColor {
            c: ink(c),
            m: ink(m),
            y: ink(y),
            k: round(k * 100.0) as u8,
        }
    }
}

impl HslColor {
    /// Builds an HSL color, wrapping the hue and capping the percentages.
    #[must_use]
    pub fn new(h: u32, s: u32, l: u32) -> Self {
        HslColor {
            h: (h % 360) as u16,
            s: s.min(100) as u8,
            l: l.min(100) as u8,
        }
    }

    /// Chroma/sector HSL → RGB.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        RgbColor {
            r: channel(r + m),
            g: channel(g + m),
            b: channel(b + m),
        }
    }
}

impl CmykColor {
    /// Builds a CMYK color, capping each component at 100.
    #[must_use]
    pub fn new(c: u32, m: u32, y: u32, k: u32) -> Self {
        CmykColor {
            c: c.min(100) as u8,
            m: m.min(100) as u8,
            y: y.min(100) as u8,
            k: k.min(100) as u8,
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let k = 1.0 - f64::from(self.k) / 100.0;
        let ink = |v: u8| channel((1.0 - f64::from(v) / 100.0) * k);
        RgbColor {
            r: ink(self.c),
            g: ink(self.m),
            b: ink(self.y),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

// halves round up
fn round(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn channel(unit: f64) -> u8 {
    round(unit * 255.0).clamp(0.0, 255.0) as u8
}

/// A color rendered in every notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorConversion {
    pub rgb: RgbColor,
    pub hsl: HslColor,
    pub cmyk: CmykColor,
}

impl ColorConversion {
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        ColorConversion {
            rgb,
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
        }
    }

    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    #[must_use]
    pub fn rgb_string(&self) -> String {
        self.rgb.to_string()
    }

    #[must_use]
    pub fn hsl_string(&self) -> String {
        self.hsl.to_string()
    }

    #[must_use]
    pub fn cmyk_string(&self) -> String {
        self.cmyk.to_string()
    }
}

impl fmt::Display for ColorConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let HslColor { h, s, l } = self.hsl;
        let CmykColor { c, m, y, k } = self.cmyk;
        write!(
            f,
            "HEX: {}\nRGB: {}\nHSL: {}°, {}%, {}%\nCMYK: {}%, {}%, {}%, {}%",
            self.hex(),
            self.rgb,
            h,
            s,
            l,
            c,
            m,
            y,
            k
        )
    }
}

/// Parses `input` as `format` and renders the color in all notations.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `input` does not match the grammar of
/// `format`.
pub fn convert(input: &str, format: ColorFormat) -> Result<ColorConversion> {
    let rgb = parse(input, format)?;
    log::debug!("parsed {} color as {:?}", format, rgb);
    Ok(ColorConversion::from_rgb(rgb))
}

/// Parses `input` as `format` into the RGB pivot.
pub fn parse(input: &str, format: ColorFormat) -> Result<RgbColor> {
    let input = input.trim();
    match format {
        ColorFormat::Hex => parse_hex(input),
        ColorFormat::Rgb => parse_rgb(input),
        ColorFormat::Hsl => parse_hsl(input),
        ColorFormat::Cmyk => parse_cmyk(input),
    }
}

/// Parses `#rgb` or `#rrggbb` (the `#` is optional).
///
/// # Examples
///
/// ```rust
/// use convkit::{color, RgbColor};
///
/// assert_eq!(color::parse_hex("#0f8").unwrap(), RgbColor::new(0, 255, 136));
/// assert!(color::parse_hex("#12345").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<RgbColor> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_format(format!(
            "'{}' contains a non-hex digit",
            input
        )));
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        n => {
            return Err(Error::invalid_format(format!(
                "HEX color needs 3 or 6 digits, found {}",
                n
            )))
        }
    };

    let num = u32::from_str_radix(&expanded, 16)
        .map_err(|_| Error::invalid_format(format!("'{}' is not a HEX color", input)))?;
    Ok(RgbColor {
        r: ((num >> 16) & 0xFF) as u8,
        g: ((num >> 8) & 0xFF) as u8,
        b: (num & 0xFF) as u8,
    })
}

/// Parses `rgb(r, g, b)`, capping each channel at 255.
pub fn parse_rgb(input: &str) -> Result<RgbColor> {
    let [r, g, b] = scan_call::<3>(input, "rgb", [false; 3])
        .ok_or_else(|| Error::invalid_format("expected rgb(r, g, b)"))?;
    let cap = |v: u32| v.min(255) as u8;
    Ok(RgbColor::new(cap(r), cap(g), cap(b)))
}

/// Parses `hsl(h, s%, l%)` and converts it to RGB.
pub fn parse_hsl(input: &str) -> Result<RgbColor> {
    let [h, s, l] = scan_call::<3>(input, "hsl", [false, true, true])
        .ok_or_else(|| Error::invalid_format("expected hsl(h, s%, l%)"))?;
    Ok(HslColor::new(h, s, l).to_rgb())
}

/// Parses `cmyk(c%, m%, y%, k%)` and converts it to RGB.
pub fn parse_cmyk(input: &str) -> Result<RgbColor> {
    let [c, m, y, k] = scan_call::<4>(input, "cmyk", [true; 4])
        .ok_or_else(|| Error::invalid_format("expected cmyk(c%, m%, y%, k%)"))?;
    Ok(CmykColor::new(c, m, y, k).to_rgb())
}

/// Finds the first `name(ARG,ARG,...)` in `input` whose arguments are bare
/// integers, each followed by `%` where `percent` says so. Whitespace is
/// allowed only after commas.
fn scan_call<const N: usize>(input: &str, name: &str, percent: [bool; N]) -> Option<[u32; N]> {
    input
        .char_indices()
        .filter_map(|(start, _)| input.get(start..))
        .filter(|rest| {
            rest.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        })
        .find_map(|rest| match_args(&rest[name.len()..], percent))
}

fn match_args<const N: usize>(text: &str, percent: [bool; N]) -> Option<[u32; N]> {
    let mut rest = text.strip_prefix('(')?;
    let mut values = [0u32; N];
    for (i, value) in values.iter_mut().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix(',')?.trim_start();
        }
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        *value = rest[..digits].bytes().fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        });
        rest = &rest[digits..];
        if percent[i] {
            rest = rest.strip_prefix('%')?;
        }
    }
    rest.strip_prefix(')').map(|_| values)
}
