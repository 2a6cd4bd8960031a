//! One color read in every notation.
//!
//! Run with: cargo run --example colors

use convkit::{color, ColorFormat};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = [
        ("#3a7bd5", ColorFormat::Hex),
        ("rgb(58, 123, 213)", ColorFormat::Rgb),
        ("hsl(215, 65%, 53%)", ColorFormat::Hsl),
        ("cmyk(73%, 42%, 0%, 16%)", ColorFormat::Cmyk),
    ];

    for (input, format) in inputs {
        let out = color::convert(input, format)?;
        println!("{} ({})\n{}\n", input, format, out);
    }

    // HSL holds whole percents only, so this trip drifts
    let original = color::parse_hex("#02e4e6")?;
    let back = original.to_hsl().to_rgb();
    println!("{} -> {} -> {}", original.to_hex(), original.to_hsl(), back.to_hex());

    Ok(())
}
