//! Number bases, binary text and the small codecs.
//!
//! Run with: cargo run --example simple

use convkit::{ascii, base64, binary, radix, url, BinaryEncoding, NumberBase};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let number = radix::convert("2024", NumberBase::Dec)?;
    println!("{}\n", number);

    for encoding in BinaryEncoding::ALL {
        match binary::text_to_binary("Hi ☕", *encoding) {
            Ok(bits) => println!("{:>5}: {}", encoding, bits),
            Err(e) => println!("{:>5}: {}", encoding, e),
        }
    }
    println!();

    let encoded = base64::encode("naïve café");
    println!("Base64: {}", encoded);
    println!("Decoded: {}", base64::decode(&encoded)?);

    let query = url::encode("q=rust & serde/json");
    println!("URL: {}", query);

    let codes = ascii::to_codes("Rust");
    println!("Codes: {} -> {}", codes, ascii::to_text(&codes)?);

    Ok(())
}
