//! Byte-buffer decoding with a fixed fallback chain.

use encoding_rs::BIG5;

/// Decode raw input bytes to text.
///
/// Strict UTF-8 is tried first. Legacy exports of the card format are
/// Big5, so that is the second attempt; if Big5 also reports malformed
/// sequences the bytes are decoded as lossy UTF-8, which cannot fail.
/// Returns the text and the name of the encoding that produced it.
pub fn decode_text(bytes: &[u8]) -> (String, &'static str) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (strip_bom(text).to_string(), "utf-8");
    }

    let (text, _, had_errors) = BIG5.decode(bytes);
    if !had_errors {
        return (text.into_owned(), "big5");
    }

    (String::from_utf8_lossy(bytes).into_owned(), "utf-8-lossy")
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
