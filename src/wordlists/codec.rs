//! Printable text codec for shareable codes
//!
//! RFC 4648 base-32 with padding. Decoding is forgiving about case and
//! surrounding whitespace so codes survive being retyped.

use data_encoding::BASE32;

/// Encode text as a base-32 code
#[must_use]
pub fn encode(text: &str) -> String {
    BASE32.encode(text.as_bytes())
}

/// Decode a base-32 code back to text
///
/// Returns `None` for malformed codes or bytes that are not UTF-8.
#[must_use]
pub fn decode(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    let bytes = BASE32.decode(normalized.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_value() {
        assert_eq!(encode("hello"), "NBSWY3DP");
        assert_eq!(encode("cat"), "MNQXI===");
    }

    #[test]
    fn decode_reverses_encode() {
        for text in ["crane", "speed", "cat", "lantern"] {
            assert_eq!(decode(&encode(text)).as_deref(), Some(text));
        }
    }

    #[test]
    fn decode_accepts_lowercase_and_whitespace() {
        assert_eq!(decode("  nbswy3dp\n").as_deref(), Some("hello"));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode("not a code!"), None);
        assert_eq!(decode("NBSWY3D"), None);
        // 0xFF is not UTF-8
        assert_eq!(decode("74======"), None);
    }
}
