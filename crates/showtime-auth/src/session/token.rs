//! Opaque session token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Fewest random bytes a token may carry (256 bits).
pub const MIN_TOKEN_BYTES: usize = 32;

/// Generate a URL-safe token from `bytes` random bytes, never fewer than
/// [`MIN_TOKEN_BYTES`].
pub fn generate(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes.max(MIN_TOKEN_BYTES)];
    rand::rng().fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_long_and_distinct() {
        let a = generate(32);
        let b = generate(32);
        assert_ne!(a, b);
        // 32 bytes encode to 43 unpadded base64 characters.
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn short_requests_are_raised_to_minimum() {
        assert_eq!(generate(4).len(), generate(MIN_TOKEN_BYTES).len());
        assert_eq!(generate(48).len(), 64);
    }
}
