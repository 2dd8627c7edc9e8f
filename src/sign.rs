//! Request signing.

use hmac::{Hmac, Mac as _};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the request signature: HMAC-SHA256 keyed by `secret` over the
/// decimal form of `nonce`, then `url`, then `payload`, concatenated with no
/// separators, encoded as lowercase hex.
///
/// `url` is the full request URL and `payload` the exact bytes that will be
/// sent as the request body. Deterministic: identical inputs always produce
/// the identical signature.
#[must_use]
pub fn sign(secret: &str, nonce: u64, url: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(nonce.to_string().as_bytes());
    mac.update(url.as_bytes());
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::sign;

    #[test]
    fn pinned_fixture() {
        let signature = sign("testapisecret", 1, "http://x/y", b"{}");
        assert_eq!(
            signature,
            "4cebd1e20834d841d39c0a7be11814a54d6196200e29a1a86575721c50346686",
            "regression fixture drifted"
        );
    }

    #[test]
    fn deterministic() {
        let a = sign("secret", 1_700_000_000_000_000_000, "http://h/p", b"{\"name\":\"a\"}");
        let b = sign("secret", 1_700_000_000_000_000_000, "http://h/p", b"{\"name\":\"a\"}");
        assert_eq!(a, b, "same inputs must produce the same signature");
        assert_eq!(a.len(), 64, "SHA-256 digest is 32 bytes, 64 hex chars");
        assert!(
            a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "signature must be lowercase hex"
        );
    }

    #[test]
    fn inputs_change_signature() {
        let base = sign("secret", 1, "http://h/p", b"{}");
        assert_ne!(base, sign("other", 1, "http://h/p", b"{}"), "secret must matter");
        assert_ne!(base, sign("secret", 2, "http://h/p", b"{}"), "nonce must matter");
        assert_ne!(base, sign("secret", 1, "http://h/q", b"{}"), "url must matter");
        assert_ne!(base, sign("secret", 1, "http://h/p", b"[]"), "payload must matter");
    }

    #[test]
    fn concatenation_has_no_separators() {
        // nonce=12, url="3http://h" and nonce=1, url="23http://h" sign the
        // same message; the format is a plain concatenation by contract.
        assert_eq!(
            sign("secret", 12, "3http://h", b"{}"),
            sign("secret", 1, "23http://h", b"{}"),
        );
    }
}
