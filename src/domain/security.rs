//! Security domain logic - IPN webhook signature verification

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Verifier for instant payment notification signatures.
///
/// The upstream service signs each webhook delivery with the HMAC-SHA512
/// hex digest of the raw request body under the shared secret, carried in
/// a signature header.
pub struct IpnVerifier {
    secret_key: String,
}

impl IpnVerifier {
    /// Create a new verifier bound to the shared secret
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Check whether an IPN callback carries a valid signature.
    ///
    /// The comparison is constant-time. A malformed (non-hex) header is
    /// reported as invalid rather than as an error.
    pub fn verify(&self, raw_body: &[u8], signature_header: &str) -> bool {
        let expected = match hex::decode(signature_header.trim()) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        let mut mac = match HmacSha512::new_from_slice(self.secret_key.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(raw_body);
        mac.verify_slice(&expected).is_ok()
    }

    /// Hex signature for a raw body, as the upstream service computes it
    pub fn signature(&self, raw_body: &[u8]) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(raw_body);
        hex::encode(mac.finalize().into_bytes())
    }
}
