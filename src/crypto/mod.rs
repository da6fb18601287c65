//! URL signing
//!
//! Signs unsigned URL paths the way the image service expects:
//!
//! ```text
//! signature = base64url(HMAC-SHA1(key, options_path + "/" + image_url))
//! ```
//!
//! The MAC and encoding are delegated to the `hmac`, `sha1`, and `base64`
//! crates; this module only owns the message layout. A missing key
//! produces `unsafe/` URLs for deployments that run the service with
//! signature checks disabled.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::UrlError;

type HmacSha1 = Hmac<Sha1>;

/// Path prefix the service accepts in place of a signature
pub const UNSAFE_PREFIX: &str = "unsafe";

/// Signs URL paths with the configured security key
#[derive(Debug, Clone)]
pub struct Signer {
    key: Option<Vec<u8>>,
}

impl Signer {
    pub fn new(key: Option<&str>) -> Self {
        Self {
            key: key.map(|k| k.as_bytes().to_vec()),
        }
    }

    /// Generate the signature for an unsigned URL path
    ///
    /// Returns `None` when no key is configured.
    pub fn sign(&self, path: &str) -> Option<String> {
        let key = self.key.as_ref()?;

        let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
        mac.update(path.as_bytes());

        Some(URL_SAFE.encode(mac.finalize().into_bytes()))
    }

    /// Prefix an unsigned path with its signature, or `unsafe/` when
    /// no key is configured
    pub fn signed_path(&self, path: &str) -> String {
        match self.sign(path) {
            Some(signature) => format!("{}/{}", signature, path),
            None => format!("{}/{}", UNSAFE_PREFIX, path),
        }
    }

    /// Validate a signature segment against an unsigned URL path
    ///
    /// Without a configured key only the literal `unsafe` segment is
    /// accepted.
    pub fn validate(&self, signature: &str, path: &str) -> Result<(), UrlError> {
        match self.sign(path) {
            Some(expected) if constant_time_compare(signature, &expected) => Ok(()),
            Some(_) => Err(UrlError::InvalidSignature),
            None if signature == UNSAFE_PREFIX => Ok(()),
            None => Err(UrlError::InvalidSignature),
        }
    }
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
