//! Content-addressed hashing for rendered stubs
//!
//! Provides [`ContentHash`], a strongly-typed SHA-256 digest used to derive
//! cache filenames for rendered compilation units. Identical rendered source
//! always maps to the identical hash, and therefore the identical cache path.

use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte content hash (SHA-256)
///
/// Immutable and cheap to clone (Copy). Displays as lowercase hex,
/// which is the form embedded in cache filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create hash from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HashError> {
        if bytes.len() != 32 {
            return Err(HashError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Compute SHA-256 hash of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Self::new(digest.into())
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ContentHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8; 32]> for ContentHash {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Errors that can occur when working with content hashes
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Invalid hash length
    #[error("invalid hash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required digest length in bytes
        expected: usize,
        /// Length of the slice that was provided
        actual: usize,
    },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_compute_deterministic() {
        let data = b"return fn (...args) => new class(...args) {};";
        let h1 = ContentHash::compute(data);
        let h2 = ContentHash::compute(data);
        assert_eq!(h1, h2);
    }

    #[test]
    fn content_hash_compute_different_data() {
        let h1 = ContentHash::compute(b"stub a");
        let h2 = ContentHash::compute(b"stub b");
        assert_ne!(h1, h2);
    }

    #[test]
    fn content_hash_display_and_parse() {
        let hash = ContentHash::compute(b"test");
        let s = hash.to_string();
        assert_eq!(s.len(), 64);
        let parsed: ContentHash = s.parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn content_hash_from_slice_invalid_length() {
        let bytes = vec![1u8; 31];
        let result = ContentHash::from_slice(&bytes);
        assert!(matches!(
            result,
            Err(HashError::InvalidLength { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn content_hash_short() {
        let hash = ContentHash::compute(b"test");
        let short = hash.short();
        assert_eq!(short.len(), 16);
        assert!(hash.to_string().starts_with(&short));
    }

    #[test]
    fn content_hash_parse_rejects_non_hex() {
        let result: Result<ContentHash, _> = "zz".repeat(32).parse();
        assert!(matches!(result, Err(HashError::HexDecode(_))));
    }
}
