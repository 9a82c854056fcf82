//! Source integrity verification.
//!
//! The importer only accepts the official Tanzil distribution. Its ordering
//! and attribute layout are what the table builders rely on, so the raw bytes
//! are fingerprinted before anything is parsed.

use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::hash::sha256_hex;

/// SHA-256 of the trusted Tanzil Quran XML.
pub const TANZIL_QURAN_SHA256: &str =
    "e7ab47ae9267ce6a3979bf60031b7c40c9701cb2c1d899bbc6e56c67058b17e2";

/// Returns true when `source` is byte-identical to the trusted distribution.
pub fn verify(source: &[u8]) -> bool {
    verify_against(source, TANZIL_QURAN_SHA256)
}

/// Returns true when the digest of `source` equals `expected` exactly.
pub fn verify_against(source: &[u8], expected: &str) -> bool {
    sha256_hex(source) == expected
}

/// Check `source` against `expected` and return its digest on success.
///
/// The comparison is exact: `expected` must already be lowercase hex.
pub fn check_fingerprint(source: &[u8], expected: &str) -> Result<String> {
    let actual = sha256_hex(source);
    debug!(sha256 = %actual, bytes = source.len(), "computed source fingerprint");

    if actual != expected {
        return Err(IngestError::SourceIntegrity {
            expected: expected.to_string(),
            actual,
        });
    }

    info!("source fingerprint verified");
    Ok(actual)
}
