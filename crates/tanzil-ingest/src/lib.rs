//! Reading and verifying the Tanzil Quran source.
//!
//! Verification always happens on the raw bytes, before the XML is touched.

#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod verify;
pub mod xml;

use std::path::Path;

use tanzil_model::Corpus;
use tracing::info_span;

pub use crate::error::{IngestError, Result};
pub use crate::verify::{TANZIL_QURAN_SHA256, check_fingerprint, verify, verify_against};
pub use crate::xml::{parse_corpus, parse_corpus_str};

/// Read the source file as raw bytes.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| IngestError::io(path, source))
}

/// A parsed corpus together with the fingerprint it was verified against.
#[derive(Debug, Clone)]
pub struct VerifiedSource {
    pub sha256: String,
    pub corpus: Corpus,
}

/// Verify `source` against `expected`, then parse it.
///
/// Nothing is parsed when the fingerprint does not match.
pub fn load_verified(source: &[u8], expected: &str) -> Result<VerifiedSource> {
    let sha256 = info_span!("verify").in_scope(|| check_fingerprint(source, expected))?;
    let corpus = info_span!("parse").in_scope(|| parse_corpus(source))?;
    Ok(VerifiedSource { sha256, corpus })
}

/// Verify `source` against the trusted Tanzil fingerprint, then parse it.
pub fn load_trusted(source: &[u8]) -> Result<VerifiedSource> {
    load_verified(source, TANZIL_QURAN_SHA256)
}
