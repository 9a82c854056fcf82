//! Relational rendering of the Quran corpus.
//!
//! Three builders run over the same [`tanzil_model::StructuralWalker`]:
//!
//! - [`surahs`]: one `quran_surahs` row per surah, with the opening formula status
//! - [`ayahs`]: one `quran_ayahs` row per ayah, with its sajdeh annotation
//! - [`words`]: one `quran_words` row per word, linked by running ayah id
//!
//! [`script::build_import_script`] runs all three and assembles the script.

#![deny(unsafe_code)]

pub mod ayahs;
pub mod error;
pub mod numbering;
pub mod script;
pub mod sql;
pub mod surahs;
pub mod words;

pub use crate::error::{BuildError, Result};
pub use crate::numbering::{running_ayah_ids, surah_ids_by_rollover};
pub use crate::script::{ImportScript, ImportSummary, assemble, build_import_script};
