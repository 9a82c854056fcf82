#![deny(unsafe_code)]

pub mod corpus;
pub mod error;
pub mod records;
pub mod sajdeh;
pub mod walker;

pub use corpus::{AyahIndex, AyahNode, BISMILLAH, Corpus, SAJDEH_GLYPH, SurahNode};
pub use error::ModelError;
pub use records::{AyahRecord, BismillahStatus, SurahRecord, WordRecord};
pub use sajdeh::{STANDARD_SAJDEHS, Sajdeh, SajdehTable};
pub use walker::{Position, StructuralWalker, WalkedAyah, WalkedSurah};
