//! Rows of the three target tables.

use std::fmt;

use crate::corpus::AyahIndex;
use crate::sajdeh::Sajdeh;

/// How a surah's opening formula is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BismillahStatus {
    /// The formula is the text of the first ayah itself.
    InAyah,
    /// The formula precedes the first ayah as an inline marker.
    Present,
    /// The surah has no opening formula.
    Absent,
}

impl BismillahStatus {
    /// Value as stored in `quran_surahs.bismillah_status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BismillahStatus::InAyah => "in_ayah",
            BismillahStatus::Present => "true",
            BismillahStatus::Absent => "false",
        }
    }
}

impl fmt::Display for BismillahStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `quran_surahs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahRecord {
    pub name: String,
    /// Revelation period. The source does not carry it, so it is always NULL.
    pub period: Option<String>,
    pub number: u32,
    pub bismillah_status: BismillahStatus,
    pub bismillah_text: Option<String>,
}

/// One row of `quran_ayahs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahRecord {
    pub surah_id: u32,
    pub ayah_number: AyahIndex,
    pub sajdeh: Sajdeh,
}

/// One row of `quran_words`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub ayah_id: u32,
    pub word: String,
}
