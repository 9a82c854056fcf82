//! In-memory shape of the Tanzil source: surahs holding ayahs, in document order.
//!
//! The source carries no identifiers that the importer trusts. Surah numbers
//! and the global ayah sequence are positional and are handed out by
//! [`crate::walker::StructuralWalker`].

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The canonical opening formula as it appears in the Tanzil text.
pub const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَـٰنِ الرَّحِيمِ";

/// The prostration glyph embedded in the text of sajdeh ayahs.
pub const SAJDEH_GLYPH: char = '۩';

/// Declared `index` attribute of an ayah.
///
/// The raw text is kept verbatim for rendering, alongside its numeric value
/// for the sajdeh lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AyahIndex {
    raw: String,
    value: u32,
}

impl AyahIndex {
    /// The attribute text exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// True when the declared text is the literal `"1"`, which marks the start
    /// of a new surah in the flattened ayah stream.
    pub fn is_first(&self) -> bool {
        self.raw == "1"
    }
}

impl FromStr for AyahIndex {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| ModelError::InvalidAyahIndex {
                value: s.to_string(),
            })?;
        Ok(Self {
            raw: s.to_string(),
            value,
        })
    }
}

impl From<u32> for AyahIndex {
    fn from(value: u32) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }
}

impl fmt::Display for AyahIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A single `<aya>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahNode {
    pub index: AyahIndex,
    pub text: String,
    /// Inline opening-formula marker (`bismillah` attribute), when declared.
    pub bismillah: Option<String>,
}

impl AyahNode {
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index: AyahIndex::from(index),
            text: text.into(),
            bismillah: None,
        }
    }

    #[must_use]
    pub fn with_bismillah(mut self, marker: impl Into<String>) -> Self {
        self.bismillah = Some(marker.into());
        self
    }

    /// Ayah text with every prostration glyph removed.
    pub fn text_without_sajdeh_glyph(&self) -> String {
        self.text.replace(SAJDEH_GLYPH, "")
    }
}

/// A single `<sura>` element with its ayahs in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahNode {
    pub name: String,
    pub ayahs: Vec<AyahNode>,
}

impl SurahNode {
    pub fn new(name: impl Into<String>, ayahs: Vec<AyahNode>) -> Self {
        Self {
            name: name.into(),
            ayahs,
        }
    }

    pub fn first_ayah(&self) -> Option<&AyahNode> {
        self.ayahs.first()
    }
}

/// The whole parsed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub surahs: Vec<SurahNode>,
}

impl Corpus {
    pub fn new(surahs: Vec<SurahNode>) -> Self {
        Self { surahs }
    }

    pub fn surah_count(&self) -> usize {
        self.surahs.len()
    }

    pub fn ayah_count(&self) -> usize {
        self.surahs.iter().map(|surah| surah.ayahs.len()).sum()
    }
}
