//! Prostration (sajdeh) annotations.
//!
//! Fourteen ayahs carry a prostration requirement. Four are obligatory
//! (`vajib`), the rest recommended (`mustahab`). Every other ayah is `none`.

use std::collections::BTreeMap;
use std::fmt;

/// Sajdeh annotation stored in `quran_ayahs.sajdeh`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sajdeh {
    #[default]
    None,
    /// Obligatory prostration.
    Vajib,
    /// Recommended prostration.
    Mustahab,
}

impl Sajdeh {
    /// Value as stored in the database enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sajdeh::None => "none",
            Sajdeh::Vajib => "vajib",
            Sajdeh::Mustahab => "mustahab",
        }
    }
}

impl fmt::Display for Sajdeh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(surah number, ayah number)` coordinates of the known sajdeh ayahs.
pub const STANDARD_SAJDEHS: [((u32, u32), Sajdeh); 14] = [
    ((32, 15), Sajdeh::Vajib),
    ((41, 37), Sajdeh::Vajib),
    ((53, 62), Sajdeh::Vajib),
    ((96, 19), Sajdeh::Vajib),
    ((7, 206), Sajdeh::Mustahab),
    ((13, 15), Sajdeh::Mustahab),
    ((16, 50), Sajdeh::Mustahab),
    ((17, 109), Sajdeh::Mustahab),
    ((19, 58), Sajdeh::Mustahab),
    ((22, 18), Sajdeh::Mustahab),
    ((25, 60), Sajdeh::Mustahab),
    ((27, 26), Sajdeh::Mustahab),
    ((38, 24), Sajdeh::Mustahab),
    ((84, 21), Sajdeh::Mustahab),
];

/// Immutable lookup from ayah coordinates to their sajdeh annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SajdehTable {
    entries: BTreeMap<(u32, u32), Sajdeh>,
}

impl SajdehTable {
    /// The fourteen known sajdeh ayahs.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_SAJDEHS)
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((u32, u32), Sajdeh)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Annotation for the given coordinates, `none` when not listed.
    pub fn lookup(&self, surah_number: u32, ayah_number: u32) -> Sajdeh {
        self.entries
            .get(&(surah_number, ayah_number))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Sajdeh)> + '_ {
        self.entries.iter().map(|(coords, tag)| (*coords, *tag))
    }
}

impl Default for SajdehTable {
    fn default() -> Self {
        Self::standard()
    }
}
