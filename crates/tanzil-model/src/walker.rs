//! Document-order traversal of a [`Corpus`].
//!
//! The walker is the single place that assigns positions. Builders read
//! the surah number and the global ayah sequence from here instead of
//! keeping their own notion of "where am I".

use crate::corpus::{AyahNode, Corpus, SurahNode};

/// Positional coordinates of an ayah inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based position of the enclosing surah.
    pub surah_number: u32,
    /// 1-based position of the ayah across the whole document.
    pub ayah_sequence: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct WalkedSurah<'a> {
    pub number: u32,
    pub node: &'a SurahNode,
}

#[derive(Debug, Clone, Copy)]
pub struct WalkedAyah<'a> {
    pub position: Position,
    pub node: &'a AyahNode,
}

#[derive(Debug, Clone, Copy)]
pub struct StructuralWalker<'a> {
    corpus: &'a Corpus,
}

impl<'a> StructuralWalker<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Surahs in document order, numbered from 1.
    pub fn surahs(&self) -> impl Iterator<Item = WalkedSurah<'a>> + 'a {
        self.corpus
            .surahs
            .iter()
            .zip(1u32..)
            .map(|(node, number)| WalkedSurah { number, node })
    }

    /// Ayahs of every surah flattened in document order.
    pub fn ayahs(&self) -> impl Iterator<Item = WalkedAyah<'a>> + 'a {
        self.surahs()
            .flat_map(|surah| {
                surah
                    .node
                    .ayahs
                    .iter()
                    .map(move |node| (surah.number, node))
            })
            .zip(1u32..)
            .map(|((surah_number, node), ayah_sequence)| WalkedAyah {
                position: Position {
                    surah_number,
                    ayah_sequence,
                },
                node,
            })
    }
}
