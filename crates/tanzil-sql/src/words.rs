//! `quran_words` builder.

use tanzil_model::{AyahNode, StructuralWalker, WordRecord};
use tracing::debug;

use crate::error::Result;
use crate::numbering::running_ayah_ids;
use crate::sql::{INSERTABLE_WORDS, insert_statement, quote_literal};

/// Words of one ayah: the text with every sajdeh glyph removed, split on
/// single spaces. Empty pieces (left behind by doubled spaces or a removed
/// glyph) are not words.
pub fn ayah_words(ayah: &AyahNode) -> Vec<String> {
    ayah.text_without_sajdeh_glyph()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// One record per word, linked to the running ayah id.
pub fn build_word_records(walker: &StructuralWalker<'_>) -> Vec<WordRecord> {
    let ayahs: Vec<&AyahNode> = walker.ayahs().map(|ayah| ayah.node).collect();
    let ayah_ids = running_ayah_ids(&ayahs);

    let records: Vec<WordRecord> = ayahs
        .iter()
        .zip(ayah_ids)
        .flat_map(|(ayah, ayah_id)| {
            ayah_words(ayah)
                .into_iter()
                .map(move |word| WordRecord { ayah_id, word })
        })
        .collect();

    debug!(words = records.len(), "built word records");
    records
}

pub fn render_word_row(record: &WordRecord) -> String {
    format!("({}, {})", record.ayah_id, quote_literal(&record.word))
}

/// Multi-row insert for `quran_words`.
pub fn words_statement(records: &[WordRecord]) -> Result<String> {
    let rows: Vec<String> = records.iter().map(render_word_row).collect();
    insert_statement(INSERTABLE_WORDS, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanzil_model::{Corpus, SurahNode};

    #[test]
    fn splits_on_spaces_in_order() {
        let ayah = AyahNode::new(1, "قُلْ هُوَ اللَّهُ أَحَدٌ");
        assert_eq!(ayah_words(&ayah), vec!["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"]);
    }

    #[test]
    fn glyph_is_removed_before_splitting() {
        let ayah = AyahNode::new(15, "إِنَّمَا يُؤْمِنُ ۩ بِآيَاتِنَا ۩");
        assert_eq!(ayah_words(&ayah), vec!["إِنَّمَا", "يُؤْمِنُ", "بِآيَاتِنَا"]);
    }

    #[test]
    fn glyph_attached_to_word_is_stripped() {
        let ayah = AyahNode::new(1, "a b۩");
        assert_eq!(ayah_words(&ayah), vec!["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(ayah_words(&AyahNode::new(1, "")).is_empty());
        assert!(ayah_words(&AyahNode::new(1, "۩")).is_empty());
    }

    #[test]
    fn ayah_ids_run_across_surahs() {
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![AyahNode::new(1, "a b"), AyahNode::new(2, "c")]),
            SurahNode::new("S2", vec![AyahNode::new(1, "d e f")]),
        ]);
        let records = build_word_records(&StructuralWalker::new(&corpus));
        let pairs: Vec<(u32, &str)> = records
            .iter()
            .map(|record| (record.ayah_id, record.word.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(1, "a"), (1, "b"), (2, "c"), (3, "d"), (3, "e"), (3, "f")]
        );
    }

    #[test]
    fn ayah_without_words_still_consumes_an_id() {
        let corpus = Corpus::new(vec![SurahNode::new(
            "S1",
            vec![
                AyahNode::new(1, "a"),
                AyahNode::new(2, "۩"),
                AyahNode::new(3, "b"),
            ],
        )]);
        let ids: Vec<u32> = build_word_records(&StructuralWalker::new(&corpus))
            .iter()
            .map(|record| record.ayah_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn renders_rows() {
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![AyahNode::new(1, "a b")]),
            SurahNode::new("S2", vec![AyahNode::new(1, "it's")]),
        ]);
        let records = build_word_records(&StructuralWalker::new(&corpus));
        insta::assert_snapshot!(words_statement(&records).unwrap(), @r"
        INSERT INTO quran_words(ayah_id, word) VALUES (1, 'a'),
        (1, 'b'),
        (2, 'it''s');
        ");
    }
}
