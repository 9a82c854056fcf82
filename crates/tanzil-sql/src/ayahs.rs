//! `quran_ayahs` builder.

use tanzil_model::{AyahRecord, SajdehTable, StructuralWalker, WalkedAyah};
use tracing::debug;

use crate::error::{BuildError, Result};
use crate::numbering::surah_ids_by_rollover;
use crate::sql::{INSERTABLE_AYAHS, insert_statement};

/// One record per ayah, in document order.
///
/// `surah_id` comes from index rollover and must agree with the walker's
/// positional surah number for every ayah. The sajdeh tag is looked up with
/// the rolled-over `surah_id`, so the first ayah of a surah is already
/// attributed to that surah.
pub fn build_ayah_records(
    walker: &StructuralWalker<'_>,
    sajdeh: &SajdehTable,
) -> Result<Vec<AyahRecord>> {
    let ayahs: Vec<WalkedAyah<'_>> = walker.ayahs().collect();
    let surah_ids = surah_ids_by_rollover(ayahs.iter().map(|ayah| &ayah.node.index));

    let records = ayahs
        .iter()
        .zip(surah_ids)
        .map(|(ayah, surah_id)| {
            if surah_id != ayah.position.surah_number {
                return Err(BuildError::SurahNumberingDiverged {
                    ayah_sequence: ayah.position.ayah_sequence,
                    rollover: surah_id,
                    positional: ayah.position.surah_number,
                });
            }
            let index = &ayah.node.index;
            Ok(AyahRecord {
                surah_id,
                ayah_number: index.clone(),
                sajdeh: sajdeh.lookup(surah_id, index.value()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(ayahs = records.len(), "built ayah records");
    Ok(records)
}

pub fn render_ayah_row(record: &AyahRecord) -> String {
    format!(
        "({}, {}, '{}')",
        record.surah_id, record.ayah_number, record.sajdeh
    )
}

/// Multi-row insert for `quran_ayahs`.
pub fn ayahs_statement(records: &[AyahRecord]) -> Result<String> {
    let rows: Vec<String> = records.iter().map(render_ayah_row).collect();
    insert_statement(INSERTABLE_AYAHS, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanzil_model::{AyahIndex, AyahNode, Corpus, Sajdeh, SurahNode};

    fn ayah(raw_index: &str, text: &str) -> AyahNode {
        AyahNode {
            index: raw_index.parse::<AyahIndex>().unwrap(),
            text: text.to_string(),
            bismillah: None,
        }
    }

    #[test]
    fn surah_ids_follow_rollover() {
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![AyahNode::new(1, "a"), AyahNode::new(2, "b")]),
            SurahNode::new("S2", vec![AyahNode::new(1, "c")]),
        ]);
        let records =
            build_ayah_records(&StructuralWalker::new(&corpus), &SajdehTable::standard()).unwrap();
        let ids: Vec<(u32, u32)> = records
            .iter()
            .map(|record| (record.surah_id, record.ayah_number.value()))
            .collect();
        assert_eq!(ids, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn sajdeh_uses_rolled_over_surah() {
        let table = SajdehTable::from_entries([((2, 1), Sajdeh::Vajib), ((1, 2), Sajdeh::Mustahab)]);
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![AyahNode::new(1, "a"), AyahNode::new(2, "b")]),
            SurahNode::new("S2", vec![AyahNode::new(1, "c")]),
        ]);
        let records = build_ayah_records(&StructuralWalker::new(&corpus), &table).unwrap();
        let tags: Vec<Sajdeh> = records.iter().map(|record| record.sajdeh).collect();
        assert_eq!(tags, vec![Sajdeh::None, Sajdeh::Mustahab, Sajdeh::Vajib]);
    }

    #[test]
    fn declared_index_is_copied_verbatim() {
        let corpus = Corpus::new(vec![SurahNode::new(
            "S1",
            vec![ayah("1", "a"), ayah("007", "b")],
        )]);
        let records =
            build_ayah_records(&StructuralWalker::new(&corpus), &SajdehTable::standard()).unwrap();
        assert_eq!(render_ayah_row(&records[1]), "(1, 007, 'none')");
    }

    #[test]
    fn stream_not_starting_at_one_diverges() {
        let corpus = Corpus::new(vec![SurahNode::new("S1", vec![ayah("2", "a")])]);
        let err = build_ayah_records(&StructuralWalker::new(&corpus), &SajdehTable::standard())
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::SurahNumberingDiverged {
                ayah_sequence: 1,
                rollover: 0,
                positional: 1,
            }
        );
    }

    #[test]
    fn restart_inside_a_surah_diverges() {
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![ayah("1", "a"), ayah("1", "b")]),
            SurahNode::new("S2", vec![ayah("1", "c")]),
        ]);
        let err = build_ayah_records(&StructuralWalker::new(&corpus), &SajdehTable::standard())
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::SurahNumberingDiverged {
                ayah_sequence: 2,
                rollover: 2,
                positional: 1,
            }
        );
    }

    #[test]
    fn surah_without_rollover_diverges() {
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![ayah("1", "a")]),
            SurahNode::new("S2", vec![ayah("2", "b")]),
        ]);
        let err = build_ayah_records(&StructuralWalker::new(&corpus), &SajdehTable::standard())
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::SurahNumberingDiverged {
                ayah_sequence: 2,
                ..
            }
        ));
    }

    #[test]
    fn renders_rows() {
        let table = SajdehTable::from_entries([((2, 1), Sajdeh::Vajib)]);
        let corpus = Corpus::new(vec![
            SurahNode::new("S1", vec![AyahNode::new(1, "a"), AyahNode::new(2, "b")]),
            SurahNode::new("S2", vec![AyahNode::new(1, "c")]),
        ]);
        let records = build_ayah_records(&StructuralWalker::new(&corpus), &table).unwrap();
        insta::assert_snapshot!(ayahs_statement(&records).unwrap(), @r"
        INSERT INTO quran_ayahs(surah_id, ayah_number, sajdeh) VALUES (1, 1, 'none'),
        (1, 2, 'none'),
        (2, 1, 'vajib');
        ");
    }
}
