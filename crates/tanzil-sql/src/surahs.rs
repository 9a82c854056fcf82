//! `quran_surahs` builder.

use tanzil_model::{BISMILLAH, BismillahStatus, StructuralWalker, SurahRecord};
use tracing::trace;

use crate::error::{BuildError, Result};
use crate::sql::{INSERTABLE_SURAHS, insert_statement, nullable_literal, quote_literal};

/// One record per surah, numbered by document position.
///
/// The opening formula is decided from the surah's first ayah only: an ayah
/// whose whole text is the formula gives `in_ayah`; otherwise the inline
/// `bismillah` marker, when present, gives `true` with the marker text.
pub fn build_surah_records(walker: &StructuralWalker<'_>) -> Result<Vec<SurahRecord>> {
    walker
        .surahs()
        .map(|surah| {
            let first_ayah = surah
                .node
                .first_ayah()
                .ok_or_else(|| BuildError::EmptySurah {
                    number: surah.number,
                    name: surah.node.name.clone(),
                })?;

            let (bismillah_status, bismillah_text) = if first_ayah.text == BISMILLAH {
                (BismillahStatus::InAyah, None)
            } else {
                match &first_ayah.bismillah {
                    Some(marker) => (BismillahStatus::Present, Some(marker.clone())),
                    None => (BismillahStatus::Absent, None),
                }
            };
            trace!(surah = surah.number, status = %bismillah_status, "surah record");

            Ok(SurahRecord {
                name: surah.node.name.clone(),
                period: None,
                number: surah.number,
                bismillah_status,
                bismillah_text,
            })
        })
        .collect()
}

pub fn render_surah_row(record: &SurahRecord) -> String {
    format!(
        "({}, {}, {}, {}, {})",
        quote_literal(&record.name),
        nullable_literal(record.period.as_deref()),
        record.number,
        quote_literal(record.bismillah_status.as_str()),
        nullable_literal(record.bismillah_text.as_deref()),
    )
}

/// Multi-row insert for `quran_surahs`.
pub fn surahs_statement(records: &[SurahRecord]) -> Result<String> {
    let rows: Vec<String> = records.iter().map(render_surah_row).collect();
    insert_statement(INSERTABLE_SURAHS, &rows)
}
