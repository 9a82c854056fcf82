//! Statement assembly.

use tanzil_model::{
    AyahRecord, Corpus, Sajdeh, SajdehTable, StructuralWalker, SurahRecord, WordRecord,
};
use tracing::{debug, info};

use crate::ayahs::{ayahs_statement, build_ayah_records};
use crate::error::Result;
use crate::surahs::{build_surah_records, surahs_statement};
use crate::words::{build_word_records, words_statement};

/// Join the three statements into one script.
///
/// Order follows the foreign keys: ayahs reference surahs, words reference
/// ayahs. Changing it makes the script fail against the target schema.
pub fn assemble(surahs: &str, ayahs: &str, words: &str) -> String {
    format!("{surahs}\n{ayahs}\n{words}")
}

/// Row counts of a built script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub surahs: usize,
    pub ayahs: usize,
    pub words: usize,
    pub vajib: usize,
    pub mustahab: usize,
}

/// The derived records of all three tables and the script rendering them.
#[derive(Debug, Clone)]
pub struct ImportScript {
    pub surahs: Vec<SurahRecord>,
    pub ayahs: Vec<AyahRecord>,
    pub words: Vec<WordRecord>,
    sql: String,
}

impl ImportScript {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn summary(&self) -> ImportSummary {
        let count_tag = |tag: Sajdeh| {
            self.ayahs
                .iter()
                .filter(|record| record.sajdeh == tag)
                .count()
        };
        ImportSummary {
            surahs: self.surahs.len(),
            ayahs: self.ayahs.len(),
            words: self.words.len(),
            vajib: count_tag(Sajdeh::Vajib),
            mustahab: count_tag(Sajdeh::Mustahab),
        }
    }
}

/// Build all three tables from `corpus` and assemble the insert script.
pub fn build_import_script(corpus: &Corpus, sajdeh: &SajdehTable) -> Result<ImportScript> {
    let walker = StructuralWalker::new(corpus);

    let surahs = build_surah_records(&walker)?;
    let ayahs = build_ayah_records(&walker, sajdeh)?;
    let words = build_word_records(&walker);

    let surahs_sql = surahs_statement(&surahs)?;
    let ayahs_sql = ayahs_statement(&ayahs)?;
    let words_sql = words_statement(&words)?;
    debug!(
        surahs_bytes = surahs_sql.len(),
        ayahs_bytes = ayahs_sql.len(),
        words_bytes = words_sql.len(),
        "rendered statements"
    );

    let sql = assemble(&surahs_sql, &ayahs_sql, &words_sql);
    let script = ImportScript {
        surahs,
        ayahs,
        words,
        sql,
    };
    let summary = script.summary();
    info!(
        surahs = summary.surahs,
        ayahs = summary.ayahs,
        words = summary.words,
        "built import script"
    );
    Ok(script)
}
