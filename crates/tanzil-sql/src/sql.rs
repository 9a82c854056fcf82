//! SQL text helpers shared by the table builders.

use crate::error::{BuildError, Result};

pub const QURAN_SURAHS_TABLE: &str = "quran_surahs";
pub const QURAN_AYAHS_TABLE: &str = "quran_ayahs";
pub const QURAN_WORDS_TABLE: &str = "quran_words";

/// Insert target for `quran_surahs`, with its column order.
pub const INSERTABLE_SURAHS: &str =
    "quran_surahs(name, period, number, bismillah_status, bismillah_text)";
/// Insert target for `quran_ayahs`, with its column order.
pub const INSERTABLE_AYAHS: &str = "quran_ayahs(surah_id, ayah_number, sajdeh)";
/// Insert target for `quran_words`, with its column order.
pub const INSERTABLE_WORDS: &str = "quran_words(ayah_id, word)";

/// Single-quoted SQL string literal. Embedded quotes are doubled.
pub fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            quoted.push('\'');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

/// Quoted literal, or `NULL` when absent.
pub fn nullable_literal(value: Option<&str>) -> String {
    value.map_or_else(|| "NULL".to_string(), quote_literal)
}

/// Render one multi-row `INSERT` statement.
///
/// `table` is the insert target including its column list. Rows are already
/// rendered tuples and are joined with `",\n"`.
pub fn insert_statement(table: &'static str, rows: &[String]) -> Result<String> {
    if rows.is_empty() {
        return Err(BuildError::EmptyTable { table });
    }
    Ok(format!("INSERT INTO {table} VALUES {};", rows.join(",\n")))
}
