use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The index-rollover counter disagrees with the surah's document position.
    #[error(
        "surah numbering diverged at ayah {ayah_sequence}: index rollover gives surah {rollover}, \
         document order gives surah {positional}"
    )]
    SurahNumberingDiverged {
        ayah_sequence: u32,
        rollover: u32,
        positional: u32,
    },

    #[error("surah {number} ('{name}') has no ayahs")]
    EmptySurah { number: u32, name: String },

    #[error("no rows to insert into {table}")]
    EmptyTable { table: &'static str },
}

pub type Result<T> = std::result::Result<T, BuildError>;
