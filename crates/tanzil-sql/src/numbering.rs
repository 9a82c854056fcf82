//! Running counters that link rows across tables.
//!
//! Neither counter reads an identifier from the source. They are derived
//! from the flattened ayah sequence alone:
//!
//! - `surah_id` starts at 0 and is bumped *before* an ayah whose declared
//!   index is the literal `"1"`, so the first surah is 1.
//! - `ayah_id` starts at 1 and is bumped *after* every ayah, across surah
//!   boundaries.

use tanzil_model::AyahIndex;

/// `surah_id` for each ayah, detected by index rollover.
///
/// An ayah stream that does not open with index `"1"` yields 0 for the
/// leading ayahs; callers treat that as a divergence from document order.
pub fn surah_ids_by_rollover<'a, I>(indices: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a AyahIndex>,
{
    let mut surah_id = 0u32;
    indices
        .into_iter()
        .map(|index| {
            if index.is_first() {
                surah_id += 1;
            }
            surah_id
        })
        .collect()
}

/// `ayah_id` for each ayah: 1, 2, 3, ... regardless of surah boundaries.
pub fn running_ayah_ids<I>(ayahs: I) -> Vec<u32>
where
    I: IntoIterator,
{
    ayahs.into_iter().zip(1u32..).map(|(_, id)| id).collect()
}
