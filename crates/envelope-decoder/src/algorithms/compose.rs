//! # Offset Composer
//!
//! Turns a sub-decoder's payload-relative index map into absolute offsets
//! over the original envelope buffer.

use crate::domain::IndexMap;

/// Shift every present entry of `relative` by `payload_offset`.
///
/// Absent entries pass through unchanged. Pure; `usize` bounds cannot
/// overflow for realistic buffer sizes.
pub fn compose(payload_offset: usize, relative: IndexMap) -> IndexMap {
    let mut absolute = IndexMap::new();
    for entry in relative.iter() {
        match entry.range {
            Some(range) => absolute.insert(
                entry.name.clone(),
                range.start + payload_offset,
                range.end + payload_offset,
            ),
            None => absolute.insert_absent(entry.name.clone()),
        }
    }
    absolute
}
