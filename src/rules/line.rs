//! Line reducer: collapse one row or column toward index 0.

use smallvec::SmallVec;

/// Inline capacity covering boards up to 8x8 without allocating.
pub const LINE_INLINE: usize = 8;

/// Cells of one reduced line.
pub type LineCells = SmallVec<[Option<u32>; LINE_INLINE]>;

/// Output of [`reduce_line`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReduction {
    /// Reduced line, same length as the input.
    pub cells: LineCells,
    /// Sum of the values produced by merges.
    pub score: u64,
    /// Output indices holding a merged tile, ascending.
    pub merges: SmallVec<[usize; LINE_INLINE / 2]>,
}

/// Slide and merge one line toward index 0.
///
/// Empty slots are removed first, then equal neighbours merge left to right
/// in a single pass. A merged tile never merges again in the same pass, so
/// `[2, 2, 2, 2]` becomes `[4, 4, _, _]`, not `[8, _, _, _]`. The result is
/// padded back to the input length with empty slots.
#[must_use]
pub fn reduce_line(line: &[Option<u32>]) -> LineReduction {
    let compact: LineCells = line.iter().copied().filter(Option::is_some).collect();

    let mut cells = LineCells::with_capacity(line.len());
    let mut merges = SmallVec::new();
    let mut score = 0u64;

    let mut i = 0;
    while i < compact.len() {
        let value = compact[i];
        // A pair whose sum leaves `u32` stays unmerged.
        let merged = match (value, compact.get(i + 1)) {
            (Some(v), Some(&Some(next))) if v == next => v.checked_mul(2),
            _ => None,
        };
        if let Some(merged) = merged {
            merges.push(cells.len());
            score += u64::from(merged);
            cells.push(Some(merged));
            i += 2;
        } else {
            cells.push(value);
            i += 1;
        }
    }

    cells.resize(line.len(), None);

    LineReduction { cells, score, merges }
}
