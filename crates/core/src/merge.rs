//! Line merge - compaction and single-pass merging of one row or column
//!
//! Lines arrive in traversal order, so tiles always slide toward index 0.
//! The merge pass scans front to back and a tile produced by a merge never
//! merges again in the same pass: `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`, not
//! `[8, 0, 0, 0]` and not `[4, 4, 0, 0]`.
//!
//! Tiles never grow past [`MAX_TILE`]: a pair whose merge would exceed it
//! stays as two tiles.

use arrayvec::ArrayVec;

use crate::board::Line;
use crate::types::{BOARD_SIZE, MAX_TILE};

/// Result of merging a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    /// Compacted, merged and zero-padded line
    pub line: Line,
    /// Sum of the values of tiles created by merges
    pub gained: u64,
    /// Number of merges performed
    pub merges: u32,
}

/// Slide and merge one line toward index 0
///
/// # Examples
///
/// ```
/// use tui_2048_core::merge::merge_line;
///
/// let m = merge_line([2, 2, 2, 2]);
/// assert_eq!(m.line, [4, 4, 0, 0]);
/// assert_eq!(m.gained, 8);
///
/// let m = merge_line([2, 0, 2, 2]);
/// assert_eq!(m.line, [4, 2, 0, 0]);
/// assert_eq!(m.gained, 4);
/// ```
pub fn merge_line(line: Line) -> LineMerge {
    // Zeros dropped, relative order kept.
    let mut tiles: ArrayVec<u32, BOARD_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut merged: ArrayVec<bool, BOARD_SIZE> = tiles.iter().map(|_| false).collect();
    let mut gained = 0;
    let mut merges = 0;

    let mut i = 0;
    while i + 1 < tiles.len() {
        let mergeable = tiles[i] == tiles[i + 1] && !merged[i] && !merged[i + 1];
        if mergeable && tiles[i] <= MAX_TILE / 2 {
            tiles[i] *= 2;
            gained += u64::from(tiles[i]);
            merges += 1;
            tiles.remove(i + 1);
            merged.remove(i + 1);
            merged[i] = true;
        }
        i += 1;
    }

    let mut out = [0; BOARD_SIZE];
    out[..tiles.len()].copy_from_slice(&tiles);

    LineMerge {
        line: out,
        gained,
        merges,
    }
}
