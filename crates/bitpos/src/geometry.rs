//! File and rank masks.
//!
//! Edge tests in the table builder are a single AND against one of these
//! masks instead of per-square arithmetic.

use crate::Bitboard;

/// Rank 1: the low byte.
const RANK_1: u64 = 0x0000_0000_0000_00FF;

/// File A: bit 0 of every byte.
const FILE_A: u64 = 0x0101_0101_0101_0101;

/// The 8 file masks and 8 rank masks.
///
/// `rank(i)` is rank 1 shifted up by `8 * i`; `file(i)` is file A shifted
/// by `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryMasks {
    files: [Bitboard; 8],
    ranks: [Bitboard; 8],
}

impl GeometryMasks {
    /// Builds all sixteen masks from the two seeds.
    pub fn new() -> Self {
        let mut ranks = [Bitboard::new(RANK_1); 8];
        let mut files = [Bitboard::new(FILE_A); 8];

        for i in 1..8 {
            ranks[i] = ranks[i - 1] << 8;
            files[i] = files[i - 1] << 1;
        }

        GeometryMasks { files, ranks }
    }

    /// Returns the mask of file `index` (0 = file A).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[inline]
    pub fn file(&self, index: usize) -> Bitboard {
        self.files[index]
    }

    /// Returns the mask of rank `index` (0 = rank 1).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[inline]
    pub fn rank(&self, index: usize) -> Bitboard {
        self.ranks[index]
    }

    #[inline]
    pub fn files(&self) -> &[Bitboard; 8] {
        &self.files
    }

    #[inline]
    pub fn ranks(&self) -> &[Bitboard; 8] {
        &self.ranks
    }
}

impl Default for GeometryMasks {
    fn default() -> Self {
        Self::new()
    }
}
