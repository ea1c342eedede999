//! Precomputed move-target tables for pawns, knights, and kings.
//!
//! Every entry is built by shifting the single-bit source square. Before a
//! shift, the source is ANDed with the complement of the files and ranks the
//! step would cross, so a step off the board yields an empty pattern instead
//! of wrapping around to the opposite edge. Occupancy is ignored: pushes and
//! captures are not told apart at this layer.

use bitpos_core::{Color, Square};
use tracing::debug;

use crate::{Bitboard, GeometryMasks};

/// Per-square target tables, indexed by square index.
#[derive(Clone, PartialEq, Eq)]
pub struct AttackTables {
    pawn: [[Bitboard; 64]; 2],
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
}

impl AttackTables {
    /// Builds all four tables from the geometry masks.
    pub fn build(masks: &GeometryMasks) -> Self {
        let mut tables = AttackTables {
            pawn: [[Bitboard::EMPTY; 64]; 2],
            knight: [Bitboard::EMPTY; 64],
            king: [Bitboard::EMPTY; 64],
        };

        for sq in Square::all() {
            let s = Bitboard::from_square(sq);
            let idx = sq.index() as usize;
            tables.pawn[Color::White.index()][idx] = white_pawn_targets(s, masks);
            tables.pawn[Color::Black.index()][idx] = black_pawn_targets(s, masks);
            tables.knight[idx] = knight_targets(s, masks);
            tables.king[idx] = king_targets(s, masks);
        }

        debug!(
            knight_targets = tables.knight.iter().map(|b| b.count()).sum::<u32>(),
            king_targets = tables.king.iter().map(|b| b.count()).sum::<u32>(),
            "built leaper tables"
        );

        tables
    }

    /// Pawn targets from `sq` for a pawn of `color`: pushes (single, and
    /// double from the home rank) plus both forward diagonals.
    #[inline]
    pub fn pawn(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index() as usize]
    }

    #[inline]
    pub fn knight(&self, sq: Square) -> Bitboard {
        self.knight[sq.index() as usize]
    }

    #[inline]
    pub fn king(&self, sq: Square) -> Bitboard {
        self.king[sq.index() as usize]
    }
}

impl std::fmt::Debug for AttackTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttackTables").finish_non_exhaustive()
    }
}

/// Keeps `s` only if it lies outside every mask in `edges`.
#[inline]
fn away_from(s: Bitboard, edges: &[Bitboard]) -> Bitboard {
    let blocked = edges.iter().fold(Bitboard::EMPTY, |acc, &m| acc | m);
    s & !blocked
}

fn white_pawn_targets(s: Bitboard, m: &GeometryMasks) -> Bitboard {
    (s << 8)
        | ((s & m.rank(1)) << 16)
        | (away_from(s, &[m.file(7)]) << 9)
        | (away_from(s, &[m.file(0)]) << 7)
}

fn black_pawn_targets(s: Bitboard, m: &GeometryMasks) -> Bitboard {
    (s >> 8)
        | ((s & m.rank(6)) >> 16)
        | (away_from(s, &[m.file(0)]) >> 9)
        | (away_from(s, &[m.file(7)]) >> 7)
}

fn knight_targets(s: Bitboard, m: &GeometryMasks) -> Bitboard {
    let (f0, f1, f6, f7) = (m.file(0), m.file(1), m.file(6), m.file(7));
    let (r0, r1, r6, r7) = (m.rank(0), m.rank(1), m.rank(6), m.rank(7));

    // up one, across two
    (away_from(s, &[f0, f1, r7]) << 6)
        | (away_from(s, &[f6, f7, r7]) << 10)
        // up two, across one
        | (away_from(s, &[f0, r6, r7]) << 15)
        | (away_from(s, &[f7, r6, r7]) << 17)
        // down one, across two
        | (away_from(s, &[f6, f7, r0]) >> 6)
        | (away_from(s, &[f0, f1, r0]) >> 10)
        // down two, across one
        | (away_from(s, &[f7, r0, r1]) >> 15)
        | (away_from(s, &[f0, r0, r1]) >> 17)
}

fn king_targets(s: Bitboard, m: &GeometryMasks) -> Bitboard {
    let (f0, f7, r0, r7) = (m.file(0), m.file(7), m.rank(0), m.rank(7));

    (away_from(s, &[f7]) << 1)
        | (away_from(s, &[f0]) >> 1)
        | (away_from(s, &[r7]) << 8)
        | (away_from(s, &[r0]) >> 8)
        | (away_from(s, &[r7, f7]) << 9)
        | (away_from(s, &[r7, f0]) << 7)
        | (away_from(s, &[r0, f0]) >> 9)
        | (away_from(s, &[r0, f7]) >> 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitpos_core::{File, Rank};

    fn tables() -> AttackTables {
        AttackTables::build(&GeometryMasks::new())
    }

    fn sq(file: File, rank: Rank) -> Square {
        Square::new(file, rank)
    }

    #[test]
    fn knight_attacks_center() {
        assert_eq!(tables().knight(sq(File::D, Rank::R4)).count(), 8);
    }

    #[test]
    fn knight_attacks_corner() {
        let t = tables();
        assert_eq!(t.knight(Square::A1).count(), 2);
        assert_eq!(t.knight(Square::H8).count(), 2);
    }

    #[test]
    fn knight_attacks_edge() {
        assert_eq!(tables().knight(sq(File::A, Rank::R4)).count(), 4);
    }

    #[test]
    fn knight_specific_squares() {
        let attacks = tables().knight(sq(File::E, Rank::R4));
        for target in [
            sq(File::D, Rank::R6),
            sq(File::F, Rank::R6),
            sq(File::G, Rank::R5),
            sq(File::G, Rank::R3),
            sq(File::F, Rank::R2),
            sq(File::D, Rank::R2),
            sq(File::C, Rank::R3),
            sq(File::C, Rank::R5),
        ] {
            assert!(attacks.contains(target), "missing {}", target);
        }
    }

    #[test]
    fn knight_on_g_file_does_not_wrap() {
        // g1 + 10 would land on a3 without the file G/H exclusion
        let attacks = tables().knight(sq(File::G, Rank::R1));
        assert!(!attacks.contains(sq(File::A, Rank::R2)));
        assert!(!attacks.contains(sq(File::A, Rank::R3)));
        assert_eq!(attacks.count(), 3);
    }

    #[test]
    fn king_attacks_center() {
        assert_eq!(tables().king(sq(File::D, Rank::R4)).count(), 8);
        assert_eq!(tables().king(Square::from_index(27).unwrap()).count(), 8);
    }

    #[test]
    fn king_attacks_corner() {
        let t = tables();
        for corner in [Square::A1, Square::H1, Square::A8, Square::H8] {
            assert_eq!(t.king(corner).count(), 3, "corner {}", corner);
        }
    }

    #[test]
    fn every_square_has_an_entry() {
        let t = tables();
        for sq in Square::all() {
            assert!(t.knight(sq).count() >= 2, "knight {}", sq);
            assert!((3..=8).contains(&t.king(sq).count()), "king {}", sq);
        }
        assert_eq!(t.king(Square::H8).count(), 3);
    }

    #[test]
    fn king_attacks_edge() {
        assert_eq!(tables().king(sq(File::A, Rank::R4)).count(), 5);
    }

    #[test]
    fn white_pawn_from_home_rank() {
        let t = tables().pawn(Color::White, sq(File::E, Rank::R2));
        assert_eq!(t.count(), 4);
        assert!(t.contains(sq(File::E, Rank::R3)));
        assert!(t.contains(sq(File::E, Rank::R4)));
        assert!(t.contains(sq(File::D, Rank::R3)));
        assert!(t.contains(sq(File::F, Rank::R3)));
    }

    #[test]
    fn white_pawn_off_home_rank_has_no_double_push() {
        let t = tables().pawn(Color::White, sq(File::E, Rank::R3));
        assert_eq!(t.count(), 3);
        assert!(!t.contains(sq(File::E, Rank::R5)));
    }

    #[test]
    fn black_pawn_from_home_rank() {
        let t = tables().pawn(Color::Black, sq(File::D, Rank::R7));
        assert_eq!(t.count(), 4);
        assert!(t.contains(sq(File::D, Rank::R6)));
        assert!(t.contains(sq(File::D, Rank::R5)));
        assert!(t.contains(sq(File::C, Rank::R6)));
        assert!(t.contains(sq(File::E, Rank::R6)));
    }

    #[test]
    fn pawn_edge_files() {
        let t = tables();
        let a_pawn = t.pawn(Color::White, sq(File::A, Rank::R4));
        assert_eq!(a_pawn.count(), 2);
        assert!(a_pawn.contains(sq(File::B, Rank::R5)));
        assert!(!a_pawn.contains(sq(File::H, Rank::R4)));

        let h_pawn = t.pawn(Color::Black, sq(File::H, Rank::R5));
        assert_eq!(h_pawn.count(), 2);
        assert!(h_pawn.contains(sq(File::G, Rank::R4)));
        assert!(!h_pawn.contains(sq(File::A, Rank::R5)));
    }

    #[test]
    fn pawn_on_last_rank_has_no_targets() {
        let t = tables();
        assert!(t.pawn(Color::White, sq(File::D, Rank::R8)).is_empty());
        assert!(t.pawn(Color::Black, sq(File::D, Rank::R1)).is_empty());
    }
}
