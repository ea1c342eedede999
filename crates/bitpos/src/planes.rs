//! The fourteen piece planes.

use bitpos_core::{Color, Piece, Square};

use crate::{Bitboard, StateError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index into a [`PieceSet`].
///
/// Six piece planes per color followed by that color's aggregate plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Plane {
    WhitePawn = 0,
    WhiteKnight = 1,
    WhiteBishop = 2,
    WhiteRook = 3,
    WhiteQueen = 4,
    WhiteKing = 5,
    AllWhite = 6,
    BlackPawn = 7,
    BlackKnight = 8,
    BlackBishop = 9,
    BlackRook = 10,
    BlackQueen = 11,
    BlackKing = 12,
    AllBlack = 13,
}

impl Plane {
    pub const COUNT: usize = 14;

    /// Every plane in index order.
    pub const ALL: [Plane; Plane::COUNT] = [
        Plane::WhitePawn,
        Plane::WhiteKnight,
        Plane::WhiteBishop,
        Plane::WhiteRook,
        Plane::WhiteQueen,
        Plane::WhiteKing,
        Plane::AllWhite,
        Plane::BlackPawn,
        Plane::BlackKnight,
        Plane::BlackBishop,
        Plane::BlackRook,
        Plane::BlackQueen,
        Plane::BlackKing,
        Plane::AllBlack,
    ];

    /// The twelve piece planes, excluding both aggregates.
    pub const PIECES: [Plane; 12] = [
        Plane::WhitePawn,
        Plane::WhiteKnight,
        Plane::WhiteBishop,
        Plane::WhiteRook,
        Plane::WhiteQueen,
        Plane::WhiteKing,
        Plane::BlackPawn,
        Plane::BlackKnight,
        Plane::BlackBishop,
        Plane::BlackRook,
        Plane::BlackQueen,
        Plane::BlackKing,
    ];

    /// Returns the plane holding `piece` of `color`.
    #[inline]
    pub const fn of(piece: Piece, color: Color) -> Self {
        Self::PIECES[color.index() * 6 + piece.index()]
    }

    /// Returns the aggregate plane of `color`.
    #[inline]
    pub const fn aggregate(color: Color) -> Self {
        match color {
            Color::White => Plane::AllWhite,
            Color::Black => Plane::AllBlack,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the piece and color of a piece plane, `None` for an aggregate.
    pub const fn piece(self) -> Option<(Piece, Color)> {
        let i = self as usize;
        match i {
            6 | 13 => None,
            _ if i < 6 => Some((Piece::ALL[i], Color::White)),
            _ => Some((Piece::ALL[i - 7], Color::Black)),
        }
    }
}

/// Bitboards for every piece kind and color plus the two color aggregates.
///
/// Kept consistent by construction: the only mutator, [`PieceSet::toggle`],
/// flips the piece plane and its aggregate together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Bitboard; 14]"))]
pub struct PieceSet([Bitboard; Plane::COUNT]);

impl PieceSet {
    /// A set with every plane empty.
    pub const fn empty() -> Self {
        PieceSet([Bitboard::EMPTY; Plane::COUNT])
    }

    #[inline]
    pub fn get(&self, plane: Plane) -> Bitboard {
        self.0[plane.index()]
    }

    /// Returns the bitboard of `piece` for `color`.
    #[inline]
    pub fn pieces(&self, piece: Piece, color: Color) -> Bitboard {
        self.get(Plane::of(piece, color))
    }

    /// Returns every square occupied by `color`.
    #[inline]
    pub fn color(&self, color: Color) -> Bitboard {
        self.get(Plane::aggregate(color))
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    /// Flips `sq` on the plane of `piece`/`color` and on the color aggregate.
    ///
    /// Flipping the same square twice for the same piece clears it again.
    #[inline]
    pub fn toggle(&mut self, piece: Piece, color: Color, sq: Square) {
        self.0[Plane::of(piece, color).index()].toggle(sq);
        self.0[Plane::aggregate(color).index()].toggle(sq);
    }

    /// Returns the piece and color at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Plane::PIECES
            .iter()
            .find(|plane| self.get(**plane).contains(sq))
            .and_then(|plane| plane.piece())
    }

    /// Checks that each aggregate is the union of its six piece planes and
    /// that no square appears on two piece planes.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for color in Color::ALL {
            let mut union = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let bb = self.pieces(piece, color);
                if !(seen & bb).is_empty() {
                    return false;
                }
                seen |= bb;
                union |= bb;
            }
            if union != self.color(color) {
                return false;
            }
        }
        true
    }
}

/// Accepts raw planes only if they satisfy [`PieceSet::is_consistent`].
impl TryFrom<[Bitboard; Plane::COUNT]> for PieceSet {
    type Error = StateError;

    fn try_from(planes: [Bitboard; Plane::COUNT]) -> Result<Self, Self::Error> {
        let set = PieceSet(planes);
        if set.is_consistent() {
            Ok(set)
        } else {
            Err(StateError::InconsistentPlanes)
        }
    }
}
