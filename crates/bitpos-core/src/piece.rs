//! Piece kinds and the letters that spell them in a placement field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// Lowercase letter of each kind, indexed by [`Piece::index`].
const LETTERS: [u8; 6] = *b"pnbrqk";

const NAMES: [&str; 6] = ["Pawn", "Knight", "Bishop", "Rook", "Queen", "King"];

/// A piece kind. The discriminant is the kind's offset inside a color's
/// block of planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Placement letter for this kind, uppercase for White.
    pub const fn letter(self, color: Color) -> char {
        let lower = LETTERS[self.index()];
        match color {
            Color::White => lower.to_ascii_uppercase() as char,
            Color::Black => lower as char,
        }
    }

    /// Reads a placement letter; its case picks the color.
    pub const fn from_letter(c: char) -> Option<(Piece, Color)> {
        if !c.is_ascii() {
            return None;
        }
        let lower = (c as u8).to_ascii_lowercase();
        let mut i = 0;
        while i < LETTERS.len() {
            if LETTERS[i] == lower {
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                return Some((Piece::ALL[i], color));
            }
            i += 1;
        }
        None
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(NAMES[self.index()])
    }
}
