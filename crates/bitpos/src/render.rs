//! Text rendering of a position.
//!
//! Read-only: rendering never touches the state it prints.

use std::fmt;

use bitpos_core::{Color, Square};

use crate::{Board, Position};

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let sq = Square::from_index(8 * rank + file).ok_or(fmt::Error)?;
                let c = match self.piece_at(sq) {
                    Some((piece, color)) => piece.letter(color),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        let mover = match self.side_to_move {
            Color::White => "White's move",
            Color::Black => "Black's move",
        };
        writeln!(f, "{}", mover)?;
        writeln!(f, "Castling: {}", self.castling)?;
        match self.en_passant {
            Some(sq) => writeln!(f, "En passant: {}", sq),
            None => writeln!(f, "En passant: -"),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.position(), f)
    }
}
