//! Core types for bitboard positions.
//!
//! This crate provides the vocabulary shared by the board representation:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`FenFields`] for splitting a position string into its fields

mod color;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenFields, STARTPOS};
pub use piece::Piece;
pub use square::{File, Rank, Square, SquareIndexError};
