//! Bitboard position representation and precomputed move tables.
//!
//! This crate provides:
//! - [`Bitboard`] - a 64-bit square set with shift and mask operations
//! - [`PieceSet`] - fourteen piece planes indexed by [`Plane`]
//! - [`Position`] - piece placement, side to move, castling rights, en passant
//! - [`GeometryMasks`] and [`AttackTables`] - file/rank masks and the pawn,
//!   knight, and king target tables derived from them
//! - [`Ruleset`] and [`Board`] - tables shared by reference between boards
//!
//! # Architecture
//!
//! Each piece kind and color has a 64-bit integer where bit `i` is square
//! `i` (`8 * rank + file`, a1 = 0). Target tables are built once, by shifting
//! a single-bit source and masking off every edge the shift would cross, and
//! are never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use bitpos::Board;
//! use bitpos_core::{Color, Square};
//!
//! let board = Board::from_fen("8/8/8/3P4/8/8/8/8 w - - 0 1").unwrap();
//! let d5 = Square::from_algebraic("d5").unwrap();
//! assert_eq!(board.position().piece_at(d5).map(|(_, c)| c), Some(Color::White));
//! assert_eq!(board.knight_targets(d5).count(), 8);
//! println!("{}", board);
//! ```

mod attacks;
mod bitboard;
mod board;
mod error;
mod geometry;
mod planes;
mod position;
mod render;
mod ruleset;

pub use attacks::AttackTables;
pub use bitboard::{Bitboard, BitboardIter};
pub use board::Board;
pub use error::StateError;
pub use geometry::GeometryMasks;
pub use planes::{PieceSet, Plane};
pub use position::{CastlingRights, Position};
pub use ruleset::Ruleset;
