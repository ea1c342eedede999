//! A position paired with the tables a move generator reads.

use std::sync::Arc;

use bitpos_core::{Color, FenError, Square};
use tracing::debug;

use crate::{Bitboard, Position, Ruleset};

/// A loaded position plus a handle to its (shared, immutable) ruleset.
#[derive(Debug, Clone)]
pub struct Board {
    position: Position,
    rules: Arc<Ruleset>,
}

impl Board {
    /// The standard starting position on the shared ruleset.
    pub fn new() -> Self {
        Board {
            position: Position::startpos(),
            rules: Ruleset::shared(),
        }
    }

    /// Loads a position string on the shared ruleset.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::with_rules(fen, Ruleset::shared())
    }

    /// Loads a position string on the given ruleset.
    pub fn with_rules(fen: &str, rules: Arc<Ruleset>) -> Result<Self, FenError> {
        let position = Position::from_fen(fen)?;
        Ok(Board { position, rules })
    }

    /// Replaces the whole position. On error the board is left unchanged.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        self.position = Position::from_fen(fen)?;
        debug!(
            side = %self.position.side_to_move,
            pieces = self.position.pieces.occupied().count(),
            "position loaded"
        );
        Ok(())
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn rules(&self) -> &Arc<Ruleset> {
        &self.rules
    }

    /// Pawn targets from `sq` for a pawn of `color`, ignoring occupancy.
    #[inline]
    pub fn pawn_targets(&self, color: Color, sq: Square) -> Bitboard {
        self.rules.attacks().pawn(color, sq)
    }

    #[inline]
    pub fn knight_targets(&self, sq: Square) -> Bitboard {
        self.rules.attacks().knight(sq)
    }

    #[inline]
    pub fn king_targets(&self, sq: Square) -> Bitboard {
        self.rules.attacks().king(sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
