//! FEN (Forsyth-Edwards Notation) field splitting and errors.
//!
//! Only the four fields that describe the board are interpreted. The
//! halfmove clock and fullmove number may follow; they are accepted and
//! dropped.

use thiserror::Error;

/// The standard starting position.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors that can occur when loading a position string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("expected at most 6 fields, got {0}")]
    TooManyFields(usize),

    #[error("malformed piece placement: {0}")]
    MalformedPlacement(String),

    #[error("unknown side to move: expected 'w' or 'b', got '{0}'")]
    UnknownSideToken(String),

    #[error("unknown castling token '{0}'")]
    UnknownCastlingToken(char),

    #[error("malformed en passant square: {0}")]
    MalformedEnPassant(String),
}

/// The interpreted fields of a position string, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenFields<'a> {
    /// Piece placement (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").
    pub placement: &'a str,
    /// Side to move ("w" or "b").
    pub side: &'a str,
    /// Castling availability (e.g., "KQkq", "-").
    pub castling: &'a str,
    /// En passant target (e.g., "e3", "-").
    pub en_passant: &'a str,
}

impl<'a> FenFields<'a> {
    /// Splits a position string on whitespace.
    ///
    /// Four fields are required. A fifth and sixth are tolerated and ignored.
    pub fn split(fen: &'a str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() > 6 {
            return Err(FenError::TooManyFields(parts.len()));
        }

        let mut parts = parts.into_iter();
        let placement = parts.next().ok_or(FenError::MissingField("placement"))?;
        let side = parts.next().ok_or(FenError::MissingField("side to move"))?;
        let castling = parts.next().ok_or(FenError::MissingField("castling"))?;
        let en_passant = parts.next().ok_or(FenError::MissingField("en passant"))?;

        Ok(FenFields {
            placement,
            side,
            castling,
            en_passant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_startpos() {
        let fields = FenFields::split(STARTPOS).unwrap();
        assert_eq!(
            fields.placement,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(fields.side, "w");
        assert_eq!(fields.castling, "KQkq");
        assert_eq!(fields.en_passant, "-");
    }

    #[test]
    fn counters_are_optional() {
        let fields = FenFields::split("8/8/8/8/8/8/8/8 b - e3").unwrap();
        assert_eq!(fields.side, "b");
        assert_eq!(fields.en_passant, "e3");

        assert!(FenFields::split("8/8/8/8/8/8/8/8 b - e3 7").is_ok());
    }

    #[test]
    fn counters_are_not_interpreted() {
        assert!(FenFields::split("8/8/8/8/8/8/8/8 w - - abc xyz").is_ok());
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            FenFields::split(""),
            Err(FenError::MissingField("placement"))
        );
        assert_eq!(
            FenFields::split("8/8/8/8/8/8/8/8"),
            Err(FenError::MissingField("side to move"))
        );
        assert_eq!(
            FenFields::split("8/8/8/8/8/8/8/8 w KQ"),
            Err(FenError::MissingField("en passant"))
        );
    }

    #[test]
    fn too_many_fields() {
        assert_eq!(
            FenFields::split("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::TooManyFields(7))
        );
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::MissingField("castling");
        assert!(format!("{}", err).contains("castling"));

        let err = FenError::UnknownSideToken("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::MalformedPlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));

        let err = FenError::UnknownCastlingToken('Z');
        assert!(format!("{}", err).contains('Z'));

        let err = FenError::MalformedEnPassant("z9".to_string());
        assert!(format!("{}", err).contains("z9"));
    }
}
