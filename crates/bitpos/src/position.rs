//! Position state and loading from a position string.

use std::fmt;

use bitpos_core::{Color, FenError, FenFields, File, Piece, Rank, Square, STARTPOS};
use tracing::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PieceSet;
#[cfg(feature = "serde")]
use crate::StateError;

/// Castling rights flags.
///
/// Bit 0 is White kingside, bit 1 White queenside, bit 2 Black kingside,
/// bit 3 Black queenside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8"))]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// The FEN letter of each flag, in bit order.
    const LETTERS: [(char, u8); 4] = [
        ('K', Self::WHITE_KINGSIDE),
        ('Q', Self::WHITE_QUEENSIDE),
        ('k', Self::BLACK_KINGSIDE),
        ('q', Self::BLACK_QUEENSIDE),
    ];

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Reads the castling field.
    ///
    /// Each of `KQkq` flips its bit, so a repeated letter cancels itself.
    /// `-` is only valid as the whole field.
    pub fn from_field(field: &str) -> Result<Self, FenError> {
        let mut rights = CastlingRights::NONE;
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            let flag = Self::flag_for(c).ok_or(FenError::UnknownCastlingToken(c))?;
            rights.0 ^= flag;
        }
        Ok(rights)
    }

    fn flag_for(c: char) -> Option<u8> {
        Self::LETTERS
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|&(_, flag)| flag)
    }

    /// Returns true if every bit of `flag` is set.
    #[inline]
    pub const fn has(self, flag: u8) -> bool {
        flag != 0 && (self.0 & flag) == flag
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for CastlingRights {
    fn from(flags: u8) -> Self {
        CastlingRights::new(flags)
    }
}

/// Four fixed slots in `KQkq` order with `-` for a missing right, e.g. `K--q`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in Self::LETTERS {
            let c = if self.has(flag) { letter } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Complete position state.
///
/// Every load replaces all of it; there is no incremental update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PositionFields"))]
pub struct Position {
    /// The fourteen piece planes.
    pub pieces: PieceSet,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square (if any). Never `a1`.
    pub en_passant: Option<Square>,
}

/// Unchecked mirror of [`Position`] read by the deserializer.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PositionFields {
    pieces: PieceSet,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

#[cfg(feature = "serde")]
impl TryFrom<PositionFields> for Position {
    type Error = StateError;

    fn try_from(fields: PositionFields) -> Result<Self, Self::Error> {
        if fields.en_passant == Some(Square::A1) {
            return Err(StateError::EnPassantOnA1);
        }
        Ok(Position {
            pieces: fields.pieces,
            side_to_move: fields.side_to_move,
            castling: fields.castling,
            en_passant: fields.en_passant,
        })
    }
}

impl Position {
    /// Creates an empty position with White to move.
    pub fn empty() -> Self {
        Position {
            pieces: PieceSet::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a position string.
    ///
    /// Fields after the fourth (move counters) are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields = FenFields::split(fen)?;

        let pieces = parse_placement(fields.placement)?;
        let side_to_move = Color::from_token(fields.side)
            .ok_or_else(|| FenError::UnknownSideToken(fields.side.to_string()))?;
        let castling = CastlingRights::from_field(fields.castling)?;
        let en_passant = parse_en_passant(fields.en_passant)?;

        Ok(Position {
            pieces,
            side_to_move,
            castling,
            en_passant,
        })
    }

    /// Returns the en passant target in the packed form, where 0 means none.
    ///
    /// Square a1 shares the value 0; it can never be an en passant target.
    #[inline]
    pub fn en_passant_raw(&self) -> u8 {
        self.en_passant.map_or(0, Square::index)
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.pieces.piece_at(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Scans the placement field with a cursor starting at a8.
///
/// A piece letter toggles its plane and aggregate and advances one square,
/// a digit skips that many squares, and `/` drops the cursor to the start
/// of the next rank down. Each rank must cover exactly eight squares.
fn parse_placement(field: &str) -> Result<PieceSet, FenError> {
    let mut pieces = PieceSet::empty();
    let mut cursor = Square::A8.index();
    let mut rank = 7u8;
    let mut filled = 0u8;

    for c in field.chars() {
        match c {
            '/' => {
                if filled != 8 {
                    return Err(short_rank(rank, filled));
                }
                if rank == 0 {
                    return Err(FenError::MalformedPlacement(
                        "more than 8 ranks".to_string(),
                    ));
                }
                cursor -= 16;
                rank -= 1;
                filled = 0;
            }
            _ if c.is_ascii_digit() => {
                let run = c as u8 - b'0';
                if run == 0 || filled + run > 8 {
                    return Err(FenError::MalformedPlacement(format!(
                        "run of {} empty squares overflows rank {}",
                        run,
                        rank + 1
                    )));
                }
                cursor += run;
                filled += run;
            }
            _ => match Piece::from_letter(c) {
                Some((piece, color)) => {
                    if filled == 8 {
                        return Err(FenError::MalformedPlacement(format!(
                            "rank {} has more than 8 squares",
                            rank + 1
                        )));
                    }
                    let sq = Square::from_index(cursor).ok_or_else(|| {
                        FenError::MalformedPlacement(format!("square index {} off board", cursor))
                    })?;
                    pieces.toggle(piece, color, sq);
                    cursor += 1;
                    filled += 1;
                }
                None => warn!(character = %c, "skipping unknown placement character"),
            },
        }
    }

    if rank != 0 {
        return Err(FenError::MalformedPlacement(format!(
            "expected 8 ranks, got {}",
            8 - rank
        )));
    }
    if filled != 8 {
        return Err(short_rank(rank, filled));
    }

    Ok(pieces)
}

fn short_rank(rank: u8, filled: u8) -> FenError {
    FenError::MalformedPlacement(format!(
        "rank {} has {} squares, expected 8",
        rank + 1,
        filled
    ))
}

/// Reads the en passant field.
///
/// A file letter contributes its file index and a rank digit contributes
/// eight times its rank index; the two add up to the square index.
fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let malformed = || FenError::MalformedEnPassant(field.to_string());
    let mut index = 0u8;
    let mut seen_file = false;
    let mut seen_rank = false;

    for c in field.chars() {
        if let Some(file) = File::from_char(c) {
            if seen_file || seen_rank {
                return Err(malformed());
            }
            trace!(file = file.index(), "en passant file");
            index += file.index();
            seen_file = true;
        } else if let Some(rank) = Rank::from_char(c) {
            if seen_rank {
                return Err(malformed());
            }
            trace!(rank = rank.index(), "en passant rank");
            index += 8 * rank.index();
            seen_rank = true;
        } else {
            return Err(malformed());
        }
    }

    if index == 0 {
        warn!(field, "en passant target a1 is indistinguishable from none");
        return Ok(None);
    }
    Ok(Square::from_index(index))
}
