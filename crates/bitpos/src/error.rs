//! Errors for position state built outside the position-string loader.

use thiserror::Error;

/// Rejections when assembling a [`PieceSet`](crate::PieceSet) or
/// [`Position`](crate::Position) from raw parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("piece planes overlap or disagree with their aggregates")]
    InconsistentPlanes,

    #[error("a1 cannot be an en passant target")]
    EnPassantOnA1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_display() {
        let planes = StateError::InconsistentPlanes.to_string();
        assert!(planes.contains("aggregates"));
        assert!(StateError::EnPassantOnA1.to_string().contains("a1"));
    }
}
