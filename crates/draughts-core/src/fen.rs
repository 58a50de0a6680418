//! Position (FEN) parsing for the draughts dialect.
//!
//! The dialect is colon-delimited: the first segment carries the side to
//! move, later segments carry per-side piece lists such as `WK34,12`. Each
//! piece entry is one role character followed by the square digits.

use crate::{Color, Role, Square};
use std::collections::HashMap;
use thiserror::Error;

/// Errors reported by the strict parser, [`Board::parse`].
///
/// The permissive reader, [`Board::read`], never produces these; it drops
/// malformed input instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("empty position string")]
    Empty,

    #[error("invalid side to move: expected 'W' or 'B', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid piece segment: {0}")]
    InvalidSegment(String),

    #[error("invalid piece entry: {0}")]
    InvalidEntry(String),
}

/// A parsed position: occupied squares plus the side to move.
///
/// The board is rebuilt for every notation batch and not mutated afterwards.
/// Absence from `pieces` means an empty square; repeated squares keep the
/// last entry seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupied squares, keyed by square number.
    pub pieces: HashMap<Square, Role>,
    /// True when it is White's turn to move.
    pub turn: bool,
}

impl Board {
    /// Reads a position string, dropping anything malformed.
    ///
    /// This is the permissive front door used by the notation writer: an
    /// unrecognized segment or piece entry is skipped and the rest of the
    /// position is still honored, so a partially edited position yields a
    /// partial board. There is no failure path.
    pub fn read(fen: &str) -> Board {
        let parts: Vec<&str> = fen.split(':').collect();
        let mut board = Board {
            pieces: HashMap::new(),
            turn: parts.first() == Some(&"W"),
        };

        for part in parts {
            let mut segment = part.chars();
            let marker = match segment.next() {
                Some(c) => c,
                None => continue,
            };
            if Color::from_char(marker).is_none() || segment.as_str().is_empty() {
                continue;
            }
            for entry in segment.as_str().split(',') {
                let mut chars = entry.chars();
                let role = match chars.next() {
                    Some(c) => c,
                    None => continue,
                };
                let square = match Square::from_digits(chars.as_str()) {
                    Some(sq) => sq,
                    None => continue,
                };
                board.pieces.insert(square, Role::new(role));
            }
        }

        board
    }

    /// Parses a position string, rejecting malformed input.
    ///
    /// Validation boundary for callers that want errors surfaced instead of
    /// dropped: the side segment must be a bare `W` or `B`, every later
    /// segment must open with a side marker, and every piece entry must be a
    /// role character followed by the square digits. On success this returns
    /// exactly what [`Board::read`] produces.
    pub fn parse(fen: &str) -> Result<Board, FenError> {
        if fen.is_empty() {
            return Err(FenError::Empty);
        }
        let mut parts = fen.split(':');

        let side = parts.next().unwrap_or("");
        if !matches!(side, "W" | "B") {
            return Err(FenError::InvalidSideToMove(side.to_string()));
        }

        for part in parts {
            let mut segment = part.chars();
            if !matches!(segment.next(), Some('W') | Some('B')) {
                return Err(FenError::InvalidSegment(part.to_string()));
            }
            if segment.as_str().is_empty() {
                continue;
            }
            for entry in segment.as_str().split(',') {
                let mut chars = entry.chars();
                let digits = match chars.next() {
                    Some(_) => chars.as_str(),
                    None => return Err(FenError::InvalidEntry(entry.to_string())),
                };
                if !digits.bytes().all(|b| b.is_ascii_digit())
                    || Square::from_digits(digits).is_none()
                {
                    return Err(FenError::InvalidEntry(entry.to_string()));
                }
            }
        }

        Ok(Self::read(fen))
    }

    /// Returns the role on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Role> {
        self.pieces.get(&square).copied()
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        if self.turn {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns true if no squares are occupied.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
