//! Draughts notation generation.
//!
//! Draughts notation writes a move as its two square numbers joined by `-`
//! for a plain move or `x` for a capture, with the two-digit internal square
//! form shortened for display ("05" renders as "5"). Unlike chess SAN there
//! is no piece letter and no disambiguation; see [`san_writer`] for how
//! colliding notations are resolved.

use draughts_core::{Board, CoordMove};
use std::collections::HashMap;

/// Mapping from generated notation to the original coordinate move, for
/// reverse lookup when a caller selects a notation from a list.
pub type SanToUci = HashMap<String, String>;

/// Strips the display padding from a square token.
///
/// Exactly one leading zero is removed; anything else, including an empty
/// token from a truncated move, passes through unchanged.
fn shorten(token: &str) -> &str {
    token.strip_prefix('0').unwrap_or(token)
}

/// Converts a coordinate move to draughts notation.
///
/// The board is the position before the move. It is not consulted yet; the
/// parameter is part of the contract so board-aware notation (such as
/// marking king moves) can be added without breaking callers.
pub fn san_of(_board: &Board, uci: &str, capture: bool) -> String {
    let mv = CoordMove::new(uci);
    let separator = if capture { 'x' } else { '-' };
    format!(
        "{}{}{}",
        shorten(mv.from_token()),
        separator,
        shorten(mv.to_token())
    )
}

/// Converts a batch of coordinate moves played from one position.
///
/// The position is parsed once with [`Board::read`]; every move in `ucis`
/// is rendered with the same capture flag, set when `capt_len` is present
/// and strictly positive. Two distinct moves that render to the same
/// notation keep only the later one; ambiguous capture sequences are not
/// disambiguated.
pub fn san_writer<S: AsRef<str>>(fen: &str, ucis: &[S], capt_len: Option<i32>) -> SanToUci {
    let board = Board::read(fen);
    let capture = matches!(capt_len, Some(n) if n > 0);
    let mut sans = SanToUci::new();
    for uci in ucis {
        let uci = uci.as_ref();
        sans.insert(san_of(&board, uci, capture), uci.to_string());
    }
    sans
}
