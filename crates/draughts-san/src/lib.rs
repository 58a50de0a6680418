//! Draughts move notation generation.
//!
//! This crate turns coordinate moves ("0534") into the human-readable
//! notation used by draughts ("5-34" for a plain move, "5x34" for a
//! capture), given a position in the compact FEN dialect parsed by
//! [`draughts_core`]. The batch entry point returns a mapping from
//! notation back to the original coordinate move, so a hosting layer can
//! look up which raw move a selected notation stands for.
//!
//! # Example
//!
//! ```
//! use draughts_san::san_writer;
//!
//! let sans = san_writer("W:W31,K34:B19", &["3419"], Some(1));
//! assert_eq!(sans.get("34x19").map(String::as_str), Some("3419"));
//! ```

pub mod san;

pub use san::{san_of, san_writer, SanToUci};
