//! Core chess rules: board representation, per-piece movement legality,
//! check detection, legal move generation, and terminal conditions
//! (checkmate/stalemate).
//!
//! The rule set deliberately omits castling, en passant, and pawn
//! promotion. Search and evaluation live in the `chess_ai` crate;
//! rendering, networking, and persistence are external consumers of the
//! types re-exported here.

pub mod board;
pub mod rules;
pub mod serialize;
pub mod types;

pub use board::{Board, MoveError, MoveRecord, Undo};
pub use rules::is_pseudo_legal;
pub use serialize::GameSnapshot;
pub use types::*;
