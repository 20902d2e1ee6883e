//! Engine-state snapshot in the shape consumed by save/load and network
//! sync collaborators: an 8x8 row-major grid of nullable piece cells plus
//! the four board-level fields and the full move history.

use serde::{Deserialize, Serialize};

use crate::board::{Board, MoveRecord};
use crate::types::{Color, Piece, Winner};

/// Complete exportable engine state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Option<Piece>>>,
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub move_history: Vec<MoveRecord>,
}

impl Board {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.grid.iter().map(|row| row.to_vec()).collect(),
            current_player: self.current_player,
            game_over: self.game_over,
            winner: self.winner,
            move_history: self.move_history.clone(),
        }
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Pieces are re-created at the cell they occupy, restoring
    /// `has_moved`; the cell coordinates win over any stale `row`/`col`
    /// carried in the snapshot so the position invariant holds. The four
    /// board-level fields are restored verbatim. Rows or cells beyond the
    /// 8x8 grid are ignored, missing ones read as empty.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let mut board = Board::empty();
        for (row, cells) in snapshot.board.iter().take(8).enumerate() {
            for (col, cell) in cells.iter().take(8).enumerate() {
                if let Some(saved) = cell {
                    let mut piece = Piece::new(saved.kind, saved.color, row as i8, col as i8);
                    piece.has_moved = saved.has_moved;
                    board.set_piece(row as i8, col as i8, Some(piece));
                }
            }
        }
        board.current_player = snapshot.current_player;
        board.game_over = snapshot.game_over;
        board.winner = snapshot.winner;
        board.move_history = snapshot.move_history.clone();
        board
    }
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod serialize_tests;
