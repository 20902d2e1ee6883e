//! Per-piece pseudo-legal movement predicates.
//!
//! A pseudo-legal move satisfies the piece's movement pattern and the
//! path/occupancy rules, ignoring whether it exposes the mover's king.
//! King-safety filtering happens in `Board`, which is also why check
//! detection can call straight into these predicates without recursing.

use crate::board::Board;
use crate::types::{on_board, Piece, PieceKind, Square};

/// Whether `piece` may move to `to` by its movement pattern alone.
pub fn is_pseudo_legal(piece: &Piece, to: Square, board: &Board) -> bool {
    if !on_board(to.0, to.1) {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move(piece, to, board),
        PieceKind::Rook => rook_shape(piece, to) && clear_line_to(piece, to, board),
        PieceKind::Knight => knight_move(piece, to, board),
        PieceKind::Bishop => bishop_shape(piece, to) && clear_line_to(piece, to, board),
        PieceKind::Queen => {
            (rook_shape(piece, to) || bishop_shape(piece, to)) && clear_line_to(piece, to, board)
        }
        PieceKind::King => king_move(piece, to, board),
    }
}

/// Destination is empty or holds an opposing piece.
fn capturable(piece: &Piece, to: Square, board: &Board) -> bool {
    match board.get_piece(to.0, to.1) {
        None => true,
        Some(target) => target.color != piece.color,
    }
}

fn pawn_move(piece: &Piece, (to_row, to_col): Square, board: &Board) -> bool {
    let dir = piece.color.forward();
    let row_diff = to_row - piece.row;
    let col_diff = (to_col - piece.col).abs();

    if col_diff == 0 {
        // Forward moves never capture.
        if row_diff == dir && board.get_piece(to_row, to_col).is_none() {
            return true;
        }
        if !piece.has_moved && row_diff == 2 * dir {
            return board.get_piece(piece.row + dir, to_col).is_none()
                && board.get_piece(to_row, to_col).is_none();
        }
        false
    } else if col_diff == 1 && row_diff == dir {
        // Diagonal step requires an enemy piece to take.
        matches!(board.get_piece(to_row, to_col), Some(target) if target.color != piece.color)
    } else {
        false
    }
}

fn rook_shape(piece: &Piece, (to_row, to_col): Square) -> bool {
    to_row == piece.row || to_col == piece.col
}

fn bishop_shape(piece: &Piece, (to_row, to_col): Square) -> bool {
    let row_diff = (to_row - piece.row).abs();
    row_diff == (to_col - piece.col).abs() && row_diff > 0
}

/// Walk from the piece toward `to`, requiring every strictly intermediate
/// cell to be empty and the destination to be capturable. Works for both
/// straight and diagonal lines; a zero-length line degenerates to the
/// destination check, which rejects it (own piece on the cell).
fn clear_line_to(piece: &Piece, to: Square, board: &Board) -> bool {
    let row_step = (to.0 - piece.row).signum();
    let col_step = (to.1 - piece.col).signum();
    let mut row = piece.row + row_step;
    let mut col = piece.col + col_step;
    while (row, col) != to {
        if board.get_piece(row, col).is_some() {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    capturable(piece, to, board)
}

fn knight_move(piece: &Piece, (to_row, to_col): Square, board: &Board) -> bool {
    let row_diff = (to_row - piece.row).abs();
    let col_diff = (to_col - piece.col).abs();
    ((row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2))
        && capturable(piece, (to_row, to_col), board)
}

fn king_move(piece: &Piece, (to_row, to_col): Square, board: &Board) -> bool {
    let row_diff = (to_row - piece.row).abs();
    let col_diff = (to_col - piece.col).abs();
    row_diff <= 1
        && col_diff <= 1
        && row_diff + col_diff > 0
        && capturable(piece, (to_row, to_col), board)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
