//! Static position scoring: material, piece placement, king safety, and
//! mobility, from a single color's perspective.

use chess_core::{Board, Color, Piece, PieceKind};

/// Material values in pawn units.
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 100.0,
    }
}

/// Score the position for `perspective`: positive favors that color.
///
/// Takes `&mut Board` because the mobility term counts legal moves, which
/// probes candidate moves in place; the board is fully restored before
/// returning.
pub fn evaluate(board: &mut Board, perspective: Color) -> f64 {
    let mut score = 0.0;

    for row in 0..8 {
        for col in 0..8 {
            if let Some(piece) = board.get_piece(row, col) {
                let value = piece_value(piece.kind) + position_bonus(&piece);
                if piece.color == perspective {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
    }

    score += king_safety(board, perspective) * 2.0;
    score -= king_safety(board, perspective.other()) * 2.0;

    let own_mobility = board.get_all_possible_moves(perspective).len() as f64;
    let their_mobility = board.get_all_possible_moves(perspective.other()).len() as f64;
    score += (own_mobility - their_mobility) * 0.1;

    score
}

/// Manhattan distance from the board's center point.
fn center_distance(row: i8, col: i8) -> f64 {
    (3.5 - row as f64).abs() + (3.5 - col as f64).abs()
}

/// Placement bonus for a piece, in pawn units. Knights and bishops like
/// the center, pawns like advancing, the king is docked for wandering out
/// (one formula for all game phases, a deliberate simplification).
pub fn position_bonus(piece: &Piece) -> f64 {
    match piece.kind {
        PieceKind::Pawn => pawn_advancement(piece.color, piece.row),
        PieceKind::Knight => (4.0 - center_distance(piece.row, piece.col)) * 0.1,
        PieceKind::Bishop => (7.0 - center_distance(piece.row, piece.col)) * 0.05,
        PieceKind::King => -center_distance(piece.row, piece.col) * 0.1,
        PieceKind::Rook | PieceKind::Queen => 0.0,
    }
}

/// Progress toward the promotion rank, 0.1 per row.
pub(crate) fn pawn_advancement(color: Color, row: i8) -> f64 {
    match color {
        Color::White => (7 - row) as f64 * 0.1,
        Color::Black => row as f64 * 0.1,
    }
}

/// Pawn-shield count for a king still on its home rank: own pawns on the
/// rank in front, on the king's file and the two adjacent files. A
/// missing king scores -100 instead of failing, so an invariant breach
/// inside a search simulation stays a bad score rather than a crash.
fn king_safety(board: &Board, color: Color) -> f64 {
    let (king_row, king_col) = match board.find_king(color) {
        Some(square) => square,
        None => return -100.0,
    };
    if king_row != color.back_rank() {
        return 0.0;
    }

    let shield_row = color.pawn_rank();
    let mut pawns = 0.0;
    for offset in -1..=1 {
        if let Some(piece) = board.get_piece(shield_row, king_col + offset) {
            if piece.color == color && piece.kind == PieceKind::Pawn {
                pawns += 1.0;
            }
        }
    }
    pawns
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
