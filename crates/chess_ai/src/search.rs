//! Move selection for the three difficulty tiers: uniform random, one-ply
//! heuristic scoring, and iterative-deepening alpha-beta with capture-first
//! move ordering and a wall-clock budget.

use std::time::Duration;

use chess_core::{Board, Color, PieceKind, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::SearchClock;
use crate::eval::{evaluate, pawn_advancement, piece_value};

/// A move as the generator emits it.
pub type MovePair = (Square, Square);

/// Immutable configuration for one search call. Built fresh per call so a
/// difficulty or color change can never leak into a search in flight.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// The color the search is choosing a move for.
    pub color: Color,
    /// Iterative-deepening depth cap, in plies.
    pub max_depth: u8,
    /// Wall-clock budget for the whole search.
    pub budget: Duration,
}

/// Score for a mate found inside the tree. Large enough to dominate every
/// material and positional swing the evaluator can produce.
pub(crate) const MATE_SCORE: f64 = 1000.0;

/// Easy tier: any legal move, uniformly.
pub(crate) fn random_move(moves: &[MovePair], rng: &mut StdRng) -> Option<MovePair> {
    moves.choose(rng).copied()
}

/// Medium tier: score each move with a one-ply heuristic plus a small
/// random jitter and take the maximum. Ties are settled by the jitter,
/// not by generation order.
pub(crate) fn evaluated_move(
    board: &Board,
    moves: &[MovePair],
    color: Color,
    rng: &mut StdRng,
) -> Option<MovePair> {
    let mut best: Option<(MovePair, f64)> = None;
    for &mv in moves {
        let score = score_move(board, mv, color) + rng.gen_range(-0.1..=0.1);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// One-ply heuristic: capture value, center control, development off the
/// back rank, a penalty for breaking king shelter, pawn advancement.
fn score_move(board: &Board, (from, to): MovePair, color: Color) -> f64 {
    let piece = match board.get_piece(from.0, from.1) {
        Some(piece) => piece,
        None => return f64::NEG_INFINITY,
    };

    let mut score = 0.0;
    if let Some(target) = board.get_piece(to.0, to.1) {
        score += piece_value(target.kind);
    }
    if matches!(to, (3, 3) | (3, 4) | (4, 3) | (4, 4)) {
        score += 0.5;
    }
    if from.0 == color.back_rank() && to.0 != color.back_rank() {
        score += 0.3;
    }
    if piece.kind == PieceKind::King && !piece.has_moved {
        score -= 1.0;
    }
    if piece.kind == PieceKind::Pawn {
        score += pawn_advancement(color, to.0);
    }
    score
}

/// Hard tier: iterative-deepening alpha-beta.
///
/// The running best move is carried across depth iterations rather than
/// reset, so a result from a completed shallow pass survives unless a
/// deeper pass finds something strictly better before time runs out. The
/// deadline is polled only between root moves and between depths. If no
/// move ever scored above negative infinity when the budget lapses, fall
/// back to a random legal move.
pub(crate) fn minimax_move(
    board: &mut Board,
    moves: &[MovePair],
    config: &SearchConfig,
    rng: &mut StdRng,
) -> Option<MovePair> {
    if moves.is_empty() {
        return None;
    }

    let clock = SearchClock::start(config.budget);
    let ordered = order_moves(board, moves);
    let mut best: Option<MovePair> = None;
    let mut best_score = f64::NEG_INFINITY;

    for depth in 1..=config.max_depth {
        if clock.expired() {
            break;
        }
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for &(from, to) in &ordered {
            if clock.expired() {
                break;
            }
            let undo = board.apply_move(from, to);
            let score = alpha_beta(board, config, depth - 1, alpha, beta, false);
            board.undo_move(undo);

            if score > best_score {
                best_score = score;
                best = Some((from, to));
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
    }

    best.or_else(|| random_move(moves, rng))
}

/// Alpha-beta recursion. `maximizing` layers move the searcher's color,
/// minimizing layers the opponent; depth 0 hands off to the evaluator.
/// No clock checks in here: a descent always completes.
fn alpha_beta(
    board: &mut Board,
    config: &SearchConfig,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> f64 {
    if depth == 0 {
        return evaluate(board, config.color);
    }

    let side = if maximizing {
        config.color
    } else {
        config.color.other()
    };
    let moves = board.get_all_possible_moves(side);
    if moves.is_empty() {
        if board.is_in_check(side) {
            // Mate against whoever is to move at this layer.
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0.0;
    }
    let ordered = order_moves(board, &moves);

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for &(from, to) in &ordered {
            let undo = board.apply_move(from, to);
            let score = alpha_beta(board, config, depth - 1, alpha, beta, false);
            board.undo_move(undo);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for &(from, to) in &ordered {
            let undo = board.apply_move(from, to);
            let score = alpha_beta(board, config, depth - 1, alpha, beta, true);
            board.undo_move(undo);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Captures before quiet moves, stable within each class, so the
/// generator's row-major order carries through as the tiebreaker.
pub(crate) fn order_moves(board: &Board, moves: &[MovePair]) -> Vec<MovePair> {
    let (mut captures, mut quiet): (Vec<MovePair>, Vec<MovePair>) = moves
        .iter()
        .copied()
        .partition(|&(_, to)| board.get_piece(to.0, to.1).is_some());
    captures.append(&mut quiet);
    captures
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
