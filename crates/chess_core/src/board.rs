//! Authoritative board state: move application, legality filtering, check
//! detection, and terminal conditions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::is_pseudo_legal;
use crate::types::{on_board, Color, Piece, PieceKind, Square, Winner};

/// Why a `make_move` request was rejected. The board is untouched on
/// every one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("No piece at source position")]
    NoPieceAtSource,
    #[error("Not your piece")]
    WrongTurn,
    #[error("Invalid destination")]
    OutOfBounds,
    #[error("Invalid move for this piece")]
    IllegalShape,
    #[error("Move would put king in check")]
    ExposesOwnKing,
}

/// One entry of the append-only move history. `piece` is the mover as of
/// just after the move; `captured` is the displaced occupant, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub player: Color,
}

/// Saved state for reverting a transiently applied move.
///
/// Consumed by value in `Board::undo_move`, so a revert cannot run twice
/// and an apply cannot be forgotten without the compiler noticing.
#[derive(Debug)]
pub struct Undo {
    from: Square,
    to: Square,
    moved: Piece,
    captured: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub grid: [[Option<Piece>; 8]; 8],
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub move_history: Vec<MoveRecord>,
}

impl Board {
    /// Board in the standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_initial_position();
        board
    }

    /// Board with no pieces at all, used to build endgame and test
    /// positions cell by cell.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            current_player: Color::White,
            game_over: false,
            winner: None,
            move_history: Vec::new(),
        }
    }

    fn setup_initial_position(&mut self) {
        for col in 0..8 {
            self.place(PieceKind::Pawn, Color::Black, 1, col);
            self.place(PieceKind::Pawn, Color::White, 6, col);
        }
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            self.place(kind, Color::Black, 0, col as i8);
            self.place(kind, Color::White, 7, col as i8);
        }
    }

    /// Reinitialize to the starting position, discarding all history.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    pub fn is_valid_position(&self, row: i8, col: i8) -> bool {
        on_board(row, col)
    }

    /// Piece at `(row, col)`, or `None` for an empty or off-board cell.
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        if on_board(row, col) {
            self.grid[row as usize][col as usize]
        } else {
            None
        }
    }

    pub fn set_piece(&mut self, row: i8, col: i8, piece: Option<Piece>) {
        self.grid[row as usize][col as usize] = piece;
    }

    /// Put a fresh piece on `(row, col)` with its coordinates set to match.
    pub fn place(&mut self, kind: PieceKind, color: Color, row: i8, col: i8) {
        self.set_piece(row, col, Some(Piece::new(kind, color, row, col)));
    }

    /// Transiently move a piece, returning the state needed to revert.
    ///
    /// Only the two grid cells and the moved piece's coordinates change;
    /// `has_moved` is left alone so a reverted probe restores the board
    /// exactly. The returned `Undo` must be fed back to `undo_move` before
    /// any other apply/undo runs against this board: the board is
    /// inconsistent in between, so one traversal at a time.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Undo {
        let mut piece = self.grid[from.0 as usize][from.1 as usize]
            .take()
            .expect("apply_move on empty source square");
        let captured = self.grid[to.0 as usize][to.1 as usize];
        let undo = Undo {
            from,
            to,
            moved: piece,
            captured,
        };
        piece.row = to.0;
        piece.col = to.1;
        self.grid[to.0 as usize][to.1 as usize] = Some(piece);
        undo
    }

    /// Exact inverse of `apply_move`.
    pub fn undo_move(&mut self, undo: Undo) {
        self.grid[undo.to.0 as usize][undo.to.1 as usize] = undo.captured;
        self.grid[undo.from.0 as usize][undo.from.1 as usize] = Some(undo.moved);
    }

    /// Would playing `from` -> `to` leave `color`'s own king attacked?
    fn exposes_own_king(&mut self, from: Square, to: Square, color: Color) -> bool {
        let undo = self.apply_move(from, to);
        let in_check = self.is_in_check(color);
        self.undo_move(undo);
        in_check
    }

    /// Play a move for the side to move, with full legality checking.
    ///
    /// On success the grid and the piece are updated together, the piece
    /// is marked moved, a `MoveRecord` is appended, the turn flips, and
    /// terminal conditions are evaluated for the new side to move.
    pub fn make_move(
        &mut self,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Result<(), MoveError> {
        let piece = self
            .get_piece(from_row, from_col)
            .ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.current_player {
            return Err(MoveError::WrongTurn);
        }
        if !on_board(to_row, to_col) {
            return Err(MoveError::OutOfBounds);
        }
        if !is_pseudo_legal(&piece, (to_row, to_col), self) {
            return Err(MoveError::IllegalShape);
        }
        if self.exposes_own_king((from_row, from_col), (to_row, to_col), piece.color) {
            return Err(MoveError::ExposesOwnKing);
        }

        let player = self.current_player;
        let captured = self.get_piece(to_row, to_col);
        let mut moved = piece;
        moved.row = to_row;
        moved.col = to_col;
        moved.has_moved = true;
        self.set_piece(from_row, from_col, None);
        self.set_piece(to_row, to_col, Some(moved));

        self.move_history.push(MoveRecord {
            from: (from_row, from_col),
            to: (to_row, to_col),
            piece: moved,
            captured,
            player,
        });

        self.current_player = player.other();
        self.check_game_end();
        Ok(())
    }

    /// Locate `color`'s king, scanning row-major.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = self.get_piece(row, col) {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Some((row, col));
                    }
                }
            }
        }
        None
    }

    /// Whether `color`'s king is attacked by any opposing piece. A missing
    /// king reads as "not in check" rather than failing, so a search
    /// simulation that lost a king keeps running.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = match self.find_king(color) {
            Some(square) => square,
            None => return false,
        };
        let attacker = color.other();
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = self.get_piece(row, col) {
                    if piece.color == attacker && is_pseudo_legal(&piece, king, self) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Every legal move for `color` as `(from, to)` pairs.
    ///
    /// Pseudo-legal candidates are probed in place and kept only if the
    /// mover's king stays safe. Order is row-major by source square, then
    /// row-major by destination; downstream move ordering relies on this
    /// being stable.
    pub fn get_all_possible_moves(&mut self, color: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for from_row in 0..8 {
            for from_col in 0..8 {
                let piece = match self.get_piece(from_row, from_col) {
                    Some(piece) if piece.color == color => piece,
                    _ => continue,
                };
                for to_row in 0..8 {
                    for to_col in 0..8 {
                        if !is_pseudo_legal(&piece, (to_row, to_col), self) {
                            continue;
                        }
                        if self.exposes_own_king((from_row, from_col), (to_row, to_col), color) {
                            continue;
                        }
                        moves.push(((from_row, from_col), (to_row, to_col)));
                    }
                }
            }
        }
        moves
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.get_all_possible_moves(color).is_empty()
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.get_all_possible_moves(color).is_empty()
    }

    fn check_game_end(&mut self) {
        let to_move = self.current_player;
        if self.is_checkmate(to_move) {
            self.game_over = true;
            self.winner = Some(match to_move.other() {
                Color::White => Winner::White,
                Color::Black => Winner::Black,
            });
        } else if self.is_stalemate(to_move) {
            self.game_over = true;
            self.winner = Some(Winner::Draw);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Textual dump: piece symbols and `.` for empty cells, one row per
    /// line from Black's back rank down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get_piece(row, col) {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
