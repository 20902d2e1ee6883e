use super::*;
use crate::types::PieceKind;

#[test]
fn snapshot_round_trip_preserves_everything() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();
    board.make_move(1, 3, 3, 3).unwrap();
    board.make_move(4, 4, 3, 3).unwrap();

    let snapshot = board.snapshot();
    let restored = Board::from_snapshot(&snapshot);
    assert_eq!(restored, board);
    assert_eq!(restored.move_history.len(), 3);
}

#[test]
fn json_round_trip_through_serde() {
    let mut board = Board::new();
    board.make_move(6, 3, 4, 3).unwrap();

    let json = serde_json::to_string(&board.snapshot()).unwrap();
    let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(Board::from_snapshot(&snapshot), board);
}

#[test]
fn json_shape_matches_persistence_contract() {
    let board = Board::new();
    let value = serde_json::to_value(board.snapshot()).unwrap();

    assert_eq!(value["current_player"], "white");
    assert_eq!(value["game_over"], false);
    assert!(value["winner"].is_null());
    assert!(value["move_history"].as_array().unwrap().is_empty());

    let grid = value["board"].as_array().unwrap();
    assert_eq!(grid.len(), 8);
    assert!(grid[4][0].is_null());

    let black_queen = &grid[0][3];
    assert_eq!(black_queen["type"], "queen");
    assert_eq!(black_queen["color"], "black");
    assert_eq!(black_queen["has_moved"], false);
    assert_eq!(black_queen["row"], 0);
    assert_eq!(black_queen["col"], 3);
}

#[test]
fn import_fixes_stale_piece_coordinates() {
    let board = Board::new();
    let mut snapshot = board.snapshot();
    // Corrupt the duplicated coordinates; the cell position must win.
    if let Some(piece) = snapshot.board[0][3].as_mut() {
        piece.row = 5;
        piece.col = 5;
    }
    let restored = Board::from_snapshot(&snapshot);
    let queen = restored.get_piece(0, 3).unwrap();
    assert_eq!((queen.row, queen.col), (0, 3));
    assert_eq!(queen.kind, PieceKind::Queen);
}

#[test]
fn snapshot_preserves_winner_and_game_over() {
    let mut board = Board::new();
    board.game_over = true;
    board.winner = Some(Winner::Draw);

    let value = serde_json::to_value(board.snapshot()).unwrap();
    assert_eq!(value["winner"], "draw");

    let restored = Board::from_snapshot(&board.snapshot());
    assert!(restored.game_over);
    assert_eq!(restored.winner, Some(Winner::Draw));
}
