use super::*;

#[test]
fn startpos_white_has_twenty_moves() {
    let mut board = Board::new();
    let moves = board.get_all_possible_moves(Color::White);
    // 16 pawn moves + 4 knight moves.
    assert_eq!(moves.len(), 20);
    let moves = board.get_all_possible_moves(Color::Black);
    assert_eq!(moves.len(), 20);
}

#[test]
fn make_move_rejections_leave_board_untouched() {
    let mut board = Board::new();
    let before = board.clone();

    assert_eq!(
        board.make_move(4, 4, 5, 4),
        Err(MoveError::NoPieceAtSource)
    );
    assert_eq!(board.make_move(1, 4, 2, 4), Err(MoveError::WrongTurn));
    assert_eq!(board.make_move(6, 4, -1, 4), Err(MoveError::OutOfBounds));
    assert_eq!(board.make_move(6, 4, 3, 4), Err(MoveError::IllegalShape));
    assert_eq!(board, before);
    assert!(board.move_history.is_empty());
}

#[test]
fn move_error_messages_match_interface_contract() {
    assert_eq!(
        MoveError::NoPieceAtSource.to_string(),
        "No piece at source position"
    );
    assert_eq!(MoveError::WrongTurn.to_string(), "Not your piece");
    assert_eq!(MoveError::OutOfBounds.to_string(), "Invalid destination");
    assert_eq!(
        MoveError::IllegalShape.to_string(),
        "Invalid move for this piece"
    );
    assert_eq!(
        MoveError::ExposesOwnKing.to_string(),
        "Move would put king in check"
    );
}

#[test]
fn successful_move_alternates_turn_and_records_history() {
    let mut board = Board::new();
    assert_eq!(board.current_player, Color::White);
    board.make_move(6, 4, 4, 4).unwrap();
    assert_eq!(board.current_player, Color::Black);
    board.make_move(1, 4, 3, 4).unwrap();
    assert_eq!(board.current_player, Color::White);

    assert_eq!(board.move_history.len(), 2);
    let first = board.move_history[0];
    assert_eq!(first.from, (6, 4));
    assert_eq!(first.to, (4, 4));
    assert_eq!(first.player, Color::White);
    assert!(first.piece.has_moved);
    assert!(first.captured.is_none());

    // The moved pawn's own coordinates track its grid cell.
    let pawn = board.get_piece(4, 4).unwrap();
    assert_eq!((pawn.row, pawn.col), (4, 4));
    assert!(pawn.has_moved);
}

#[test]
fn capture_is_recorded() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap(); // e4
    board.make_move(1, 3, 3, 3).unwrap(); // d5
    board.make_move(4, 4, 3, 3).unwrap(); // exd5

    let capture = board.move_history[2];
    let captured = capture.captured.unwrap();
    assert_eq!(captured.kind, PieceKind::Pawn);
    assert_eq!(captured.color, Color::Black);
    assert_eq!(board.get_piece(3, 3).unwrap().color, Color::White);
}

#[test]
fn apply_then_undo_restores_board_exactly() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();
    board.make_move(1, 3, 3, 3).unwrap();
    let before = board.clone();

    // Quiet move and capture both revert byte for byte.
    for (from, to) in [((7, 6), (5, 5)), ((4, 4), (3, 3))] {
        let undo = board.apply_move(from, to);
        assert_ne!(board, before);
        board.undo_move(undo);
        assert_eq!(board, before);
    }
}

#[test]
fn no_generated_move_leaves_own_king_in_check() {
    let mut board = Board::new();
    // Expose the white king along the e-file and give Black a rook on it.
    board.set_piece(6, 4, None);
    board.place(PieceKind::Rook, Color::Black, 4, 4);

    for (from, to) in board.get_all_possible_moves(Color::White) {
        let undo = board.apply_move(from, to);
        assert!(
            !board.is_in_check(Color::White),
            "move {:?} -> {:?} leaves white in check",
            from,
            to
        );
        board.undo_move(undo);
    }
}

#[test]
fn pinned_piece_cannot_move_away() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, 7, 4);
    board.place(PieceKind::Rook, Color::White, 5, 4);
    board.place(PieceKind::Rook, Color::Black, 1, 4);
    board.place(PieceKind::King, Color::Black, 0, 0);

    // The pinned rook may slide along the file (including capturing the
    // pinning rook) but never off it.
    assert_eq!(
        board.make_move(5, 4, 5, 7),
        Err(MoveError::ExposesOwnKing)
    );
    assert!(board.make_move(5, 4, 1, 4).is_ok());
}

#[test]
fn moving_into_check_is_rejected() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, 7, 4);
    board.place(PieceKind::Rook, Color::Black, 0, 3);
    board.place(PieceKind::King, Color::Black, 0, 0);

    assert_eq!(
        board.make_move(7, 4, 7, 3),
        Err(MoveError::ExposesOwnKing)
    );
    assert!(board.make_move(7, 4, 6, 4).is_ok());
}

#[test]
fn check_detection_sees_sliding_attacks_through_open_lines() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, 7, 4);
    board.place(PieceKind::Queen, Color::Black, 3, 0);
    board.place(PieceKind::King, Color::Black, 0, 0);
    assert!(board.is_in_check(Color::White)); // diagonal a5..e1

    board.place(PieceKind::Pawn, Color::Black, 5, 2);
    assert!(!board.is_in_check(Color::White)); // now blocked
}

#[test]
fn missing_king_reads_as_not_in_check() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::Black, 0, 0);
    assert!(!board.is_in_check(Color::White));
    assert_eq!(board.find_king(Color::White), None);
}

#[test]
fn reset_restores_starting_layout() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn display_renders_starting_position() {
    let board = Board::new();
    let text = board.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], "♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
    assert_eq!(rows[4], ". . . . . . . .");
    assert_eq!(rows[7], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
}
