//! Tests for board rules and position strings.

use strictly_tablebase::{
    Board, BoardInvariants, InvariantSet, MoveError, Player, Position, PositionError,
    TerminalState,
};

#[test]
fn test_position_string_round_trip() {
    let board: Board = "x.o.x...o".parse().unwrap();
    assert_eq!(board.notation(), "x.o.x...o");
    assert_eq!(board.move_count(), 4);
    assert_eq!(board.to_move(), Player::X);
}

#[test]
fn test_five_x_three_o_rejected() {
    let result = "xxoxoxox.".parse::<Board>();
    assert!(matches!(
        result,
        Err(PositionError::MarkCount { x: 5, o: 3, .. })
    ));
}

#[test]
fn test_equal_counts_accepted() {
    let board: Board = "xo.......".parse().unwrap();
    assert_eq!(board.to_move(), Player::X);
}

#[test]
fn test_failed_move_leaves_board_unchanged() {
    let board = Board::new().apply(Position::Center).unwrap();
    let snapshot = board;
    assert_eq!(
        board.apply(Position::Center),
        Err(MoveError::Occupied(Position::Center))
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = "xo?......".parse::<Board>().unwrap_err();
    assert!(err.to_string().contains("unexpected symbol"));

    let err = Board::new().play(12).unwrap_err();
    assert_eq!(err.to_string(), "Move 12 is out of range (must be 1-9)");
}

#[test]
fn test_every_played_board_satisfies_invariants() {
    // play out all games that start in the corner
    let mut stack = vec![Board::new().apply(Position::TopLeft).unwrap()];
    while let Some(board) = stack.pop() {
        assert!(BoardInvariants::check_all(&board).is_ok());
        assert_eq!(
            board.move_count() as u32,
            board.x().count() + board.o().count()
        );
        stack.extend(board.legal_moves().into_iter().map(|p| board.apply(p).unwrap()));
    }
}

#[test]
fn test_o_wins_column() {
    let board: Board = "xo.xo...x".parse().unwrap();
    let won = board.apply(Position::BottomCenter).unwrap();
    assert_eq!(won.state(), TerminalState::OWon);
    assert_eq!(won.state().winner(), Some(Player::O));
}

#[test]
fn test_board_serializes() {
    let board = Board::new().apply(Position::Center).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_board_serializes_as_position_string() {
    let board: Board = "x...o....".parse().unwrap();
    assert_eq!(serde_json::to_string(&board).unwrap(), r#""x...o....""#);
}

#[test]
fn test_deserialize_rejects_raw_occupancy() {
    let overlapping = r#"{"x":7,"o":7,"state":"ongoing"}"#;
    assert!(serde_json::from_str::<Board>(overlapping).is_err());

    let stale_state = r#"{"x":7,"o":24,"state":"ongoing"}"#;
    assert!(serde_json::from_str::<Board>(stale_state).is_err());
}

#[test]
fn test_deserialize_validates_position_string() {
    let err = serde_json::from_str::<Board>(r#""xxxxx....""#).unwrap_err();
    assert!(err.to_string().contains("alternating play"));
    assert!(serde_json::from_str::<Board>(r#""xo""#).is_err());
    assert!(serde_json::from_str::<Board>(r#""xo?......""#).is_err());
}

#[test]
fn test_deserialized_won_board_refuses_moves() {
    let board: Board = serde_json::from_str(r#""xxxoo....""#).unwrap();
    assert_eq!(board.state(), TerminalState::XWon);
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.apply(Position::BottomRight), Err(MoveError::GameOver));
}
