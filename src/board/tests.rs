use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Ai.opponent(), Mark::Human);
    assert_eq!(Mark::Human.opponent(), Mark::Ai);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 2);
    assert_eq!(pos.row, 3);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 3); // Center
    assert_eq!(pos.to_index(), 3 * 6 + 3);
    assert_eq!(pos.to_index(), 21);

    let pos2 = Pos::from_index(21);
    assert_eq!(pos2.row, 3);
    assert_eq!(pos2.col, 3);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(Pos::is_valid(2, 3));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 6);
    assert_eq!(TOTAL_CELLS, 36);
    assert_eq!(WIN_LENGTH, 4);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new();
    let pos = Pos::new(2, 2);

    assert!(board.is_empty(pos));
    board.place(pos, Mark::Ai);
    assert_eq!(board.get(pos), Mark::Ai);
    assert!(!board.is_empty(pos));

    board.clear(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_available_moves_row_major() {
    let mut board = Board::new();
    assert_eq!(board.available_moves().len(), 36);

    board.place(Pos::new(0, 0), Mark::Human);
    let moves = board.available_moves();
    assert_eq!(moves.len(), 35);
    assert_eq!(moves[0], Pos::new(0, 1));
    assert_eq!(*moves.last().unwrap(), Pos::new(5, 5));

    // Row-major: strictly increasing indices
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        let mark = if idx % 2 == 0 { Mark::Ai } else { Mark::Human };
        board.place(Pos::from_index(idx), mark);
    }
    assert!(board.is_full());
    assert!(board.available_moves().is_empty());
    assert_eq!(board.mark_count(), 36);
}

#[test]
fn test_board_key() {
    let mut board = Board::new();
    assert_eq!(board.key(), "_".repeat(36));

    board.place(Pos::new(0, 0), Mark::Human);
    board.place(Pos::new(0, 1), Mark::Ai);
    let key = board.key();
    assert_eq!(key.len(), 36);
    assert!(key.starts_with("XO__"));
}

#[test]
fn test_board_key_distinguishes_reflections() {
    // Symmetric positions are distinct keys on purpose
    let mut a = Board::new();
    a.place(Pos::new(0, 0), Mark::Ai);
    let mut b = Board::new();
    b.place(Pos::new(0, 5), Mark::Ai);
    assert_ne!(a.key(), b.key());
}

#[test]
fn test_board_equality() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place(Pos::new(2, 3), Mark::Ai);
    b.place(Pos::new(2, 3), Mark::Ai);
    assert_eq!(a, b);

    b.place(Pos::new(4, 4), Mark::Human);
    assert_ne!(a, b);
}
