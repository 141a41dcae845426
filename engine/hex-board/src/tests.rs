use super::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

fn board_with(size: usize, red: &[(usize, usize)], blue: &[(usize, usize)]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &(row, col) in red {
        board.place(c(row, col), Color::Red).unwrap();
    }
    for &(row, col) in blue {
        board.place(c(row, col), Color::Blue).unwrap();
    }
    board
}

#[test]
fn test_initial_board() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    assert_eq!(board.stones(), 0);
    assert!(!board.is_full());
    assert_eq!(board.winner(), None);
    assert_eq!(board.hash_code(), 0);
    assert!(board.cells().iter().all(|cell| *cell == Color::Empty));
}

#[test]
fn test_invalid_size() {
    assert_eq!(
        Board::new(0),
        Err(BoardError::InvalidSize { size: 0, max: MAX_SIZE })
    );
    assert!(Board::new(MAX_SIZE + 1).is_err());
    assert!(Board::new(MAX_SIZE).is_ok());
}

#[test]
fn test_make_move_returns_new_board() {
    let board = Board::new(3).unwrap();
    let next = board.make_move(c(1, 1), Color::Red).unwrap();

    assert_eq!(board.get(c(1, 1)).unwrap(), Color::Empty);
    assert_eq!(next.get(c(1, 1)).unwrap(), Color::Red);
    assert!(board.is_empty(c(1, 1)).unwrap());
    assert!(!next.is_empty(c(1, 1)).unwrap());
    assert_eq!(next.stones(), 1);
}

#[test]
fn test_make_move_on_occupied_cell_fails() {
    let board = Board::new(3).unwrap().make_move(c(0, 2), Color::Blue).unwrap();

    assert_eq!(
        board.make_move(c(0, 2), Color::Red),
        Err(BoardError::Occupied(c(0, 2)))
    );
    assert_eq!(
        board.make_move(c(0, 2), Color::Blue),
        Err(BoardError::Occupied(c(0, 2)))
    );
}

#[test]
fn test_out_of_range_coordinates() {
    let mut board = Board::new(3).unwrap();
    let outside = c(3, 0);

    assert_eq!(
        board.get(outside),
        Err(BoardError::OutOfRange { coord: outside, size: 3 })
    );
    assert!(board.is_empty(c(0, 7)).is_err());
    assert!(board.place(outside, Color::Red).is_err());
    assert!(!board.contains(outside));
    assert!(board.contains(c(2, 2)));
}

#[test]
fn test_placing_empty_is_rejected() {
    let mut board = Board::new(2).unwrap();
    assert_eq!(board.place(c(0, 0), Color::Empty), Err(BoardError::EmptyColor));
    assert_eq!(board.stones(), 0);
}

#[test]
fn test_possible_moves_row_major() {
    let board = board_with(2, &[(0, 1)], &[]);
    assert_eq!(board.possible_moves(), vec![c(0, 0), c(1, 0), c(1, 1)]);

    let full = board_with(2, &[(0, 0), (0, 1)], &[(1, 0), (1, 1)]);
    assert!(full.possible_moves().is_empty());
    assert!(full.is_full());
}

#[test]
fn test_neighbors() {
    let board = Board::new(3).unwrap();

    let mut center: Vec<_> = board.neighbors(c(1, 1)).collect();
    center.sort();
    assert_eq!(
        center,
        vec![c(0, 1), c(0, 2), c(1, 0), c(1, 2), c(2, 0), c(2, 1)]
    );

    let mut corner: Vec<_> = board.neighbors(c(0, 0)).collect();
    corner.sort();
    assert_eq!(corner, vec![c(0, 1), c(1, 0)]);
}

#[test]
fn test_borders() {
    let board = Board::new(3).unwrap();
    assert_eq!(board.source_coords(Color::Red), vec![c(0, 0), c(0, 1), c(0, 2)]);
    assert_eq!(board.target_coords(Color::Red), vec![c(2, 0), c(2, 1), c(2, 2)]);
    assert_eq!(board.source_coords(Color::Blue), vec![c(0, 0), c(1, 0), c(2, 0)]);
    assert_eq!(board.target_coords(Color::Blue), vec![c(0, 2), c(1, 2), c(2, 2)]);
    assert!(board.source_coords(Color::Empty).is_empty());
}

#[test]
fn test_single_cell_board() {
    let board = Board::new(1).unwrap();
    assert_eq!(board.make_move(c(0, 0), Color::Red).unwrap().winner(), Some(Color::Red));
    assert_eq!(board.make_move(c(0, 0), Color::Blue).unwrap().winner(), Some(Color::Blue));
}

#[test]
fn test_two_by_two_red_connection() {
    // (0,1) touches (1,0) through the short diagonal
    let board = board_with(2, &[(0, 1)], &[]);
    assert_eq!(board.winner(), None);

    let board = board.make_move(c(1, 0), Color::Red).unwrap();
    assert_eq!(board.winner(), Some(Color::Red));
    assert!(board.has_won(Color::Red));
    assert!(!board.has_won(Color::Blue));
}

#[test]
fn test_two_by_two_long_diagonal_is_not_connected() {
    let board = board_with(2, &[(0, 0), (1, 1)], &[]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_three_by_three_red_path() {
    // a  . R .
    //  b  B R B
    //   c  R . .
    let board = board_with(3, &[(0, 1), (1, 1), (2, 0)], &[(1, 0), (1, 2)]);
    assert_eq!(board.winner(), Some(Color::Red));
}

#[test]
fn test_three_by_three_blue_path() {
    // a  R . B
    //  b  . B R
    //   c  B . .
    let board = board_with(3, &[(0, 0), (1, 2)], &[(2, 0), (1, 1), (0, 2)]);
    assert_eq!(board.winner(), Some(Color::Blue));

    let straight = board_with(3, &[], &[(1, 0), (1, 1), (1, 2)]);
    assert_eq!(straight.winner(), Some(Color::Blue));
}

#[test]
fn test_blocked_path_has_no_winner() {
    // Red column broken by a blue stone
    let board = board_with(3, &[(0, 0), (2, 0)], &[(1, 0)]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_full_boards_have_exactly_one_winner() {
    for seed in 0..40 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let size = 1 + (seed as usize % 7);
        let mut board = Board::new(size).unwrap();

        let mut moves = board.possible_moves();
        moves.shuffle(&mut rng);
        let mut color = Color::Red;
        for mv in moves {
            board.place(mv, color).unwrap();
            color = color.opposite();
        }

        assert!(board.is_full());
        let red = board.has_won(Color::Red);
        let blue = board.has_won(Color::Blue);
        assert!(red ^ blue, "exactly one winner expected (seed={seed})");
        assert!(board.winner().is_some(), "full board must have a winner (seed={seed})");
    }
}

#[test]
fn test_random_games_invariants() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::new(5).unwrap();
        let mut color = Color::Red;
        let mut first_winner = None;

        let mut moves = board.possible_moves();
        moves.shuffle(&mut rng);
        for (played, mv) in moves.into_iter().enumerate() {
            board.place(mv, color).unwrap();
            color = color.opposite();

            assert_eq!(board.stones(), played + 1);
            match (first_winner, board.winner()) {
                (None, winner) => first_winner = winner,
                (Some(w), now) => assert_eq!(Some(w), now, "winner changed (seed={seed})"),
            }
        }
        assert!(first_winner.is_some());
    }
}

#[test]
fn test_hash_independent_of_move_order() {
    let a = board_with(4, &[(0, 0), (2, 3)], &[(1, 1), (3, 2)]);

    let mut b = Board::new(4).unwrap();
    b.place(c(3, 2), Color::Blue).unwrap();
    b.place(c(2, 3), Color::Red).unwrap();
    b.place(c(1, 1), Color::Blue).unwrap();
    b.place(c(0, 0), Color::Red).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn test_hash_changes_with_one_cell() {
    let base = board_with(4, &[(0, 0)], &[(1, 1)]);

    let red = base.make_move(c(2, 2), Color::Red).unwrap();
    let blue = base.make_move(c(2, 2), Color::Blue).unwrap();
    let elsewhere = base.make_move(c(2, 1), Color::Red).unwrap();

    assert_ne!(base.hash_code(), red.hash_code());
    assert_ne!(red.hash_code(), blue.hash_code());
    assert_ne!(red.hash_code(), elsewhere.hash_code());
}

#[test]
fn test_grid_roundtrip() {
    let board = board_with(3, &[(0, 1), (2, 2)], &[(1, 0)]);
    let grid = board.to_grid();

    assert_eq!(grid, vec![vec![0, 1, 0], vec![2, 0, 0], vec![0, 0, 1]]);

    let restored = Board::from_grid(&grid).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.hash_code(), board.hash_code());
}

#[test]
fn test_from_grid_rejects_bad_input() {
    assert!(matches!(
        Board::from_grid(&[vec![0, 0], vec![0]]),
        Err(BoardError::InvalidGrid(_))
    ));
    assert!(matches!(
        Board::from_grid(&[vec![0, 3], vec![0, 0]]),
        Err(BoardError::InvalidGrid(_))
    ));
    assert!(matches!(
        Board::from_grid(&[]),
        Err(BoardError::InvalidSize { .. })
    ));
}

#[test]
fn test_mirrored_board() {
    let board = board_with(3, &[(0, 1), (1, 1), (2, 0)], &[(1, 2)]);
    let mirrored = board.mirrored();

    assert_eq!(mirrored.get(c(1, 0)).unwrap(), Color::Blue);
    assert_eq!(mirrored.get(c(1, 1)).unwrap(), Color::Blue);
    assert_eq!(mirrored.get(c(0, 2)).unwrap(), Color::Blue);
    assert_eq!(mirrored.get(c(2, 1)).unwrap(), Color::Red);

    // A red win reads as a blue win from the other side
    assert_eq!(board.winner(), Some(Color::Red));
    assert_eq!(mirrored.winner(), Some(Color::Blue));

    assert_eq!(mirrored.mirrored(), board);
}

#[test]
fn test_move_between() {
    let before = board_with(3, &[(0, 0)], &[]);
    let after = before.make_move(c(2, 1), Color::Blue).unwrap();

    assert_eq!(Board::move_between(&before, &after).unwrap(), c(2, 1));
    assert_eq!(
        Board::move_between(&before, &before),
        Err(BoardError::NotOneMoveApart(0))
    );

    let two_later = after.make_move(c(1, 1), Color::Red).unwrap();
    assert_eq!(
        Board::move_between(&before, &two_later),
        Err(BoardError::NotOneMoveApart(2))
    );

    let other_size = Board::new(4).unwrap();
    assert_eq!(
        Board::move_between(&before, &other_size),
        Err(BoardError::SizeMismatch(3, 4))
    );
}

#[test]
fn test_display_dump() {
    let board = board_with(3, &[(0, 1)], &[(2, 2)]);
    let expected = "   0 1 2\na  . R .\n b  . . .\n  c  . . B\n";
    assert_eq!(board.to_string(), expected);
}
