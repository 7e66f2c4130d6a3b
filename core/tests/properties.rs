use std::collections::BTreeSet;

use minegrid_core::*;
use proptest::prelude::*;

fn board_params() -> impl Strategy<Value = (Coord2, CellCount, u64)> {
    (1u8..=12, 1u8..=12).prop_flat_map(|(rows, cols)| {
        (Just((rows, cols)), 0..mult(rows, cols), any::<u64>())
    })
}

fn new_game((size, mines, seed): (Coord2, CellCount, u64)) -> Game {
    Game::new(GameConfig::new(size, mines, Some(seed)).unwrap()).unwrap()
}

fn all_coords((rows, cols): Coord2) -> Vec<Coord2> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .collect()
}

/// Neighbors computed with signed arithmetic, independent of the crate's iterator.
fn neighbors((rows, cols): Coord2, (row, col): Coord2) -> Vec<Coord2> {
    let mut found = Vec::new();
    for dr in -1i16..=1 {
        for dc in -1i16..=1 {
            let (r, c) = (i16::from(row) + dr, i16::from(col) + dc);
            if (dr, dc) != (0, 0) && r >= 0 && c >= 0 && r < i16::from(rows) && c < i16::from(cols) {
                found.push((r as Coord, c as Coord));
            }
        }
    }
    found
}

fn opened_cells(game: &Game) -> BTreeSet<Coord2> {
    all_coords(game.size())
        .into_iter()
        .filter(|&coords| game.cell(coords).unwrap().opened)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mine_count_is_exact(params in board_params()) {
        let game = new_game(params);
        let (size, mines, _) = params;

        prop_assert_eq!(game.board().mines().count(), usize::from(mines));
        prop_assert_eq!(game.total_mines(), mines);
        prop_assert_eq!(game.unmined_left(), mult(size.0, size.1) - mines);
        prop_assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn same_seed_same_board(params in board_params()) {
        let a = new_game(params);
        let b = new_game(params);

        prop_assert_eq!(a.board(), b.board());
        for coords in all_coords(a.size()) {
            prop_assert_eq!(a.cell(coords), b.cell(coords));
        }
    }

    #[test]
    fn adjacency_matches_mined_neighbors(params in board_params()) {
        let game = new_game(params);
        let board = game.board();

        for coords in all_coords(board.size()) {
            let expected = neighbors(board.size(), coords)
                .into_iter()
                .filter(|&pos| board.contains_mine(pos))
                .count();
            prop_assert_eq!(usize::from(board.adjacent_mine_count(coords)), expected);
        }
    }

    #[test]
    fn flood_fill_opens_exactly_the_zero_region_and_its_ring(params in board_params()) {
        let mut game = new_game(params);
        let size = game.size();
        let board = game.board().clone();
        let start = all_coords(size)
            .into_iter()
            .find(|&coords| !board.contains_mine(coords) && board.adjacent_mine_count(coords) == 0);
        prop_assume!(start.is_some());
        let start = start.unwrap();

        let mut expected = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(coords) = stack.pop() {
            for pos in neighbors(size, coords) {
                if expected.insert(pos) && board.adjacent_mine_count(pos) == 0 {
                    stack.push(pos);
                }
            }
        }

        prop_assert!(game.open(start));

        prop_assert_eq!(opened_cells(&game), expected.clone());
        let safe_cells = usize::from(board.safe_cell_count());
        prop_assert_eq!(usize::from(game.unmined_left()), safe_cells - expected.len());
        prop_assert_eq!(game.has_won(), expected.len() == safe_cells);
    }

    #[test]
    fn opening_every_safe_cell_wins(params in board_params()) {
        let mut game = new_game(params);
        let board = game.board().clone();

        for coords in all_coords(board.size()).into_iter().filter(|&pos| !board.contains_mine(pos)) {
            let was_opened = game.cell(coords).unwrap().opened;
            prop_assert_eq!(game.open(coords), !was_opened);
            prop_assert!(!game.has_lost());
        }

        prop_assert!(game.has_won());
        prop_assert_eq!(game.unmined_left(), 0);
        for mine in board.mines() {
            prop_assert!(!game.open(mine));
        }
        prop_assert!(game.has_won());
        prop_assert!(!game.has_lost());
    }

    #[test]
    fn opening_a_mine_loses_and_reveals_all(params in board_params(), flag_first in any::<bool>()) {
        let mut game = new_game(params);
        let mine = game.board().mines().next();
        prop_assume!(mine.is_some());
        let mine = mine.unwrap();
        let size = game.size();
        let last = (size.0 - 1, size.1 - 1);
        if flag_first && last != mine {
            game.flag(last);
        }

        prop_assert_eq!(game.try_open(mine), Ok(RevealOutcome::HitMine));

        prop_assert!(game.has_lost());
        prop_assert!(!game.has_won());
        prop_assert_eq!(opened_cells(&game).len(), all_coords(size).len());
        prop_assert!(all_coords(size).into_iter().all(|pos| !game.cell(pos).unwrap().flagged));
        prop_assert!(!game.open(last));
        prop_assert!(!game.flag(last));
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched(params in board_params(), row in 0u8..=14, col in 0u8..=14) {
        let mut game = new_game(params);
        let before = game.clone();
        let (rows, cols) = game.size();
        prop_assume!(row >= rows || col >= cols);

        prop_assert_eq!(game.try_open((row, col)), Err(GameError::OutOfBounds));
        prop_assert_eq!(game.try_flag((row, col)), Err(GameError::OutOfBounds));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn any_refused_move_leaves_the_game_untouched(
        params in board_params(),
        moves in prop::collection::vec((any::<bool>(), 0u8..12, 0u8..12), 1..40),
    ) {
        let mut game = new_game(params);

        for (is_open, row, col) in moves {
            let before = game.clone();
            let refused = if is_open {
                game.try_open((row, col)).is_err()
            } else {
                game.try_flag((row, col)).is_err()
            };
            if refused {
                prop_assert_eq!(&game, &before);
            }
        }
    }
}
