//! Tests for the placement state machine.

use std::str::FromStr;
use strictly_go::{
    BoardErrorKind, BoardSize, Coordinate, GameState, Occupant, Player, Rejection,
};

fn board(n: usize) -> GameState {
    GameState::new(BoardSize::new(n).expect("positive size"))
}

/// Deterministic pseudo-random walk over coordinates, hitting occupied
/// cells as often as empty ones.
fn walk(size: usize, steps: usize) -> Vec<(usize, usize)> {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..steps)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let cell = (seed % (size * size) as u64) as usize;
            (cell % size, cell / size)
        })
        .collect()
}

#[test]
fn test_new_board_is_empty_for_every_size() {
    for n in 1..=19 {
        let state = board(n);
        assert_eq!(state.to_move(), Player::A);
        for y in 0..n {
            for x in 0..n {
                assert_eq!(state.occupant_at(x, y).unwrap(), Occupant::Empty);
            }
        }
    }
}

#[test]
fn test_accepted_placement_changes_exactly_one_cell() {
    let n = 5;
    let mut state = board(n);
    for (x, y) in walk(n, 60) {
        let mover = state.to_move();
        let was_empty = state.occupant_at(x, y).unwrap() == Occupant::Empty;
        let placement = state.place_at(x, y).unwrap();
        assert_eq!(placement.is_accepted(), was_empty);

        let next = placement.state();
        if was_empty {
            assert_eq!(next.occupant_at(x, y).unwrap(), Occupant::Stone(mover));
            assert_eq!(next.to_move(), mover.opponent());
            for (coord, occupant) in state.grid().cells() {
                if coord != Coordinate::new(x, y) {
                    assert_eq!(next.grid().get(coord), Some(occupant));
                }
            }
        } else {
            assert_eq!(next, &state);
        }
        state = placement.into_state();
    }
}

#[test]
fn test_rejection_is_idempotent() {
    let state = board(3).place_at(2, 1).unwrap().into_state();
    let mut current = state.clone();
    for _ in 0..10 {
        let placement = current.place_at(2, 1).unwrap();
        assert!(!placement.is_accepted());
        current = placement.into_state();
        assert_eq!(current, state);
    }
}

#[test]
fn test_turn_parity_after_k_placements() {
    let n = 4;
    let mut state = board(n);
    let mut accepted = 0;
    for y in 0..n {
        for x in 0..n {
            state = state.place_at(x, y).unwrap().into_state();
            accepted += 1;
            let expected = if accepted % 2 == 0 { Player::A } else { Player::B };
            assert_eq!(state.to_move(), expected);
        }
    }
    assert_eq!(state.stones_placed(), n * n);
    assert_eq!(state.empty_cells().count(), 0);
}

#[test]
fn test_scenario_three_by_three() {
    let state = board(3);

    let first = state.place_at(0, 0).unwrap();
    assert!(first.is_accepted());
    let state = first.into_state();
    assert_eq!(state.occupant_at(0, 0).unwrap(), Occupant::Stone(Player::A));
    assert_eq!(state.to_move(), Player::B);

    let again = state.place_at(0, 0).unwrap();
    assert!(!again.is_accepted());
    assert_eq!(again.state(), &state);
    assert!(matches!(
        again.rejection(),
        Some(Rejection::CellOccupied { .. })
    ));

    let second = state.place_at(1, 1).unwrap();
    assert!(second.is_accepted());
    let state = second.into_state();
    assert_eq!(state.occupant_at(1, 1).unwrap(), Occupant::Stone(Player::B));
    assert_eq!(state.to_move(), Player::A);
}

#[test]
fn test_scenario_single_cell() {
    let state = board(1);
    let state = state.place_at(0, 0).unwrap().into_state();
    assert_eq!(state.occupant_at(0, 0).unwrap(), Occupant::Stone(Player::A));
    for _ in 0..5 {
        let placement = state.place_at(0, 0).unwrap();
        assert!(!placement.is_accepted());
        assert_eq!(placement.state().to_move(), Player::B);
    }
}

#[test]
fn test_non_positive_sizes_fail() {
    for bad in [0, -1, -19] {
        let err = GameState::create(bad).unwrap_err();
        assert!(matches!(err.kind(), BoardErrorKind::InvalidSize(_)));
    }
    assert!(BoardSize::new(0).is_err());
    assert!("-1".parse::<BoardSize>().is_err());
    assert!("3.5".parse::<BoardSize>().is_err());
}

#[test]
fn test_oversized_board_is_refused() {
    let err = GameState::create(1 << 40).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::InvalidSize(_)));
    assert!(GameState::create(BoardSize::MAX as i64 + 1).is_err());
}

#[test]
fn test_errors_point_at_the_caller() {
    let err = BoardSize::new(0).unwrap_err();
    assert_eq!(err.file(), file!());

    let err = GameState::create(-1).unwrap_err();
    assert_eq!((err.file(), err.line()), (file!(), line!() - 1));

    let err = BoardSize::from_str("x").unwrap_err();
    assert_eq!(err.file(), file!());

    let err = board(3).place_at(3, 0).unwrap_err();
    assert_eq!(err.file(), file!());

    let err = board(3).occupant_at(0, 9).unwrap_err();
    assert_eq!(err.file(), file!());
}

#[test]
fn test_out_of_range_is_reported() {
    let state = board(3);
    let err = state.place_at(3, 1).unwrap_err();
    assert!(matches!(
        err.kind(),
        BoardErrorKind::OutOfRange { size: 3, .. }
    ));
    assert!(state.occupant_at(0, 3).is_err());
}

#[test]
fn test_prior_state_survives_later_moves() {
    let s0 = board(3);
    let s1 = s0.place_at(0, 0).unwrap().into_state();
    let s2 = s1.place_at(0, 1).unwrap().into_state();
    let _s3 = s2.place_at(0, 2).unwrap().into_state();

    assert_eq!(s0.stones_placed(), 0);
    assert_eq!(s1.stones_placed(), 1);
    assert_eq!(s1.occupant_at(0, 1).unwrap(), Occupant::Empty);
    assert_eq!(s2.occupant_at(0, 2).unwrap(), Occupant::Empty);
}

#[test]
fn test_state_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GameState>();
}
