//! Bounded model checking of the placement transition with Kani.

#[cfg(kani)]
mod proofs {
    use crate::{BoardInvariants, BoardSize, GameState, InvariantSet, Occupant};

    /// Any placement on a 2x2 board keeps every board invariant and either
    /// fills exactly the chosen cell or leaves the state untouched.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_two_placements_on_small_board() {
        let Ok(size) = BoardSize::new(2) else {
            return;
        };
        let start = GameState::new(size);

        let (x1, y1): (usize, usize) = (kani::any(), kani::any());
        let (x2, y2): (usize, usize) = (kani::any(), kani::any());
        kani::assume(x1 < 2 && y1 < 2 && x2 < 2 && y2 < 2);

        let Ok(first) = start.place_at(x1, y1) else {
            panic!("in-bounds placement must not error");
        };
        let first = first.into_state();
        assert!(BoardInvariants::check_all(&first).is_ok());

        let Ok(second) = first.place_at(x2, y2) else {
            panic!("in-bounds placement must not error");
        };
        if (x1, y1) == (x2, y2) {
            assert!(!second.is_accepted());
            assert!(second.state() == &first);
        } else {
            assert!(second.is_accepted());
            assert!(second.state().occupant_at(x2, y2).ok() != Some(Occupant::Empty));
        }
    }
}
