//! Bounded model checking of the puzzle invariants with Kani.
//!
//! Every short sequence of attempted moves, legal or not, leaves the
//! engine in a state where all invariants hold.

#[cfg(kani)]
mod proofs {
    use crate::invariants::{HanoiInvariants, InvariantSet};
    use crate::{DiskCount, Peg, PuzzleEngine};

    fn any_peg() -> Peg {
        let index: usize = kani::any();
        kani::assume(index < 3);
        Peg::ALL[index]
    }

    /// Proves: attempted moves never break the invariants, and rejected
    /// ones never change the counter.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_invariants_after_attempts() {
        let mut engine = PuzzleEngine::initialize(DiskCount::default());

        for _ in 0..3 {
            let before = engine.move_count();
            let result = engine.apply_move(any_peg(), any_peg());
            match result {
                Ok(outcome) => assert_eq!(outcome.move_count, before + 1),
                Err(_) => assert_eq!(engine.move_count(), before),
            }
            assert!(HanoiInvariants::check_all(&engine).is_ok());
        }
    }
}
