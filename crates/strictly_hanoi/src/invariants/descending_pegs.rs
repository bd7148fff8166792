//! Descending pegs invariant: no disk ever rests on a smaller one.

use super::Invariant;
use crate::PuzzleEngine;

/// Invariant: every peg is strictly decreasing from base to top.
pub struct DescendingPegsInvariant;

impl Invariant<PuzzleEngine> for DescendingPegsInvariant {
    fn holds(engine: &PuzzleEngine) -> bool {
        engine.pegs.iter().all(|peg| peg.is_descending())
    }

    fn description() -> &'static str {
        "Every peg is strictly decreasing from base to top"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, Peg};

    #[test]
    fn test_initial_layout_holds() {
        for n in 3..=8 {
            let engine = PuzzleEngine::new(n).unwrap();
            assert!(DescendingPegsInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_larger_on_smaller_violates() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        // Bypass the engine and stack disk 2 on disk 1.
        let one = engine.pegs[Peg::Left.index()].pop().unwrap();
        let two = engine.pegs[Peg::Left.index()].pop().unwrap();
        engine.pegs[Peg::Right.index()].push(one);
        engine.pegs[Peg::Right.index()].push(two);

        assert_eq!(engine.peg(Peg::Right).items(), &[Disk::new(1), Disk::new(2)]);
        assert!(!DescendingPegsInvariant::holds(&engine));
    }
}
