//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use crate::action::Move;
use crate::engine::PuzzleEngine;
use crate::error::{IllegalMoveError, PostconditionError};
use crate::invariants::{HanoiInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PostconditionError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: origin and destination differ.
pub struct DistinctPegs;

impl DistinctPegs {
    /// Rejects a move whose origin is its destination.
    pub fn check(mov: &Move) -> Result<(), IllegalMoveError> {
        if mov.origin == mov.dest {
            Err(IllegalMoveError::SamePeg(mov.origin))
        } else {
            Ok(())
        }
    }
}

/// Precondition: there is a disk to move.
pub struct OriginNotEmpty;

impl OriginNotEmpty {
    /// Rejects a move from an empty peg.
    pub fn check(mov: &Move, engine: &PuzzleEngine) -> Result<(), IllegalMoveError> {
        if engine.peg(mov.origin).is_empty() {
            Err(IllegalMoveError::EmptyOrigin(mov.origin))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the moving disk is smaller than whatever it lands on.
pub struct SmallerOntoLarger;

impl SmallerOntoLarger {
    /// Rejects covering a smaller disk. An empty destination always accepts.
    pub fn check(mov: &Move, engine: &PuzzleEngine) -> Result<(), IllegalMoveError> {
        let origin_top = engine.peg(mov.origin).peek_top();
        let dest_top = engine.peg(mov.dest).peek_top();

        match (origin_top, dest_top) {
            (Some(disk), Some(onto)) if disk > onto => {
                Err(IllegalMoveError::LargerOntoSmaller { disk, onto })
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: distinct pegs, non-empty origin, no smaller disk covered.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in the order they are reported.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &PuzzleEngine) -> Result<(), IllegalMoveError> {
        DistinctPegs::check(mov)?;
        OriginNotEmpty::check(mov, engine)?;
        SmallerOntoLarger::check(mov, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Pegs are distinct
/// - Origin is not empty
/// - No smaller disk is covered
///
/// Postconditions:
/// - Every peg stays strictly decreasing
/// - Every disk is still present exactly once
/// - History still reproduces the pegs
/// - Move counter advanced by exactly one
pub struct MoveContract;

impl Contract<PuzzleEngine, Move> for MoveContract {
    fn pre(engine: &PuzzleEngine, action: &Move) -> Result<(), IllegalMoveError> {
        LegalMove::check(action, engine)
    }

    fn post(before: &PuzzleEngine, after: &PuzzleEngine) -> Result<(), PostconditionError> {
        if after.move_count() != before.move_count() + 1 {
            return Err(PostconditionError(format!(
                "Move counter went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PostconditionError(descriptions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disk, Peg};

    #[test]
    fn test_precondition_same_peg() {
        let engine = PuzzleEngine::new(3).unwrap();
        let action = Move::new(Peg::Left, Peg::Left);
        assert_eq!(
            MoveContract::pre(&engine, &action),
            Err(IllegalMoveError::SamePeg(Peg::Left))
        );
    }

    #[test]
    fn test_precondition_empty_origin() {
        let engine = PuzzleEngine::new(3).unwrap();
        let action = Move::new(Peg::Middle, Peg::Right);
        assert_eq!(
            MoveContract::pre(&engine, &action),
            Err(IllegalMoveError::EmptyOrigin(Peg::Middle))
        );
    }

    #[test]
    fn test_precondition_larger_onto_smaller() {
        let mut engine = PuzzleEngine::new(3).unwrap();
        engine.apply_move(Peg::Left, Peg::Right).unwrap();

        let action = Move::new(Peg::Left, Peg::Right);
        assert_eq!(
            MoveContract::pre(&engine, &action),
            Err(IllegalMoveError::LargerOntoSmaller {
                disk: Disk::new(2),
                onto: Disk::new(1),
            })
        );
    }

    #[test]
    fn test_precondition_onto_empty_peg() {
        let engine = PuzzleEngine::new(3).unwrap();
        let action = Move::new(Peg::Left, Peg::Middle);
        assert!(MoveContract::pre(&engine, &action).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = PuzzleEngine::new(3).unwrap();
        let mut after = before.clone();
        after.apply_move(Peg::Left, Peg::Middle).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = PuzzleEngine::new(3).unwrap();
        let mut after = before.clone();
        after.apply_move(Peg::Left, Peg::Middle).unwrap();

        // Slip disk 2 onto disk 1 without recording it.
        let two = after.pegs[Peg::Left.index()].pop().unwrap();
        after.pegs[Peg::Middle.index()].push(two);

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.0.contains("strictly decreasing"), "{}", err);
    }

    #[test]
    fn test_postcondition_detects_skipped_count() {
        let before = PuzzleEngine::new(3).unwrap();
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
