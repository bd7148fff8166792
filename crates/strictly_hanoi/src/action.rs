//! First-class action types for the puzzle.
//!
//! Moves are domain events, not side effects. They name the player's intent
//! and can be checked for legality before anything changes.

use crate::types::Peg;
use serde::{Deserialize, Serialize};

/// A transfer of the top disk from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg the disk is taken from.
    pub origin: Peg,
    /// Peg the disk is placed on.
    pub dest: Peg,
}

impl Move {
    /// Creates a new move.
    pub fn new(origin: Peg, dest: Peg) -> Self {
        Self { origin, dest }
    }

    /// Returns the origin peg.
    pub fn origin(&self) -> Peg {
        self.origin
    }

    /// Returns the destination peg.
    pub fn dest(&self) -> Peg {
        self.dest
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin.label(), self.dest.label())
    }
}

/// What a successfully applied move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Move counter after the move.
    pub move_count: u32,
    /// Whether the puzzle is now solved.
    pub solved: bool,
}
