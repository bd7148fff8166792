//! Strictly Hanoi - contract-checked Tower of Hanoi logic.
//!
//! # Architecture
//!
//! - **PegStack**: ordered disk storage for one peg, no rules of its own
//! - **PuzzleEngine**: three pegs, move counter and win condition; the only
//!   place legality is decided
//! - **InteractionController**: pointer gestures and keyboard selection
//!   translated into move attempts, with illegal drops rolled back
//! - **Contracts / Invariants**: move preconditions, and postconditions
//!   checked in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Peg, PuzzleEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = PuzzleEngine::new(3)?;
//! assert!(engine.is_legal_move(Peg::Left, Peg::Right));
//!
//! let outcome = engine.apply_move(Peg::Left, Peg::Right)?;
//! assert_eq!(outcome.move_count, 1);
//! assert!(engine.apply_move(Peg::Left, Peg::Right).is_err());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod engine;
mod error;
pub mod invariants;
mod layout;
mod snapshot;
mod solver;
mod stack;
mod types;

// Crate-level exports - Domain types
pub use types::{Disk, DiskCount, Peg};

// Crate-level exports - Actions
pub use action::{Move, MoveOutcome};

// Crate-level exports - Errors
pub use error::{
    EmptyStackError, IllegalMoveError, InvalidConfigurationError, PostconditionError, ReplayError,
};

// Crate-level exports - Engine
pub use engine::PuzzleEngine;
pub use snapshot::PuzzleSnapshot;
pub use stack::PegStack;

// Crate-level exports - Contracts
pub use contracts::{
    Contract, DistinctPegs, LegalMove, MoveContract, OriginNotEmpty, SmallerOntoLarger,
};

// Crate-level exports - Interaction
pub use controller::{Drag, DragState, DropOutcome, InteractionController, RollbackReason};
pub use layout::{BoardLayout, Point, Rect};

// Crate-level exports - Solver
pub use solver::solve;
