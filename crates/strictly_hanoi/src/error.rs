//! Error types for puzzle configuration and moves.

use crate::types::{Disk, DiskCount, Peg};

/// A requested disk count that cannot be played.
///
/// Raised at the configuration boundary before any engine exists.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidConfigurationError {
    /// The value parsed but is outside the playable range.
    #[display(
        "Only {} to {} disks are allowed (got {})",
        DiskCount::MIN,
        DiskCount::MAX,
        _0
    )]
    OutOfRange(u8),

    /// The input was not a number at all.
    #[display("Please enter a valid number (got {:?})", _0)]
    Unparseable(String),
}

impl InvalidConfigurationError {
    /// Creates an out-of-range error for `requested`.
    pub fn out_of_range(requested: u8) -> Self {
        Self::OutOfRange(requested)
    }

    /// Creates an error for input that is not a number.
    pub fn unparseable(input: impl Into<String>) -> Self {
        Self::Unparseable(input.into())
    }
}

impl std::error::Error for InvalidConfigurationError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// Origin and destination are the same peg.
    #[display("Cannot move from {} onto itself", _0)]
    SamePeg(Peg),

    /// The origin peg holds no disks.
    #[display("Peg {} is empty", _0)]
    EmptyOrigin(Peg),

    /// The moving disk is larger than the destination's top disk.
    #[display("Disk {} cannot be placed on smaller disk {}", disk, onto)]
    LargerOntoSmaller {
        /// Disk being moved.
        disk: Disk,
        /// Top disk of the destination peg.
        onto: Disk,
    },
}

impl std::error::Error for IllegalMoveError {}

/// A move left the puzzle in a state that breaks its invariants.
///
/// Never a player mistake: the engine treats it as a bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Postcondition failed: {}", _0)]
pub struct PostconditionError(pub String);

impl std::error::Error for PostconditionError {}

/// Popping from a peg with no disks.
///
/// Unreachable while the engine checks legality before every pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Pop from empty peg")]
pub struct EmptyStackError;

impl std::error::Error for EmptyStackError {}

/// Failure while replaying a recorded move sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Move {} is illegal: {}", index, error)]
pub struct ReplayError {
    /// Zero-based position of the offending move.
    pub index: usize,
    /// Why the move was rejected.
    pub error: IllegalMoveError,
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
