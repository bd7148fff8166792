//! Core domain types for the Tower of Hanoi.

use crate::error::InvalidConfigurationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A disk, identified by its size (1 is the smallest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub const fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the size of this disk.
    pub const fn size(self) -> u8 {
        self.0
    }
}

/// One of the three fixed pegs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Starting peg.
    Left,
    /// Auxiliary peg.
    Middle,
    /// Target peg.
    Right,
}

impl Peg {
    /// All pegs, left to right.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// The peg that must hold every disk for the puzzle to be solved.
    pub const TARGET: Peg = Peg::Right;

    /// Get label for this peg (for display).
    pub fn label(self) -> &'static str {
        match self {
            Peg::Left => "Left",
            Peg::Middle => "Middle",
            Peg::Right => "Right",
        }
    }

    /// Converts the peg to its column index (0-2).
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Middle => 1,
            Peg::Right => 2,
        }
    }

    /// Creates a peg from its column index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Peg::Left),
            1 => Some(Peg::Middle),
            2 => Some(Peg::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of disks in a puzzle, validated to lie in `3..=8`.
///
/// Out-of-range values are rejected rather than clamped, so a `DiskCount`
/// in hand is always a playable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiskCount(u8);

impl DiskCount {
    /// Fewest disks a puzzle may be configured with.
    pub const MIN: u8 = 3;
    /// Most disks a puzzle may be configured with.
    pub const MAX: u8 = 8;

    /// Validates a requested disk count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigurationError`] when `n` is outside `3..=8`.
    #[instrument]
    pub fn new(n: u8) -> Result<Self, InvalidConfigurationError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(InvalidConfigurationError::out_of_range(n))
        }
    }

    /// Returns the count.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Fewest moves needed to solve a puzzle of this size (2^N - 1).
    pub const fn minimum_moves(self) -> u32 {
        (1u32 << self.0) - 1
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = InvalidConfigurationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

impl FromStr for DiskCount {
    type Err = InvalidConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n = trimmed
            .parse::<u8>()
            .map_err(|_| InvalidConfigurationError::unparseable(trimmed))?;
        Self::new(n)
    }
}

impl std::fmt::Display for DiskCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
