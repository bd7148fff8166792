//! Puzzle engine: the sole authority on move legality.
//!
//! The engine is a flat validate-then-apply model. A move either completes
//! fully (pop, push, count, record) or leaves the state untouched.

use crate::action::{Move, MoveOutcome};
use crate::contracts::{Contract, MoveContract};
use crate::error::{IllegalMoveError, InvalidConfigurationError, ReplayError};
use crate::snapshot::PuzzleSnapshot;
use crate::stack::PegStack;
use crate::types::{DiskCount, Peg};
use tracing::{debug, error, info, instrument};

/// Three pegs, a move counter and the configured disk count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEngine {
    pub(crate) pegs: [PegStack; 3],
    pub(crate) disk_count: DiskCount,
    pub(crate) move_count: u32,
    pub(crate) history: Vec<Move>,
}

impl PuzzleEngine {
    /// Builds a fresh puzzle with every disk on the left peg, largest at the base.
    #[instrument]
    pub fn initialize(disk_count: DiskCount) -> Self {
        debug!("Stacking disks on the left peg");
        Self {
            pegs: [PegStack::filled(disk_count), PegStack::new(), PegStack::new()],
            disk_count,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Validates `n` and builds a fresh puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigurationError`] when `n` is outside `3..=8`.
    #[instrument]
    pub fn new(n: u8) -> Result<Self, InvalidConfigurationError> {
        Ok(Self::initialize(DiskCount::new(n)?))
    }

    /// Discards all progress and rebuilds the initial layout with the same disk count.
    #[instrument(skip(self), fields(disk_count = %self.disk_count, moves = self.move_count))]
    pub fn reset(&mut self) {
        info!("Resetting puzzle");
        *self = Self::initialize(self.disk_count);
    }

    /// Returns true if the top disk of `origin` may be placed on `dest`.
    ///
    /// Pure: never changes the puzzle.
    pub fn is_legal_move(&self, origin: Peg, dest: Peg) -> bool {
        self.check_move(origin, dest).is_ok()
    }

    /// Like [`is_legal_move`](Self::is_legal_move), but explains a rejection.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as an [`IllegalMoveError`].
    pub fn check_move(&self, origin: Peg, dest: Peg) -> Result<(), IllegalMoveError> {
        MoveContract::pre(self, &Move::new(origin, dest))
    }

    /// Moves the top disk of `origin` onto `dest`.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] and leaves the puzzle unchanged when the
    /// move is not legal.
    ///
    /// # Panics
    ///
    /// Panics if a legal move finds its origin empty, or, in debug builds,
    /// if the move breaks an invariant. Both mean the engine state was
    /// corrupted and are never reported as an illegal move.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn apply_move(&mut self, origin: Peg, dest: Peg) -> Result<MoveOutcome, IllegalMoveError> {
        let action = Move::new(origin, dest);

        if let Err(e) = MoveContract::pre(self, &action) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let disk = match self.pegs[origin.index()].pop() {
            Ok(disk) => disk,
            Err(e) => {
                error!(peg = %origin, "Legal move found no disk to pop");
                panic!("{} on {} after preconditions passed", e, origin);
            }
        };
        self.pegs[dest.index()].push(disk);
        self.move_count += 1;
        self.history.push(action);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                error!(error = %e, "Move broke the puzzle invariants");
                panic!("{} (after {})", e, action);
            }
        }

        let solved = self.is_solved();
        debug!(%disk, move_count = self.move_count, solved, "Move applied");
        if solved {
            info!(move_count = self.move_count, "Puzzle solved");
        }

        Ok(MoveOutcome {
            move_count: self.move_count,
            solved,
        })
    }

    /// Returns true if the target peg holds all N disks.
    ///
    /// Relies on disk conservation: the other pegs are then empty.
    pub fn is_solved(&self) -> bool {
        self.peg(Peg::TARGET).size() == usize::from(self.disk_count.get())
    }

    /// Number of moves applied since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Configured number of disks.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Fewest moves that solve this puzzle.
    pub fn minimum_moves(&self) -> u32 {
        self.disk_count.minimum_moves()
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Read-only view of one peg.
    pub fn peg(&self, peg: Peg) -> &PegStack {
        &self.pegs[peg.index()]
    }

    /// Owned copy of the pegs and counters for rendering.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot::new(
            [
                self.pegs[0].items().to_vec(),
                self.pegs[1].items().to_vec(),
                self.pegs[2].items().to_vec(),
            ],
            self.move_count,
            self.disk_count,
            self.is_solved(),
        )
    }

    /// Replays moves from the initial layout.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] naming the first illegal move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(disk_count: DiskCount, moves: &[Move]) -> Result<Self, ReplayError> {
        let mut engine = Self::initialize(disk_count);

        for (index, action) in moves.iter().enumerate() {
            engine
                .apply_move(action.origin, action.dest)
                .map_err(|error| ReplayError { index, error })?;
        }

        Ok(engine)
    }
}
