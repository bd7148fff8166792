//! Output of the `solve` subcommand.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use strictly_hanoi::{DiskCount, Move, PuzzleEngine, PuzzleSnapshot, ReplayError, solve};
use tracing::{info, instrument};

/// The optimal solution for one disk count, checked by replaying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct SolveReport {
    /// Number of disks solved for.
    disks: DiskCount,
    /// Moves in order.
    moves: Vec<Move>,
    /// Puzzle after the last move.
    final_state: PuzzleSnapshot,
}

impl SolveReport {
    /// Solves `disks` and replays the moves through the engine.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] if the solver produced an illegal move.
    #[instrument]
    pub fn compute(disks: DiskCount) -> Result<Self, ReplayError> {
        let moves = solve(disks);
        let engine = PuzzleEngine::replay(disks, &moves)?;
        info!(moves = moves.len(), solved = engine.is_solved(), "Solution replayed");
        Ok(Self::new(disks, moves, engine.snapshot()))
    }

    /// Numbered move list followed by the final diagram.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, mov) in self.moves.iter().enumerate() {
            out.push_str(&format!("{:>4}. {}\n", i + 1, mov));
        }
        out.push('\n');
        out.push_str(&self.final_state.display());
        out.push_str(&format!(
            "\n\nSolved {} disks in {} moves\n",
            self.disks,
            self.moves.len()
        ));
        out
    }
}
