//! History consistency invariant: the pegs are exactly what the history built.

use super::Invariant;
use crate::{PegStack, PuzzleEngine};

/// Invariant: replaying the move history from the initial layout reproduces
/// the current pegs, and the move counter equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<PuzzleEngine> for HistoryConsistentInvariant {
    fn holds(engine: &PuzzleEngine) -> bool {
        if engine.history().len() != engine.move_count() as usize {
            return false;
        }

        let mut pegs = [
            PegStack::filled(engine.disk_count()),
            PegStack::new(),
            PegStack::new(),
        ];

        for mov in engine.history() {
            let Ok(disk) = pegs[mov.origin.index()].pop() else {
                return false;
            };
            pegs[mov.dest.index()].push(disk);
        }

        pegs == engine.pegs
    }

    fn description() -> &'static str {
        "Pegs match the replayed move history"
    }
}
