//! Disk conservation invariant: disks are moved, never created or destroyed.

use super::Invariant;
use crate::PuzzleEngine;

/// Invariant: the pegs together hold each disk `1..=N` exactly once.
///
/// The solved check only counts disks on the target peg, which is sound
/// only while this holds.
pub struct DiskConservationInvariant;

impl Invariant<PuzzleEngine> for DiskConservationInvariant {
    fn holds(engine: &PuzzleEngine) -> bool {
        let n = engine.disk_count().get();
        let mut seen = vec![false; usize::from(n)];

        for disk in engine.pegs.iter().flat_map(|peg| peg.items()) {
            let size = disk.size();
            if size == 0 || size > n {
                return false;
            }
            let slot = &mut seen[usize::from(size - 1)];
            if *slot {
                return false;
            }
            *slot = true;
        }

        seen.iter().all(|present| *present)
    }

    fn description() -> &'static str {
        "Pegs hold each disk exactly once"
    }
}

impl DiskConservationInvariant {
    /// Total disks across all pegs.
    pub fn total(engine: &PuzzleEngine) -> usize {
        engine.pegs.iter().map(|peg| peg.size()).sum()
    }
}
