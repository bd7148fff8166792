//! Immutable puzzle views for rendering and logging.

use crate::types::{Disk, DiskCount, Peg};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Copy of the puzzle at one instant.
///
/// Owns its data, so holding a snapshot never borrows the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PuzzleSnapshot {
    /// Disks per peg, base first, indexed by [`Peg::index`].
    #[getter(skip)]
    pegs: [Vec<Disk>; 3],
    /// Moves applied since the last reset.
    move_count: u32,
    /// Configured number of disks.
    disk_count: DiskCount,
    /// Whether every disk is on the target peg.
    solved: bool,
}

impl PuzzleSnapshot {
    pub(crate) fn new(
        pegs: [Vec<Disk>; 3],
        move_count: u32,
        disk_count: DiskCount,
        solved: bool,
    ) -> Self {
        Self {
            pegs,
            move_count,
            disk_count,
            solved,
        }
    }

    /// Disks on one peg, base first.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Formats the pegs as a human-readable diagram, widest disk at the bottom.
    pub fn display(&self) -> String {
        let n = usize::from(self.disk_count.get());
        let column = 2 * n + 1;
        let mut rows = Vec::with_capacity(n + 1);

        for level in (0..n).rev() {
            let row = Peg::ALL
                .iter()
                .map(|peg| match self.peg(*peg).get(level) {
                    Some(disk) => {
                        let width = 2 * usize::from(disk.size()) - 1;
                        format!("{:^column$}", "=".repeat(width))
                    }
                    None => format!("{:^column$}", "|"),
                })
                .collect::<Vec<_>>()
                .join(" ");
            rows.push(row.trim_end().to_string());
        }

        let labels = Peg::ALL
            .iter()
            .map(|peg| format!("{:^column$}", peg.label()))
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(labels.trim_end().to_string());

        rows.join("\n")
    }
}
