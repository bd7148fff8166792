//! Optimal solution for the three-peg puzzle.

use crate::action::Move;
use crate::types::{DiskCount, Peg};
use tracing::instrument;

/// Returns the shortest move sequence taking every disk from Left to Right.
///
/// The sequence has exactly `2^N - 1` moves.
#[instrument]
pub fn solve(disk_count: DiskCount) -> Vec<Move> {
    let mut moves = Vec::with_capacity(disk_count.minimum_moves() as usize);
    transfer(
        disk_count.get(),
        Peg::Left,
        Peg::Right,
        Peg::Middle,
        &mut moves,
    );
    moves
}

/// Moves the top `k` disks from `from` to `to`, parking on `via`.
fn transfer(k: u8, from: Peg, to: Peg, via: Peg, moves: &mut Vec<Move>) {
    if k == 0 {
        return;
    }
    transfer(k - 1, from, via, to, moves);
    moves.push(Move::new(from, to));
    transfer(k - 1, via, to, from, moves);
}
