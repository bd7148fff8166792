//! Ordered disk storage for a single peg.

use crate::error::EmptyStackError;
use crate::types::{Disk, DiskCount};
use serde::{Deserialize, Serialize};

/// Disks on one peg, base first.
///
/// This is a raw container: it accepts any push. Keeping each peg strictly
/// decreasing is the engine's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegStack {
    items: Vec<Disk>,
}

impl PegStack {
    /// Creates an empty peg.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a peg holding disks `n..=1`, largest at the base.
    pub fn filled(n: DiskCount) -> Self {
        Self {
            items: (1..=n.get()).rev().map(Disk::new).collect(),
        }
    }

    /// Adds a disk to the top.
    pub fn push(&mut self, disk: Disk) {
        self.items.push(disk);
    }

    /// Removes and returns the top disk.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackError`] if the peg holds no disks.
    pub fn pop(&mut self) -> Result<Disk, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError)
    }

    /// Returns the top disk without removing it.
    pub fn peek_top(&self) -> Option<Disk> {
        self.items.last().copied()
    }

    /// Number of disks on the peg.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Disks base first.
    pub fn items(&self) -> &[Disk] {
        &self.items
    }

    /// Returns true if sizes strictly decrease from base to top.
    pub fn is_descending(&self) -> bool {
        self.items.windows(2).all(|pair| pair[0] > pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_empty_fails() {
        let mut peg = PegStack::new();
        assert_eq!(peg.pop(), Err(EmptyStackError));
        assert_eq!(peg.peek_top(), None);
    }

    #[test]
    fn test_push_pop_order() {
        let mut peg = PegStack::new();
        peg.push(Disk::new(3));
        peg.push(Disk::new(1));
        assert_eq!(peg.size(), 2);
        assert_eq!(peg.peek_top(), Some(Disk::new(1)));
        assert_eq!(peg.pop(), Ok(Disk::new(1)));
        assert_eq!(peg.items(), &[Disk::new(3)]);
    }

    #[test]
    fn test_push_does_not_check_order() {
        let mut peg = PegStack::new();
        peg.push(Disk::new(1));
        peg.push(Disk::new(2));
        assert_eq!(peg.size(), 2);
        assert!(!peg.is_descending());
    }

    #[test]
    fn test_filled_is_descending() {
        let peg = PegStack::filled(DiskCount::new(5).unwrap());
        assert_eq!(peg.size(), 5);
        assert_eq!(peg.items().first(), Some(&Disk::new(5)));
        assert_eq!(peg.peek_top(), Some(Disk::new(1)));
        assert!(peg.is_descending());
    }
}
