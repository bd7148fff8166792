//! Board geometry used for hit-testing pointer gestures.
//!
//! Coordinates grow right and down, like screen pixels or terminal cells.
//! Disks sit on a common base line and are centered on their peg.

use crate::stack::PegStack;
use crate::types::{Disk, Peg};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns true if `point` lies inside or on the edge.
    pub fn contains(&self, point: Point) -> bool {
        (self.x..=self.x + self.width).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }
}

/// Where pegs and disks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardLayout {
    /// Center x of the left peg.
    first_peg_x: i32,
    /// Distance between neighbouring peg centers.
    peg_spacing: i32,
    /// y of the line the bottom disk rests on.
    base_y: i32,
    /// Height of every disk.
    disk_height: i32,
    /// Width per unit of disk size.
    unit_width: i32,
    /// Horizontal distance from a peg center that still counts as a drop on it.
    capture_radius: i32,
}

impl BoardLayout {
    /// Creates a layout.
    pub const fn new(
        first_peg_x: i32,
        peg_spacing: i32,
        base_y: i32,
        disk_height: i32,
        unit_width: i32,
        capture_radius: i32,
    ) -> Self {
        Self {
            first_peg_x,
            peg_spacing,
            base_y,
            disk_height,
            unit_width,
            capture_radius,
        }
    }

    /// The 600x350 canvas: pegs at x = 100, 300, 500, disks 20 tall and
    /// 20 wide per size unit, drops accepted within 50 of a peg.
    pub const fn classic() -> Self {
        Self::new(100, 200, 350, 20, 20, 50)
    }

    /// Center x of a peg.
    pub fn peg_center_x(&self, peg: Peg) -> i32 {
        self.first_peg_x + peg.index() as i32 * self.peg_spacing
    }

    /// Rendered width of a disk.
    pub fn disk_width(&self, disk: Disk) -> i32 {
        self.unit_width * i32::from(disk.size())
    }

    /// Bounds of `disk` resting at `level` (0 = base) on `peg`.
    pub fn disk_bounds(&self, peg: Peg, level: usize, disk: Disk) -> Rect {
        let width = self.disk_width(disk);
        let x = self.peg_center_x(peg) - width / 2;
        let y = self.base_y - (level as i32 + 1) * self.disk_height;
        Rect::new(x, y, width, self.disk_height)
    }

    /// Bounds of the top disk on a peg, or `None` if it is empty.
    pub fn top_disk_bounds(&self, peg: Peg, stack: &PegStack) -> Option<Rect> {
        let disk = stack.peek_top()?;
        Some(self.disk_bounds(peg, stack.size() - 1, disk))
    }

    /// The single peg whose capture zone holds `x`.
    ///
    /// Returns `None` when no zone, or more than one, contains `x`.
    #[instrument(skip(self))]
    pub fn capture_peg(&self, x: i32) -> Option<Peg> {
        let mut hits = Peg::iter()
            .filter(|peg| (x - self.peg_center_x(*peg)).abs() <= self.capture_radius);

        match (hits.next(), hits.next()) {
            (Some(peg), None) => Some(peg),
            _ => None,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::classic()
    }
}
