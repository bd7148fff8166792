//! Board rendering and the mapping between terminal cells and board geometry.
//!
//! The board geometry works in half-cell units. A mouse position maps to the
//! center of its cell, and pegs stand on cell centers too. A rectangle is
//! drawn over exactly the cells whose centers it contains, so what is drawn
//! is what the pointer can hit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use strictly_hanoi::{BoardLayout, Disk, DiskCount, InteractionController, Peg, Point};

/// Board units per terminal cell, on both axes.
const UNITS_PER_CELL: i32 = 2;

/// Pastel colors, one per disk size.
const DISK_COLORS: [Color; 8] = [
    Color::Rgb(0xFF, 0xB3, 0xB3),
    Color::Rgb(0xB3, 0xFF, 0xB3),
    Color::Rgb(0xB3, 0xE5, 0xFF),
    Color::Rgb(0xFF, 0xFF, 0xB3),
    Color::Rgb(0xFF, 0xDA, 0xB9),
    Color::Rgb(0xE6, 0xB3, 0xFF),
    Color::Rgb(0xFF, 0xC0, 0xCB),
    Color::Rgb(0xB3, 0xFF, 0xFF),
];

/// Wood color for pegs and the base.
const PEG_COLOR: Color = Color::Rgb(0xC8, 0xA6, 0x7A);

/// Fits a board for `disk_count` disks into `area`.
///
/// Each peg gets a third of the width. Disks grow by two cells per size
/// step when there is room, up to six.
pub fn fit_layout(area: Rect, disk_count: DiskCount) -> BoardLayout {
    let column = (i32::from(area.width) / 3).max(3);
    let n = i32::from(disk_count.get());
    let half_width_per_size = ((column - 2) / (2 * n)).clamp(1, 3);
    let first_peg = i32::from(area.x) + column / 2;
    let base_row = i32::from(area.y) + i32::from(area.height).max(1) - 1;

    BoardLayout::new(
        first_peg * UNITS_PER_CELL + UNITS_PER_CELL / 2,
        column * UNITS_PER_CELL,
        base_row * UNITS_PER_CELL,
        UNITS_PER_CELL,
        2 * half_width_per_size * UNITS_PER_CELL,
        (column / 2 - 1).max(1) * UNITS_PER_CELL,
    )
}

/// Board coordinates of the center of a terminal cell.
pub fn cell_to_point(column: u16, row: u16) -> Point {
    Point::new(
        i32::from(column) * UNITS_PER_CELL + UNITS_PER_CELL / 2,
        i32::from(row) * UNITS_PER_CELL + UNITS_PER_CELL / 2,
    )
}

/// First and last cell whose center lies in `start..=start + length`.
fn cell_range(start: i32, length: i32) -> (i32, i32) {
    (
        start.div_euclid(UNITS_PER_CELL),
        (start + length - 1).div_euclid(UNITS_PER_CELL),
    )
}

/// Cell span `(x, y, width, height)` covered by a board rectangle.
fn to_cells(rect: strictly_hanoi::Rect) -> (i32, i32, i32, i32) {
    let (first_col, last_col) = cell_range(rect.x, rect.width);
    let (first_row, last_row) = cell_range(rect.y, rect.height);
    (
        first_col,
        first_row,
        last_col - first_col + 1,
        last_row - first_row + 1,
    )
}

/// Writes `symbol` with `style` to every cell of the span that lies inside `clip`.
fn fill(buf: &mut Buffer, clip: Rect, span: (i32, i32, i32, i32), symbol: &str, style: Style) {
    let (x, y, width, height) = span;
    for row in y..y + height {
        for col in x..x + width {
            let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
                continue;
            };
            if !clip.contains((col, row).into()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

fn disk_style(disk: Disk) -> Style {
    let color = DISK_COLORS[usize::from(disk.size().saturating_sub(1)) % DISK_COLORS.len()];
    Style::default().bg(color).fg(Color::Black)
}

/// Draws one disk, with its size printed in the middle.
fn draw_disk(buf: &mut Buffer, clip: Rect, bounds: strictly_hanoi::Rect, disk: Disk, style: Style) {
    let span = to_cells(bounds);
    fill(buf, clip, span, " ", style);

    let (x, y, width, _) = span;
    let label = disk.size().to_string();
    fill(buf, clip, (x + width / 2, y, 1, 1), &label, style);
}

/// Draws pegs, resting disks, and the disk following the pointer.
pub fn draw_board(buf: &mut Buffer, area: Rect, controller: &InteractionController) {
    let layout = controller.layout();
    let engine = controller.engine();
    let n = i32::from(engine.disk_count().get());
    let base_row = layout.base_y().div_euclid(UNITS_PER_CELL);
    let wood = Style::default().fg(PEG_COLOR);

    fill(
        buf,
        area,
        (i32::from(area.x), base_row, i32::from(area.width), 1),
        "▀",
        wood,
    );

    let dragging = controller.dragged_disk_bounds().is_some();
    let active = controller.active_peg();

    for peg in Peg::ALL {
        let center = layout.peg_center_x(peg).div_euclid(UNITS_PER_CELL);
        fill(buf, area, (center, base_row - n - 1, 1, n + 1), "│", wood);

        let stack = engine.peg(peg);
        let top = stack.size().checked_sub(1);
        for (level, disk) in stack.items().iter().enumerate() {
            let is_top = Some(level) == top;
            if dragging && is_top && active == Some(peg) {
                continue;
            }
            let mut style = disk_style(*disk);
            if is_top && active == Some(peg) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            draw_disk(buf, area, layout.disk_bounds(peg, level, *disk), *disk, style);
        }
    }

    if let (Some(bounds), Some(peg)) = (controller.dragged_disk_bounds(), active)
        && let Some(disk) = engine.peg(peg).peek_top()
    {
        draw_disk(buf, area, bounds, disk, disk_style(disk).add_modifier(Modifier::BOLD));
    }
}
