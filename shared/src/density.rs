//! Zoomed-out rendering: one glyph per 2x3 block of cells.

use crate::grid::{CellState, Grid};
use crate::render::Frame;
use crate::viewport::{Point, Window};

/// World cells covered by one glyph horizontally.
pub const BLOCK_WIDTH: usize = 2;
/// World cells covered by one glyph vertically.
pub const BLOCK_HEIGHT: usize = 3;

/// All 64 on/off combinations of a 2x3 dot matrix.
///
/// The six-dot Braille patterns number their dots down the left column and
/// then down the right one, so glyph `i` lights exactly the cells whose bit
/// is set in `i` (bit `column * 3 + row`).
pub const GLYPHS: [char; 64] = braille_table();

const fn braille_table() -> [char; 64] {
    let mut table = [' '; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = match char::from_u32(0x2800 + i as u32) {
            Some(glyph) => glyph,
            None => ' ',
        };
        i += 1;
    }
    table
}

/// Packs a block of cells into a glyph index. `block[column][row]`.
pub fn pack_block(block: [[CellState; BLOCK_HEIGHT]; BLOCK_WIDTH]) -> u8 {
    let mut index = 0u8;
    for (column, cells) in block.iter().enumerate() {
        for (row, cell) in cells.iter().enumerate() {
            if cell.is_alive() {
                index |= 1 << (column * BLOCK_HEIGHT + row);
            }
        }
    }
    index
}

pub fn glyph(index: u8) -> char {
    GLYPHS[usize::from(index & 0x3f)]
}

/// Reads the block whose top-left cell sits `offset` cells into the window.
fn read_block(grid: &Grid, window: &Window, offset: Point) -> [[CellState; BLOCK_HEIGHT]; BLOCK_WIDTH] {
    let mut block = [[CellState::Dead; BLOCK_HEIGHT]; BLOCK_WIDTH];

    for (column, cells) in block.iter_mut().enumerate() {
        for (row, cell) in cells.iter_mut().enumerate() {
            let dx = offset.x + column;
            let dy = offset.y + row;
            // A block straddling the end of a clamped window reads nothing
            // beyond it.
            if dx >= window.size.width || dy >= window.size.height {
                continue;
            }

            let x = (window.origin.x + dx) as isize;
            let y = (window.origin.y + dy) as isize;
            *cell = match (window.wrap_x, window.wrap_y) {
                (true, true) => grid.cell_wrapped(x, y),
                (true, false) => grid.cell_or_dead(x.rem_euclid(grid.width() as isize), y),
                (false, true) => grid.cell_or_dead(x, y.rem_euclid(grid.height() as isize)),
                (false, false) => grid.cell_or_dead(x, y),
            };
        }
    }

    block
}

/// Renders `window` at one glyph per 2x3 block. `cursor` is the cursor's
/// position inside the window, in world cells.
pub fn render(grid: &Grid, window: &Window, cursor: Point) -> Frame {
    let columns = window.size.width.div_ceil(BLOCK_WIDTH);
    let lines = window.size.height.div_ceil(BLOCK_HEIGHT);

    let rows = (0..lines)
        .map(|line| {
            (0..columns)
                .map(|column| {
                    let offset = Point::new(column * BLOCK_WIDTH, line * BLOCK_HEIGHT);
                    glyph(pack_block(read_block(grid, window, offset)))
                })
                .collect()
        })
        .collect();

    Frame {
        rows,
        cursor: Some(Point::new(cursor.x / BLOCK_WIDTH, cursor.y / BLOCK_HEIGHT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Alive, Dead};
    use crate::viewport::Size;

    #[test]
    fn empty_and_full_blocks() {
        assert_eq!(pack_block([[Dead; 3]; 2]), 0);
        assert_eq!(pack_block([[Alive; 3]; 2]), 63);
        assert_eq!(glyph(0), '\u{2800}');
        assert_eq!(glyph(63), '\u{283f}');
    }

    #[test]
    fn bits_are_column_major() {
        assert_eq!(pack_block([[Alive, Dead, Dead], [Dead; 3]]), 1);
        assert_eq!(pack_block([[Dead, Dead, Alive], [Dead; 3]]), 4);
        assert_eq!(pack_block([[Dead; 3], [Alive, Dead, Dead]]), 8);
        assert_eq!(pack_block([[Dead; 3], [Dead, Dead, Alive]]), 32);
    }

    #[test]
    fn glyph_table_is_distinct() {
        for (i, a) in GLYPHS.iter().enumerate() {
            for b in &GLYPHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn renders_blocks_from_the_window_origin() {
        let mut grid = Grid::new(10, 9).unwrap();
        grid.seed("##\n##\n##\n  #\n");
        let window = Window {
            origin: Point::new(0, 0),
            size: Size::new(4, 6),
            wrap_x: true,
            wrap_y: true,
        };
        let frame = render(&grid, &window, Point::new(3, 4));
        assert_eq!(frame.rows.len(), 2);
        assert_eq!(frame.rows[0], vec![glyph(63), glyph(0)]);
        assert_eq!(frame.rows[1], vec![glyph(0), glyph(1)]);
        assert_eq!(frame.cursor, Some(Point::new(1, 1)));
    }

    #[test]
    fn wrapping_window_reads_across_the_seam() {
        let mut grid = Grid::new(10, 9).unwrap();
        grid.set_cell(0, 0, Alive);
        let window = Window {
            origin: Point::new(9, 8),
            size: Size::new(4, 6),
            wrap_x: true,
            wrap_y: true,
        };
        let frame = render(&grid, &window, Point::new(0, 0));
        // (0, 0) is one column and one row into the window.
        assert_eq!(frame.rows[0][0], glyph(1 << (BLOCK_HEIGHT + 1)));
    }

    #[test]
    fn clamped_window_reads_dead_past_the_edge() {
        let mut grid = Grid::new(5, 4).unwrap();
        grid.seed("#####\n#####\n#####\n#####\n");
        let window = Window {
            origin: Point::new(0, 0),
            size: Size::new(5, 4),
            wrap_x: false,
            wrap_y: false,
        };
        let frame = render(&grid, &window, Point::new(4, 3));
        assert_eq!(frame.rows.len(), 2);
        assert_eq!(frame.rows[0].len(), 3);
        assert_eq!(frame.rows[0][2], glyph(0b000_111));
        assert_eq!(frame.rows[1][0], glyph(0b001_001));
        assert_eq!(frame.cursor, Some(Point::new(2, 1)));
    }
}
