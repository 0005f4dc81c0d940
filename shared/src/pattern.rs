//! Plain-text seed and dump format.
//!
//! One text line per world row. When reading, any byte other than a space
//! is a live cell. When writing, live cells are `#` and dead cells are
//! spaces, every row terminated by a newline.

use crate::grid::CellState::{Alive, Dead};
use crate::grid::Grid;

pub const ALIVE_MARKER: char = '#';
pub const DEAD_MARKER: char = ' ';

impl Grid {
    /// Replace the world contents with `pattern`.
    pub fn seed(&mut self, pattern: &str) {
        self.seed_bytes(pattern.as_bytes());
    }

    /// Replace the world contents with a raw byte pattern.
    ///
    /// Each byte is one column, so the input need not be UTF-8. Rows and
    /// columns past the world's edge are dropped; world cells the pattern
    /// does not reach stay dead.
    pub fn seed_bytes(&mut self, pattern: &[u8]) {
        self.clear();

        let (width, height) = (self.width(), self.height());
        for (y, line) in pattern.split(|&byte| byte == b'\n').take(height).enumerate() {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            for (x, &byte) in line.iter().take(width).enumerate() {
                self.set_cell(x, y, if byte == DEAD_MARKER as u8 { Dead } else { Alive });
            }
        }

        log::debug!("seeded world with {} live cells", self.population());
    }

    pub fn dump(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            for cell in row {
                out.push(if cell.is_alive() { ALIVE_MARKER } else { DEAD_MARKER });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_reproduces_matching_seed() {
        let pattern = "#   #\n ##  \n    #\n#####\n";
        let mut grid = Grid::new(5, 4).unwrap();
        grid.seed(pattern);
        assert_eq!(grid.dump(), pattern);
    }

    #[test]
    fn any_non_space_is_alive() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed("x.O\n  *");
        assert_eq!(grid.cell(0, 0), Alive);
        assert_eq!(grid.cell(1, 0), Alive);
        assert_eq!(grid.cell(2, 0), Alive);
        assert_eq!(grid.cell(0, 1), Dead);
        assert_eq!(grid.cell(2, 1), Alive);
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn oversized_pattern_is_truncated() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed("#######\n\n\n\n\n#######\n");
        assert_eq!(grid.dump(), "#####\n     \n     \n     \n     \n");
    }

    #[test]
    fn short_pattern_leaves_rest_dead() {
        let mut grid = Grid::new(6, 5).unwrap();
        grid.set_cell(5, 4, Alive);
        grid.seed("##\n#");
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.cell(5, 4), Dead);
    }

    #[test]
    fn carriage_returns_are_line_endings() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed("#  \r\n #\r\n");
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.cell(3, 0), Dead);
    }

    #[test]
    fn seed_reads_bytes_not_characters() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed_bytes(b"#\xe9#\n###\n");
        assert_eq!(grid.dump(), "###  \n###  \n     \n     \n     \n");

        // A two-byte character takes two columns.
        grid.seed("#\u{e9}#\n");
        assert_eq!(grid.dump(), "#### \n     \n     \n     \n     \n");
    }

    #[test]
    fn seeding_keeps_generation() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.step();
        grid.seed("###");
        assert_eq!(grid.generation(), 1);
    }
}
