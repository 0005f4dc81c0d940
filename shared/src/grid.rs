use crate::grid::CellState::{Alive, Dead};
use anyhow::Context;
use rand::Rng;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// A toroidal world of fixed dimensions.
///
/// The grid owns two equally sized buffers: `cells` holds the current
/// generation and `next` is scratch space that [`Grid::step`] writes into
/// before the two swap roles.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
    next: Vec<Vec<CellState>>,
    generation: u64,
}

impl Grid {
    /// Allocates both generation buffers, reporting allocation failure
    /// instead of aborting.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");

        let cells = allocate(width, height).context("allocating world buffer")?;
        let next = allocate(width, height).context("allocating scratch buffer")?;
        log::debug!("allocated {width}x{height} world");

        Ok(Grid {
            width,
            height,
            cells,
            next,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    /// Reads a cell. Coordinates must already be inside the world.
    pub fn cell(&self, x: usize, y: usize) -> CellState {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside world");
        self.cells[y][x]
    }

    /// Reads a cell, wrapping both coordinates around the torus.
    pub fn cell_wrapped(&self, x: isize, y: isize) -> CellState {
        let col = x.rem_euclid(self.width as isize) as usize;
        let row = y.rem_euclid(self.height as isize) as usize;
        self.cells[row][col]
    }

    /// Reads a cell, treating anything outside the world as dead.
    pub fn cell_or_dead(&self, x: isize, y: isize) -> CellState {
        if x < 0 || y < 0 {
            return Dead;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return Dead;
        }
        self.cells[y][x]
    }

    /// Writes a cell directly.
    ///
    /// Editing is only meaningful while the simulation is paused; callers
    /// are expected to enforce that.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside world");
        self.cells[y][x] = state;
    }

    /// Flips a cell. Same precondition as [`Grid::set_cell`].
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let state = self.cell(x, y).toggled();
        self.set_cell(x, y, state);
    }

    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Dead);
        }
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(0.5) { Alive } else { Dead };
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    /// Advance the grid by one generation.
    ///
    /// Returns whether any cell changed. The generation counter advances
    /// either way.
    pub fn step(&mut self) -> bool {
        let mut changed = false;

        for row in 0..self.height {
            for col in 0..self.width {
                let alive_neighbors = self.alive_neighbors(col, row);
                let current = self.cells[row][col];

                let next = match (current, alive_neighbors) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
                changed |= next != current;
                self.next[row][col] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        changed
    }

    /// Count the number of alive neighbors of a cell on the torus.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let neighbor = self.cell_wrapped(x as isize + dx, y as isize + dy);
                if neighbor == Alive {
                    count += 1;
                }
            }
        }

        count
    }
}

fn allocate(width: usize, height: usize) -> anyhow::Result<Vec<Vec<CellState>>> {
    let mut rows = Vec::new();
    rows.try_reserve_exact(height)
        .with_context(|| format!("reserving {height} rows"))?;

    for _ in 0..height {
        let mut row = Vec::new();
        row.try_reserve_exact(width)
            .with_context(|| format!("reserving row of {width} cells"))?;
        row.resize(width, Dead);
        rows.push(row);
    }

    Ok(rows)
}
