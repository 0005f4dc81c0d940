use crate::grid::Grid;
use crate::pattern::{ALIVE_MARKER, DEAD_MARKER};
use crate::simulation::Simulation;
use crate::viewport::{Point, Window};

/// A rendered screen: glyph rows plus where the cursor glyph sits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub rows: Vec<Vec<char>>,
    pub cursor: Option<Point>,
}

#[cfg(test)]
impl Frame {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn line(&self, row: usize) -> String {
        self.rows[row].iter().collect()
    }
}

/// Renders `window` at one character per cell.
pub fn render_direct(grid: &Grid, window: &Window, cursor: Point) -> Frame {
    let rows = (0..window.size.height)
        .map(|row| {
            let y = (window.origin.y + row) % grid.height();
            (0..window.size.width)
                .map(|column| {
                    let x = (window.origin.x + column) % grid.width();
                    if grid.cell(x, y).is_alive() {
                        ALIVE_MARKER
                    } else {
                        DEAD_MARKER
                    }
                })
                .collect()
        })
        .collect();

    Frame {
        rows,
        cursor: Some(cursor),
    }
}

/// `uiw(..)` is the cursor's world cell, `uis[..]` its offset from the
/// screen origin and `siw{..}` the origin itself, all in world cells. When
/// zoomed, the highlighted glyph sits at `uis` divided by the 2x3 block.
pub fn status_line(simulation: &Simulation) -> String {
    let viewport = simulation.viewport();
    let in_world = viewport.cursor_in_world();
    let in_screen = viewport.cursor_in_screen();
    let origin = viewport.screen_origin();
    let run = simulation.run_state();

    let mut line = format!(
        "uiw({}, {}) uis[{}, {}] siw{{{}, {}}}",
        in_world.x, in_world.y, in_screen.x, in_screen.y, origin.x, origin.y
    );
    if run.paused {
        line.push_str(" PAUSED");
    }
    if run.zoomed {
        line.push_str(" ZOOM");
    }
    line.push_str(&format!(
        " {} pop {}",
        simulation.grid().generation(),
        simulation.grid().population()
    ));
    line
}
