use crate::command::Command;
use crate::density::{self, BLOCK_HEIGHT, BLOCK_WIDTH};
use crate::grid::Grid;
use crate::render::{render_direct, Frame};
use crate::viewport::{Size, Viewport};

/// Distance from a screen edge at which the cursor starts pushing the screen.
pub const SCROLL_MARGIN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub paused: bool,
    /// Consumed by the next [`Simulation::tick`].
    pub single_step_requested: bool,
    pub zoomed: bool,
}

impl Default for RunState {
    fn default() -> Self {
        RunState {
            paused: true,
            single_step_requested: false,
            zoomed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// World, viewport and run state, owned by whoever drives the loop.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    viewport: Viewport,
    run: RunState,
    screen: Size,
}

impl Simulation {
    /// `screen` is the drawable area in characters, status line excluded.
    pub fn new(world: Size, screen: Size) -> anyhow::Result<Self> {
        let grid = Grid::new(world.width, world.height)?;
        Ok(Self::with_grid(grid, screen))
    }

    pub fn with_grid(grid: Grid, screen: Size) -> Self {
        let world = Size::new(grid.width(), grid.height());
        let run = RunState::default();
        let viewport = Viewport::new(world, cells_on_screen(screen, run.zoomed), SCROLL_MARGIN);
        Simulation {
            grid,
            viewport,
            run,
            screen,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Applies one command. Editing commands are ignored unless paused.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        if let Some(direction) = command.direction() {
            self.viewport.move_cursor(direction);
            return Flow::Continue;
        }

        match command {
            Command::ToggleCell => {
                if self.run.paused {
                    let cursor = self.viewport.cursor_in_world();
                    self.grid.toggle_cell(cursor.x, cursor.y);
                }
            }
            Command::TogglePause => {
                self.run.paused = !self.run.paused;
                log::debug!("paused: {}", self.run.paused);
            }
            Command::StepOnce => self.run.single_step_requested = true,
            Command::ToggleZoom => {
                self.run.zoomed = !self.run.zoomed;
                self.viewport
                    .set_screen_size(cells_on_screen(self.screen, self.run.zoomed));
                log::debug!("zoomed: {}", self.run.zoomed);
            }
            Command::Clear => {
                if self.run.paused {
                    self.grid.clear();
                }
            }
            Command::Randomize => {
                if self.run.paused {
                    self.grid.randomize(&mut rand::rng());
                }
            }
            Command::Quit => return Flow::Quit,
            Command::NoOp
            | Command::MoveUp
            | Command::MoveDown
            | Command::MoveLeft
            | Command::MoveRight => {}
        }

        Flow::Continue
    }

    /// Advances one generation when running or when a single step was
    /// requested. Returns whether a generation was applied.
    pub fn tick(&mut self) -> bool {
        if self.run.paused && !self.run.single_step_requested {
            return false;
        }
        self.run.single_step_requested = false;
        self.grid.step();
        true
    }

    pub fn frame(&self) -> Frame {
        let window = self.viewport.window();
        let cursor = self.viewport.cursor_in_screen();
        if self.run.zoomed {
            density::render(&self.grid, &window, cursor)
        } else {
            render_direct(&self.grid, &window, cursor)
        }
    }
}

/// World cells one screen covers in the given mode.
fn cells_on_screen(screen: Size, zoomed: bool) -> Size {
    if zoomed {
        Size::new(screen.width * BLOCK_WIDTH, screen.height * BLOCK_HEIGHT)
    } else {
        screen
    }
}
