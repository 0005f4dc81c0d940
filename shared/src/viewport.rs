//! A screen-sized window over the wrapping world that follows the cursor.
//!
//! Both axes behave identically, so the scrolling rules live on [`Axis`] and
//! the [`Viewport`] just routes each direction to the right axis.
//!
//! When the world is no larger than the screen on an axis, that axis does
//! not scroll: the visible extent shrinks to the world, the origin stays at
//! zero and the cursor's screen position is its world position.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The part of the world a renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub origin: Point,
    /// Visible extent in world cells.
    pub size: Size,
    /// Whether reads past the world edge wrap around (scrolling axis) or
    /// read as dead (clamped axis).
    pub wrap_x: bool,
    pub wrap_y: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    world: usize,
    screen: usize,
    requested_margin: usize,
    extent: usize,
    margin: usize,
    origin: usize,
    cursor_world: usize,
    cursor_screen: usize,
}

impl Axis {
    fn new(world: usize, screen: usize, margin: usize) -> Self {
        let mut axis = Axis {
            world,
            screen,
            requested_margin: margin,
            extent: 0,
            margin: 0,
            origin: 0,
            cursor_world: 0,
            cursor_screen: 0,
        };
        axis.resize(screen);
        axis
    }

    fn scrolls(&self) -> bool {
        self.world > self.screen
    }

    fn resize(&mut self, screen: usize) {
        self.screen = screen.max(1);

        if !self.scrolls() {
            self.extent = self.world;
            self.margin = 0;
            self.origin = 0;
            self.cursor_screen = self.cursor_world;
            return;
        }

        self.extent = self.screen;
        self.margin = self.requested_margin.min((self.extent - 1) / 2);
        self.cursor_screen = self.cursor_screen.min(self.extent - 1);
        self.origin = (self.cursor_world + self.world - self.cursor_screen) % self.world;
    }

    /// Move one cell towards zero. Returns whether the screen scrolled.
    fn retreat(&mut self) -> bool {
        self.cursor_world = wrap_back(self.cursor_world, self.world);

        if !self.scrolls() {
            self.cursor_screen = self.cursor_world;
            return false;
        }

        if self.cursor_screen < self.margin + 1 {
            // Slide the window under the cursor instead of moving it.
            self.origin = wrap_back(self.origin, self.world);
            true
        } else {
            self.cursor_screen -= 1;
            false
        }
    }

    /// Move one cell away from zero. Returns whether the screen scrolled.
    fn advance(&mut self) -> bool {
        self.cursor_world = wrap_forward(self.cursor_world, self.world);

        if !self.scrolls() {
            self.cursor_screen = self.cursor_world;
            return false;
        }

        if self.extent - (self.cursor_screen + 1) <= self.margin {
            self.origin = wrap_forward(self.origin, self.world);
            true
        } else {
            self.cursor_screen += 1;
            false
        }
    }

    fn is_consistent(&self) -> bool {
        (self.origin + self.cursor_screen) % self.world == self.cursor_world
            && self.cursor_screen < self.extent
    }
}

fn wrap_back(value: usize, modulus: usize) -> usize {
    if value == 0 {
        modulus - 1
    } else {
        value - 1
    }
}

fn wrap_forward(value: usize, modulus: usize) -> usize {
    if value + 1 >= modulus {
        0
    } else {
        value + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    x: Axis,
    y: Axis,
}

impl Viewport {
    /// Creates a viewport with the cursor and the screen origin at the
    /// world's top-left corner.
    pub fn new(world: Size, screen: Size, scroll_margin: usize) -> Self {
        assert!(world.width > 0 && world.height > 0, "world must not be empty");
        Viewport {
            x: Axis::new(world.width, screen.width, scroll_margin),
            y: Axis::new(world.height, screen.height, scroll_margin),
        }
    }

    pub fn screen_origin(&self) -> Point {
        Point::new(self.x.origin, self.y.origin)
    }

    /// Visible extent in world cells, after clamping to the world.
    pub fn screen_size(&self) -> Size {
        Size::new(self.x.extent, self.y.extent)
    }

    pub fn cursor_in_world(&self) -> Point {
        Point::new(self.x.cursor_world, self.y.cursor_world)
    }

    pub fn cursor_in_screen(&self) -> Point {
        Point::new(self.x.cursor_screen, self.y.cursor_screen)
    }

    /// Effective margin per axis; zero on an axis that does not scroll.
    pub fn scroll_margin(&self) -> Size {
        Size::new(self.x.margin, self.y.margin)
    }

    pub fn window(&self) -> Window {
        Window {
            origin: self.screen_origin(),
            size: self.screen_size(),
            wrap_x: self.x.scrolls(),
            wrap_y: self.y.scrolls(),
        }
    }

    /// Moves the cursor one cell, scrolling when it reaches the margin.
    /// Returns whether the screen scrolled.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let scrolled = match direction {
            Direction::Up => self.y.retreat(),
            Direction::Down => self.y.advance(),
            Direction::Left => self.x.retreat(),
            Direction::Right => self.x.advance(),
        };
        debug_assert!(self.is_consistent(), "viewport out of sync: {self:?}");
        scrolled
    }

    /// Changes how many world cells the screen covers, keeping the cursor
    /// on the same world cell.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.x.resize(screen.width);
        self.y.resize(screen.height);
        log::debug!(
            "viewport now {}x{} cells at {:?}",
            self.x.extent,
            self.y.extent,
            self.screen_origin()
        );
    }

    /// `screen_origin + cursor_in_screen == cursor_in_world` on both axes,
    /// modulo the world.
    pub fn is_consistent(&self) -> bool {
        self.x.is_consistent() && self.y.is_consistent()
    }
}
