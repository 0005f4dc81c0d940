use crate::viewport::Direction;

/// Everything the user can ask the simulation to do, independent of how the
/// request was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Flip the cell under the cursor. Ignored while running.
    ToggleCell,
    TogglePause,
    /// Advance exactly one generation on the next tick.
    StepOnce,
    ToggleZoom,
    /// Kill every cell. Ignored while running.
    Clear,
    /// Fill the world with random cells. Ignored while running.
    Randomize,
    Quit,
    NoOp,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// The single-key binding shared by every frontend.
    pub fn from_key(key: char) -> Self {
        match key {
            'w' => Command::MoveUp,
            's' => Command::MoveDown,
            'a' => Command::MoveLeft,
            'd' => Command::MoveRight,
            ' ' => Command::ToggleCell,
            'p' => Command::TogglePause,
            'i' => Command::StepOnce,
            'z' => Command::ToggleZoom,
            'c' => Command::Clear,
            'r' => Command::Randomize,
            'q' => Command::Quit,
            _ => Command::NoOp,
        }
    }
}
