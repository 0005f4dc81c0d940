use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::command::Command;

/// Translates a terminal key press into a simulation command.
pub fn command_for(key: &KeyEvent) -> Command {
    // Some platforms report releases and repeats as separate events.
    if key.kind != KeyEventKind::Press {
        return Command::NoOp;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char(ch) => Command::from_key(ch),
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Esc => Command::Quit,
        _ => Command::NoOp,
    }
}
