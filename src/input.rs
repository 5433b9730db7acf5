use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Start over after a game over
    Confirm,
    Quit,
    None,
}

pub fn command_for(ev: &KeyEvent) -> Command {
    if is_ctrl_c(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Right),
        KeyCode::Enter => Command::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(command_for(&key(KeyCode::Up)), Command::Turn(Up));
        assert_eq!(command_for(&key(KeyCode::Down)), Command::Turn(Down));
        assert_eq!(command_for(&key(KeyCode::Left)), Command::Turn(Left));
        assert_eq!(command_for(&key(KeyCode::Right)), Command::Turn(Right));
        assert_eq!(command_for(&key(KeyCode::Char('w'))), Command::Turn(Up));
        assert_eq!(command_for(&key(KeyCode::Char('A'))), Command::Turn(Left));
    }

    #[test]
    fn test_controls() {
        assert_eq!(command_for(&key(KeyCode::Enter)), Command::Confirm);
        assert_eq!(command_for(&key(KeyCode::Esc)), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Command::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('c'))), Command::None);
        assert_eq!(command_for(&key(KeyCode::Tab)), Command::None);
    }
}
