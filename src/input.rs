use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cell::Dir;
use crate::level::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    SetDifficulty(Difficulty),
    Quit,
}

/// Maps a key event to a game command. Releases are ignored; auto-repeat
/// counts as another press.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {}
        KeyEventKind::Release => return None,
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Move(Dir::Up)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Move(Dir::Right)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Move(Dir::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Move(Dir::Left)),
        KeyCode::Char('1') => Some(Command::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SetDifficulty(Difficulty::Hard)),
        _ => None,
    }
}
