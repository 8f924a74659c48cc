//! Key-to-message mapping, modal on which widget owns the keyboard.

use model::{Mode, Msg};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(mode: Mode, key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Ctrl-C quits regardless of mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Quit);
    }
    match mode {
        // Vibe input mode - keystrokes are text
        Mode::Vibe => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Msg::ExitVibe),
            KeyCode::Backspace => Some(Msg::VibeBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Msg::VibeChar(c))
            }
            _ => None,
        },
        Mode::Navigation => match key.code {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('u') => Some(Msg::UpdateDay),
            KeyCode::Char('d') => Some(Msg::ChangeDog),
            KeyCode::Char('v') => Some(Msg::EnterVibe),
            _ => None,
        },
    }
}
