use crate::app::actions::Action;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize,
}

/// Wait up to `timeout` for a key press or resize.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(k) if k.kind == KeyEventKind::Press => Some(InputEvent::Key(k)),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    })
}

pub fn map_input_to_action(ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Key(k) => handle_key(k),
    }
}

fn handle_key(k: KeyEvent) -> Option<Action> {
    if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::GoBottom),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_input_to_action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_input_to_action(key(KeyCode::Down)), Some(Action::Down));
        assert_eq!(map_input_to_action(key(KeyCode::Char('?'))), Some(Action::ToggleHelp));
        assert_eq!(map_input_to_action(key(KeyCode::Char('x'))), None);
        assert_eq!(map_input_to_action(InputEvent::Resize), Some(Action::Resize));

        let ctrl_c = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_input_to_action(ctrl_c), Some(Action::Quit));
    }
}
