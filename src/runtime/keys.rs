//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, App, PromptEdit};
use crate::player::MediaElement;

/// Route a key press to the open prompt or, failing that, the player.
pub fn dispatch_key<M: MediaElement>(key: &KeyEvent, app: &mut App<M>) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if is_interrupt(key) {
        app.should_quit = true;
        return;
    }
    if app.drop_zone.active {
        if let Some(edit) = prompt_edit_for(key) {
            app.edit_prompt(edit);
        }
    } else if let Some(action) = action_for(key) {
        app.apply(action);
    }
}

/// Ctrl+C quits from anywhere, prompt included.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Player shortcut for `key`.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(' ') => Action::PlayPause,
        KeyCode::Right => Action::Next,
        KeyCode::Left => Action::Previous,
        KeyCode::Up => Action::VolumeUp,
        KeyCode::Down => Action::VolumeDown,
        KeyCode::Char('s') => Action::ToggleShuffle,
        KeyCode::Char('r') => Action::CycleRepeat,
        KeyCode::Char('m') => Action::ToggleMute,
        KeyCode::Char('x') => Action::Stop,
        KeyCode::Char('H') => Action::ScrubBack,
        KeyCode::Char('L') => Action::ScrubForward,
        KeyCode::Char('o') => Action::OpenPicker,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Edit for the focused path prompt.
pub fn prompt_edit_for(key: &KeyEvent) -> Option<PromptEdit> {
    match key.code {
        KeyCode::Esc => Some(PromptEdit::Cancel),
        KeyCode::Enter => Some(PromptEdit::Submit),
        KeyCode::Backspace => Some(PromptEdit::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PromptEdit::Insert(c))
        }
        _ => None,
    }
}
