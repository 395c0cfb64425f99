//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, COARSE_STEPS};

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Right | KeyCode::Char('+' | '=' | 'l') => app.nudge(1),
        KeyCode::Left | KeyCode::Char('-' | 'h') => app.nudge(-1),
        KeyCode::PageUp => app.nudge(COARSE_STEPS),
        KeyCode::PageDown => app.nudge(-COARSE_STEPS),
        KeyCode::Char('1') => app.switch_preset("default"),
        KeyCode::Char('2') => app.switch_preset("calm"),
        KeyCode::Char('3') => app.switch_preset("gale"),
        KeyCode::Char('4') => app.switch_preset("overheat"),
        KeyCode::Char('d') => app.reset(),
        _ => {}
    }
}
