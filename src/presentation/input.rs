use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Editing => Self::handle_editing_mode(app, key),
            AppMode::Symptoms => Self::handle_symptoms_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Confirmed => Self::handle_confirmed_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    app.submit();
                    return;
                }
                KeyCode::Char('r') => {
                    app.start_new_booking();
                    return;
                }
                _ => {}
            }
        }

        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                app.focus_previous();
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                app.focus_next();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if app.focus.is_choice() {
                    app.cycle_choice(-1);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if app.focus.is_choice() {
                    app.cycle_choice(1);
                }
            }
            KeyCode::Enter => {
                if app.focus.is_text() {
                    app.start_editing();
                } else if app.focus.is_choice() {
                    app.cycle_choice(1);
                } else {
                    app.open_symptoms();
                }
            }
            KeyCode::Char(' ') => {
                if app.focus.is_choice() {
                    app.cycle_choice(1);
                } else {
                    app.open_symptoms();
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_editing();
            }
            KeyCode::Esc => {
                app.cancel_editing();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.input.len() {
                    app.input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                app.input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_symptoms_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.symptom_cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.symptom_cursor_down();
            }
            KeyCode::Char(' ') => {
                app.toggle_symptom_under_cursor();
            }
            KeyCode::Enter | KeyCode::Esc => {
                app.close_symptoms();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_confirmed_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Enter => {
                app.start_new_booking();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }
}
