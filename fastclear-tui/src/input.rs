use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Field};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Copy the quote summary to the system clipboard
    CopySummary,
    /// Run `service.submit_booking`(...) for the current selection
    SubmitBooking,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Esc {
        return Action::Quit;
    }

    // Focus traversal works from every field
    match key.code {
        Tab | Down => {
            app.focus_next();
            return Action::None;
        }
        BackTab | Up => {
            app.focus_prev();
            return Action::None;
        }
        _ => {}
    }

    let field = app.focused_field();

    // Enter activates buttons and otherwise advances the focus
    if key.code == Enter {
        return match field {
            Field::CopyButton => Action::CopySummary,
            Field::SubmitButton => Action::SubmitBooking,
            _ => {
                app.focus_next();
                Action::None
            }
        };
    }

    if let Some(buffer) = app.text_field_mut(field) {
        match key.code {
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    buffer.push(character);
                }
            }
            Backspace => {
                buffer.pop();
            }
            _ => {}
        }
        return Action::None;
    }

    match field {
        Field::WasteType => match key.code {
            Right | Char(' ') => app.cycle_category(true),
            Left => app.cycle_category(false),
            _ => {}
        },

        Field::LoadSize => match key.code {
            Right | Char(' ') => app.cycle_load_size(true),
            Left => app.cycle_load_size(false),
            _ => {}
        },

        Field::Extras => match key.code {
            Right => app.move_extra_cursor(true),
            Left => app.move_extra_cursor(false),
            Char(' ') => app.toggle_focused_extra(),
            _ => {}
        },

        Field::Agree => {
            if key.code == Char(' ') {
                app.selection.agree = !app.selection.agree;
            }
        }

        Field::CopyButton => {
            if key.code == Char(' ') {
                return Action::CopySummary;
            }
        }

        Field::SubmitButton => {
            if key.code == Char(' ') {
                return Action::SubmitBooking;
            }
        }

        // Text fields were handled above
        _ => {}
    }

    Action::None
}
