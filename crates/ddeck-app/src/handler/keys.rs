//! Key event handlers per view
//!
//! Translates terminal-agnostic [`InputKey`]s into messages. The create
//! view routes printable characters into the focused form field, so
//! global shortcuts there are Ctrl-chords; the results view has no text
//! input and uses plain letters.

use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::results::{ResultTab, Section};
use crate::state::{AppState, View};

use super::{update, UpdateResult};

pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Global chords, valid in every view.
    if let InputKey::CharCtrl(c) = key {
        match c {
            'c' | 'q' => return update(state, Message::Quit),
            'r' => return update(state, Message::RefreshHistory),
            _ => {}
        }
    }

    match state.view {
        View::Create => handle_create_key(state, key),
        View::Results => handle_results_key(state, key),
    }
}

fn handle_create_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc => update(state, Message::Quit),
        InputKey::Enter => update(state, Message::SubmitForm),
        InputKey::Tab => {
            state.form.focus_next();
            UpdateResult::none()
        }
        InputKey::BackTab => {
            state.form.focus_prev();
            UpdateResult::none()
        }
        InputKey::Up => update(state, Message::HistoryCursor(-1)),
        InputKey::Down => update(state, Message::HistoryCursor(1)),
        InputKey::CharCtrl('o') => update(state, Message::SelectHistoryEntry),
        InputKey::CharCtrl('v') => update(state, Message::ReenterResults),
        InputKey::Left => {
            adjust_selector(state, false);
            UpdateResult::none()
        }
        InputKey::Right => {
            adjust_selector(state, true);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.form.backspace();
            UpdateResult::none()
        }
        InputKey::Char(c) => {
            state.form.insert_char(c);
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

/// Left/Right on the style field cycles it; on the complexity field it
/// toggles. On text fields the arrows are ignored.
fn adjust_selector(state: &mut AppState, _forward: bool) {
    match state.form.focus {
        FormField::Style => state.form.cycle_style(),
        FormField::Complexity => state.form.toggle_complexity(),
        FormField::Prompt | FormField::Services => {}
    }
}

fn handle_results_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc | InputKey::Char('b') => update(state, Message::ReturnToCreate),
        InputKey::Char('q') => update(state, Message::Quit),

        InputKey::Tab | InputKey::Right => update(state, Message::NextTab),
        InputKey::BackTab | InputKey::Left => update(state, Message::PrevTab),
        InputKey::Char('1') => update(state, Message::SetTab(ResultTab::Diagram)),
        InputKey::Char('2') => update(state, Message::SetTab(ResultTab::Details)),
        InputKey::Char('3') => update(state, Message::SetTab(ResultTab::Raw)),

        InputKey::Char('p') => update(state, Message::ToggleSection(Section::Prompt)),
        InputKey::Char('a') => update(state, Message::ToggleSection(Section::Architecture)),
        InputKey::Char('i') => update(state, Message::ToggleSection(Section::Apis)),
        InputKey::Char('c') => update(state, Message::ToggleSection(Section::Components)),

        InputKey::Up => update(state, Message::HistoryCursor(-1)),
        InputKey::Down => update(state, Message::HistoryCursor(1)),
        InputKey::Enter => update(state, Message::SelectHistoryEntry),

        InputKey::Char('j') => update(state, Message::ScrollResults(1)),
        InputKey::Char('k') => update(state, Message::ScrollResults(-1)),
        InputKey::PageDown => update(state, Message::ScrollResults(10)),
        InputKey::PageUp => update(state, Message::ScrollResults(-10)),
        InputKey::Home => {
            state.result_view.scroll = 0;
            UpdateResult::none()
        }

        _ => UpdateResult::none(),
    }
}
