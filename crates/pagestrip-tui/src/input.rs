use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::keymap::KeyBinding;

/// Host action produced from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Replace the page model with a fresh set of pages
    Reload,
    /// Replace the page model with a single page
    Shrink,
    ToggleHelp,
    PendingG, // First 'g' press, waiting for second 'g'
    None,
}

/// Map a key event to an action for the current host state
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.show_help {
        // Any key closes help
        return Action::ToggleHelp;
    }

    let binding = binding_for(key);

    if app.keymap.is_g_prefix(&binding) {
        if app.pending_g {
            return app
                .keymap
                .get_pending_g_action()
                .copied()
                .unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    app.keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Uppercase letters arrive with or without SHIFT depending on the terminal
fn binding_for(key: KeyEvent) -> KeyBinding {
    let mut modifiers = key.modifiers;
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() {
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    KeyBinding::new(key.code, modifiers)
}
