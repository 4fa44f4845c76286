//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::{KeyScope, ModalType};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Combo for a key event. Shift is dropped from characters, since the
    /// character itself is already upper case.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active everywhere except inside modals
    pub global: HashMap<KeyCombo, Command>,
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    pub scope: HashMap<KeyScope, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            scope: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_scope_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global.insert(KeyCombo::char('q'), Command::Quit);
        self.global.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.global
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
        self.global.insert(KeyCombo::char('h'), Command::Back);
    }

    fn setup_modal_bindings(&mut self) {
        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::char('i'), Command::ConfirmYes);
        confirm.insert(KeyCombo::char('y'), Command::ConfirmYes);
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmYes);
        confirm.insert(KeyCombo::char('n'), Command::ConfirmNo);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::ConfirmNo);
        self.modal.insert(ModalType::ConfirmLogout, confirm);

        let mut text = HashMap::new();
        text.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitInput);
        text.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelInput);
        text.insert(KeyCombo::plain(KeyCode::Backspace), Command::DeleteChar);
        self.modal.insert(ModalType::TextInput, text);
    }

    fn setup_scope_bindings(&mut self) {
        let mut grid = Self::vertical_moves();
        grid.insert(KeyCombo::plain(KeyCode::Left), Command::MoveLeft);
        grid.insert(KeyCombo::plain(KeyCode::Right), Command::MoveRight);
        grid.insert(KeyCombo::char('l'), Command::MoveRight);
        grid.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        // `h` is back elsewhere; on home it moves left
        grid.insert(KeyCombo::char('h'), Command::MoveLeft);
        self.scope.insert(KeyScope::Grid, grid);

        let mut list = Self::vertical_moves();
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        list.insert(KeyCombo::plain(KeyCode::Right), Command::Activate);
        list.insert(KeyCombo::char('r'), Command::Retry);
        self.scope.insert(KeyScope::List, list);

        let mut document = HashMap::new();
        document.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        document.insert(KeyCombo::char('k'), Command::ScrollUp(1));
        document.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        document.insert(KeyCombo::char('j'), Command::ScrollDown(1));
        document.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        document.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        document.insert(KeyCombo::char(' '), Command::ScrollPageDown);
        document.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollTop);
        document.insert(KeyCombo::char('g'), Command::ScrollTop);
        document.insert(KeyCombo::plain(KeyCode::End), Command::ScrollBottom);
        document.insert(KeyCombo::char('G'), Command::ScrollBottom);
        document.insert(KeyCombo::char('o'), Command::OpenInBrowser);
        document.insert(KeyCombo::char('r'), Command::Retry);
        for n in 1..=9u32 {
            if let Some(c) = char::from_digit(n, 10) {
                document.insert(KeyCombo::char(c), Command::FollowLink(n as usize));
            }
        }
        self.scope.insert(KeyScope::Document, document);

        let mut settings = Self::vertical_moves();
        settings.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        settings.insert(KeyCombo::char(' '), Command::ToggleReminder);
        settings.insert(KeyCombo::plain(KeyCode::Left), Command::ReminderEarlier);
        settings.insert(KeyCombo::char('-'), Command::ReminderEarlier);
        settings.insert(KeyCombo::plain(KeyCode::Right), Command::ReminderLater);
        settings.insert(KeyCombo::char('+'), Command::ReminderLater);
        self.scope.insert(KeyScope::Settings, settings);

        let mut health = Self::vertical_moves();
        health.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        health.insert(KeyCombo::char('w'), Command::AddWater);
        self.scope.insert(KeyScope::Health, health);

        self.scope.insert(KeyScope::Login, HashMap::new());
    }

    fn vertical_moves() -> HashMap<KeyCombo, Command> {
        let mut map = HashMap::new();
        map.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        map.insert(KeyCombo::char('k'), Command::MoveUp);
        map.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        map.insert(KeyCombo::char('j'), Command::MoveDown);
        map
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_scope(&self, scope: KeyScope, combo: &KeyCombo) -> Option<&Command> {
        self.scope.get(&scope).and_then(|m| m.get(combo))
    }
}
