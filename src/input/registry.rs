//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, KeyScope, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands for the current context.
///
/// Priority:
/// 1. Ctrl+C (always quits)
/// 2. Modal bindings; a modal swallows every other key
/// 3. Screen scope bindings
/// 4. Global bindings
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::from_event(&key);

        if context.is_modal_active() {
            return Some(self.dispatch_modal(key, combo, context));
        }

        if let Some(cmd) = self.config.get_scope(context.scope(), &combo) {
            return Some(*cmd);
        }

        self.config.get_global(&combo).copied()
    }

    fn dispatch_modal(&self, key: KeyEvent, combo: KeyCombo, context: &InputContext) -> Command {
        if context.modal == ModalType::TextInput
            && context.scope() == KeyScope::Login
            && key.code == KeyCode::Esc
        {
            return Command::Back;
        }

        if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
            return *cmd;
        }

        match (context.modal, key.code) {
            (ModalType::TextInput, KeyCode::Char(c))
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Command::TypeChar(c)
            }
            _ => Command::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ScreenId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx(screen: ScreenId) -> InputContext {
        InputContext::new(screen, ModalType::None)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for modal in [ModalType::None, ModalType::TextInput, ModalType::ConfirmLogout] {
            let context = InputContext::new(ScreenId::Login, modal);
            assert_eq!(registry.dispatch(ctrl_c, &context), Some(Command::Quit));
        }
    }

    #[test]
    fn test_scope_binding_wins_over_global() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('h')), &ctx(ScreenId::Home)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('h')), &ctx(ScreenId::Blog)),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('z')), &ctx(ScreenId::Account)),
            None
        );
    }

    #[test]
    fn test_text_input_captures_characters() {
        let registry = CommandRegistry::new();
        let context = InputContext::new(ScreenId::Health, ModalType::TextInput);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &context),
            Some(Command::TypeChar('q'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &context),
            Some(Command::CancelInput)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Up), &context),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_esc_leaves_login_screen() {
        let registry = CommandRegistry::new();
        let context = InputContext::new(ScreenId::Login, ModalType::TextInput);
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &context),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_confirm_modal_swallows_navigation() {
        let registry = CommandRegistry::new();
        let context = InputContext::new(ScreenId::Account, ModalType::ConfirmLogout);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('i')), &context),
            Some(Command::ConfirmYes)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &context),
            Some(Command::ConfirmNo)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Down), &context),
            Some(Command::Noop)
        );
    }
}
