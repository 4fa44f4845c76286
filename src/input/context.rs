//! Input context for determining which commands are available.

use crate::app::{App, Screen, ScreenId};

/// Overlay that takes over the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// "Biztosan ki szeretnél jelentkezni?" prompt
    ConfirmLogout,
    /// A text box has focus
    TextInput,
}

/// Group of screens sharing one set of bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    /// Two-column home tile grid
    Grid,
    /// Vertical menus: submenus, account, blog list
    List,
    /// Scrollable post, page or web view
    Document,
    Settings,
    Health,
    Login,
}

impl KeyScope {
    pub fn for_screen(screen: ScreenId) -> Self {
        match screen {
            ScreenId::Home => KeyScope::Grid,
            ScreenId::Blog | ScreenId::SubMenu(_) | ScreenId::Account => KeyScope::List,
            ScreenId::PostDetail | ScreenId::PageDetail | ScreenId::WebView => KeyScope::Document,
            ScreenId::Settings => KeyScope::Settings,
            ScreenId::Health => KeyScope::Health,
            ScreenId::Login => KeyScope::Login,
        }
    }
}

/// Snapshot of the app state the registry needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub screen: ScreenId,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new(screen: ScreenId, modal: ModalType) -> Self {
        Self { screen, modal }
    }

    pub fn from_app(app: &App) -> Self {
        let modal = if app.confirm_logout {
            ModalType::ConfirmLogout
        } else if app.health_view.is_editing() && matches!(app.nav.screen(), Screen::Health) {
            ModalType::TextInput
        } else if matches!(app.nav.screen(), Screen::Login) {
            ModalType::TextInput
        } else {
            ModalType::None
        };
        Self {
            screen: app.nav.screen_id(),
            modal,
        }
    }

    pub fn scope(&self) -> KeyScope {
        KeyScope::for_screen(self.screen)
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubMenuKind;

    #[test]
    fn test_scope_for_screen() {
        assert_eq!(KeyScope::for_screen(ScreenId::Home), KeyScope::Grid);
        assert_eq!(
            KeyScope::for_screen(ScreenId::SubMenu(SubMenuKind::Gift)),
            KeyScope::List
        );
        assert_eq!(KeyScope::for_screen(ScreenId::WebView), KeyScope::Document);
        assert_eq!(KeyScope::for_screen(ScreenId::Health), KeyScope::Health);
    }

    #[test]
    fn test_default_context_has_no_modal() {
        let ctx = InputContext::default();
        assert_eq!(ctx.screen, ScreenId::Home);
        assert!(!ctx.is_modal_active());
    }
}
