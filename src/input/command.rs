//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects; the
//! registry produces commands, `App::execute_command` applies them.

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Context-sensitive back (Esc, Backspace)
    Back,

    // =========================================================================
    // Menus and lists
    // =========================================================================
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Enter on the selected item
    Activate,
    /// Re-run the failed fetch of the current screen
    Retry,

    // =========================================================================
    // Documents
    // =========================================================================
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    ScrollTop,
    ScrollBottom,
    /// Open the current post/page in the system browser
    OpenInBrowser,
    /// Follow the `[n]` link of the current document
    FollowLink(usize),

    // =========================================================================
    // Health and settings
    // =========================================================================
    AddWater,
    ToggleReminder,
    ReminderEarlier,
    ReminderLater,

    // =========================================================================
    // Text input (login URL box, health value editor)
    // =========================================================================
    TypeChar(char),
    DeleteChar,
    SubmitInput,
    CancelInput,

    // =========================================================================
    // Logout confirmation
    // =========================================================================
    ConfirmYes,
    ConfirmNo,

    /// Swallow the key
    Noop,
}

impl Command {
    /// Whether the command edits a text input.
    pub fn is_text_edit(&self) -> bool {
        matches!(self, Command::TypeChar(_) | Command::DeleteChar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_text_edit() {
        assert!(Command::TypeChar('a').is_text_edit());
        assert!(Command::DeleteChar.is_text_edit());
        assert!(!Command::SubmitInput.is_text_edit());
        assert!(!Command::Quit.is_text_edit());
    }
}
