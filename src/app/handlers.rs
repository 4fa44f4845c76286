//! Key, paste and command handling for the App.

use crossterm::event::KeyEvent;

use crate::input::{Command, CommandRegistry, InputContext};
use crate::models::tiles::{self, HOME_TILES};
use crate::settings::TIME_STEP_MINUTES;
use crate::view_state::{HealthField, ScrollState};

use super::{App, Screen, HOME_COLUMNS};

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Rows of the settings screen.
pub const SETTINGS_ROWS: usize = 2;

impl App {
    /// Translate a key press and run it.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) {
        let context = InputContext::from_app(self);
        if let Some(cmd) = registry.dispatch(key, &context) {
            tracing::trace!(?cmd, screen = ?context.screen, "Command");
            self.execute_command(cmd);
        }
    }

    /// Bracketed paste goes into whichever text box has focus.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.trim();
        match self.nav.screen() {
            Screen::Login => {
                self.login.input.push_str(text);
                self.mark_dirty();
            }
            Screen::Health => {
                if let Some(input) = self.health_view.input.as_mut() {
                    input.push_str(text);
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit(),
            Command::Back => self.go_back(),
            Command::MoveUp => self.move_selection(0, -1),
            Command::MoveDown => self.move_selection(0, 1),
            Command::MoveLeft => self.move_selection(-1, 0),
            Command::MoveRight => self.move_selection(1, 0),
            Command::Activate => self.activate_selection(),
            Command::Retry => self.retry(),

            Command::ScrollUp(lines) => self.scroll(|s| s.scroll_up(lines)),
            Command::ScrollDown(lines) => self.scroll(|s| s.scroll_down(lines)),
            Command::ScrollPageUp => self.scroll(|s| s.scroll_up(PAGE_SCROLL_LINES)),
            Command::ScrollPageDown => self.scroll(|s| s.scroll_down(PAGE_SCROLL_LINES)),
            Command::ScrollTop => self.scroll(|s| s.offset = 0),
            Command::ScrollBottom => self.scroll(|s| s.offset = s.max),
            Command::OpenInBrowser => self.open_current_in_browser(),
            Command::FollowLink(number) => self.follow_link(number),

            Command::AddWater => self.add_water(),
            Command::ToggleReminder => self.toggle_reminder(),
            Command::ReminderEarlier => self.shift_reminder_time(-TIME_STEP_MINUTES),
            Command::ReminderLater => self.shift_reminder_time(TIME_STEP_MINUTES),

            Command::TypeChar(c) => self.type_char(c),
            Command::DeleteChar => self.delete_char(),
            Command::SubmitInput => self.submit_input(),
            Command::CancelInput => {
                self.health_view.input = None;
                self.mark_dirty();
            }

            Command::ConfirmYes => self.logout(),
            Command::ConfirmNo => {
                self.confirm_logout = false;
                self.mark_dirty();
            }

            Command::Noop => {}
        }
    }

    fn move_selection(&mut self, dx: isize, dy: isize) {
        match self.nav.screen() {
            Screen::Home => self
                .home
                .move_grid(dx, dy, HOME_COLUMNS, HOME_TILES.len()),
            Screen::SubMenu(kind) => {
                let len = kind.items().len();
                self.submenu.move_by(dy, len);
            }
            Screen::Account => {
                let len = self.account_tile_count();
                self.account.move_by(dy, len);
            }
            Screen::Blog => {
                let len = self.blog.posts.len();
                self.blog.cursor.move_by(dy, len);
            }
            Screen::Settings => self.settings_cursor.move_by(dy, SETTINGS_ROWS),
            Screen::Health => self.health_view.select_next(dy),
            _ => return,
        }
        self.mark_dirty();
    }

    fn activate_selection(&mut self) {
        match self.nav.screen() {
            Screen::Home => {
                if let Some(tile) = HOME_TILES.get(self.home.index) {
                    self.activate_tile(tile);
                }
            }
            Screen::SubMenu(kind) => {
                if let Some(item) = kind.items().get(self.submenu.index).copied() {
                    self.select_sub_menu_item(&item);
                }
            }
            Screen::Account => {
                if let Some(tile) = tiles::account_tiles().nth(self.account.index) {
                    self.activate_tile(tile);
                }
            }
            Screen::Blog => {
                if self.blog.error.is_some() && self.blog.posts.is_empty() {
                    self.retry();
                } else if let Some(post) = self.blog.selected().cloned() {
                    self.select_post(post);
                }
            }
            Screen::Settings => match self.settings_cursor.index {
                0 => self.toggle_reminder(),
                _ => self.shift_reminder_time(TIME_STEP_MINUTES),
            },
            Screen::Health => match self.health_view.field {
                HealthField::Water => self.add_water(),
                field if field.is_editable() => {
                    self.health_view.input = Some(String::new());
                    self.mark_dirty();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn scroll(&mut self, op: impl FnOnce(&mut ScrollState)) {
        let view = match self.nav.screen() {
            Screen::PostDetail { .. } => &mut self.post,
            Screen::PageDetail { .. } => &mut self.page,
            Screen::WebView { .. } => &mut self.web,
            _ => return,
        };
        op(&mut view.scroll);
        self.mark_dirty();
    }

    fn type_char(&mut self, c: char) {
        match self.nav.screen() {
            Screen::Login => self.login.input.push(c),
            Screen::Health => {
                if let Some(input) = self.health_view.input.as_mut() {
                    input.push(c);
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }

    fn delete_char(&mut self) {
        match self.nav.screen() {
            Screen::Login => {
                self.login.input.pop();
            }
            Screen::Health => {
                if let Some(input) = self.health_view.input.as_mut() {
                    input.pop();
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Enter in a text box. On the login screen an empty box opens the login
    /// page in the browser; a pasted URL is checked for a members' page.
    fn submit_input(&mut self) {
        match self.nav.screen() {
            Screen::Login => {
                let url = self.login.input.trim().to_string();
                if url.is_empty() {
                    self.open_login_page();
                } else {
                    self.submit_landed_url(&url);
                }
            }
            Screen::Health => self.save_health_input(),
            _ => {}
        }
    }
}
