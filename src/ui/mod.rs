//! UI rendering.
//!
//! Every screen shares the same frame: a one-line header bar (back label and
//! title), the screen body, and a footer with either the current status
//! message or the key hints for that screen. The logout confirmation is
//! drawn on top when open.

mod blog;
mod document;
mod health;
mod helpers;
mod home;
mod login;
mod menus;
mod settings;
mod theme;

pub use blog::{EMPTY_TEXT, ERROR_HEADLINE, LOADING_TEXT};
pub use document::{document_lines, OPEN_ORIGINAL_TEXT, PAGE_ERROR_HEADLINE};
pub use helpers::{estimate_wrapped_line_count, truncate_string, BACK_LABEL};
pub use theme::{COLOR_ACCENT_RED, COLOR_PRIMARY, COLOR_SECONDARY};

use ratatui::Frame;

use crate::app::{App, Screen};
use document::{render_document_view, Placeholder};
use helpers::{render_confirm_dialog, render_footer, render_header, screen_layout};

pub const LOGOUT_QUESTION: &str = "Biztosan ki szeretnél jelentkezni?";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the current screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let (header, body, footer) = screen_layout(frame.area());
    let screen = app.nav.screen().clone();

    render_header(frame, header, &screen.title(), screen != Screen::Home);

    match &screen {
        Screen::Home => home::render_home(frame, body, app),
        Screen::Blog => blog::render_blog(frame, body, app),
        Screen::PostDetail { post } => render_document_view(
            frame,
            body,
            &mut app.post,
            Placeholder {
                title: &post.title_text(),
                subtitle: None,
            },
            app.tick_count,
        ),
        Screen::PageDetail { title, .. } => render_document_view(
            frame,
            body,
            &mut app.page,
            Placeholder {
                title,
                subtitle: None,
            },
            app.tick_count,
        ),
        Screen::WebView { url, title } => render_document_view(
            frame,
            body,
            &mut app.web,
            Placeholder {
                title,
                subtitle: Some(url),
            },
            app.tick_count,
        ),
        Screen::SubMenu(kind) => menus::render_submenu(frame, body, app, *kind),
        Screen::Account => menus::render_account(frame, body, app),
        Screen::Login => login::render_login_screen(frame, body, app),
        Screen::Settings => settings::render_settings(frame, body, app),
        Screen::Health => health::render_health(frame, body, app),
    }

    render_footer(frame, footer, app.status.as_ref(), key_hints(app, &screen));

    if app.confirm_logout {
        render_confirm_dialog(frame, LOGOUT_QUESTION);
    }
}

/// Footer hints for the current screen.
fn key_hints(app: &App, screen: &Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Home => &[("←↑↓→", "mozgás"), ("Enter", "megnyitás"), ("q", "kilépés")],
        Screen::Blog => &[("↑↓", "mozgás"), ("Enter", "olvasás"), ("r", "frissítés"), ("Esc", "vissza")],
        Screen::SubMenu(_) | Screen::Account => {
            &[("↑↓", "mozgás"), ("Enter", "megnyitás"), ("Esc", "vissza")]
        }
        Screen::PostDetail { .. } | Screen::PageDetail { .. } | Screen::WebView { .. } => &[
            ("↑↓", "görgetés"),
            ("1-9", "hivatkozás"),
            ("o", "böngésző"),
            ("Esc", "vissza"),
        ],
        Screen::Login => &[("Enter", "tovább"), ("Esc", "vissza")],
        Screen::Settings => &[("↑↓", "mozgás"), ("Szóköz", "be/ki"), ("←→", "időpont"), ("Esc", "vissza")],
        Screen::Health if app.health_view.is_editing() => &[("Enter", "mentés"), ("Esc", "mégse")],
        Screen::Health => &[("↑↓", "mozgás"), ("Enter", "megadás"), ("w", "+0.25 L víz"), ("Esc", "vissza")],
    }
}
