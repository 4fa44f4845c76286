//! Navigation state machine.
//!
//! [`Navigator`] is the only owner of the current screen. Every transition
//! is synchronous and total: a call with missing parameters leaves the
//! state untouched instead of failing.
//!
//! Blog, page and web view entries push the screen they were opened from,
//! payload included, onto a return stack. Back from those screens pops it,
//! so a link followed from a post comes back to that post.

use std::sync::Arc;

use super::types::{NavParams, NavTarget, Screen, ScreenId};
use crate::models::{Post, SubMenuItem};

/// Return screens kept at most; the oldest is dropped first.
pub const MAX_RETURN_DEPTH: usize = 32;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    screen: Screen,
    /// Return targets for context-sensitive back, innermost last
    returns: Vec<Screen>,
    logged_in: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on Home with a restored login flag.
    pub fn with_login(logged_in: bool) -> Self {
        Self {
            logged_in,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    /// Screen the next context-sensitive back returns to.
    pub fn previous(&self) -> ScreenId {
        self.returns.last().map(Screen::id).unwrap_or_default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn selected_post(&self) -> Option<&Arc<Post>> {
        match &self.screen {
            Screen::PostDetail { post } => Some(post),
            _ => None,
        }
    }

    /// `(slug, title)` of the open page.
    pub fn selected_page(&self) -> Option<(&str, &str)> {
        match &self.screen {
            Screen::PageDetail { slug, title } => Some((slug, title)),
            _ => None,
        }
    }

    /// `(url, title)` of the open web view.
    pub fn web_view_target(&self) -> Option<(&str, &str)> {
        match &self.screen {
            Screen::WebView { url, title } => Some((url, title)),
            _ => None,
        }
    }

    /// Go to `target`. Page needs `params.slug`, web view needs `params.url`;
    /// without them nothing changes. Page, web view and blog remember the
    /// current screen as the return target. The other targets start a fresh
    /// trail.
    pub fn navigate(&mut self, target: NavTarget, params: NavParams) {
        let from = self.screen.id();
        let next = match target {
            NavTarget::Blog => Screen::Blog,
            NavTarget::Page => {
                let Some(slug) = params.slug else {
                    tracing::warn!("Page navigation without a slug ignored");
                    return;
                };
                Screen::PageDetail {
                    title: params.title.unwrap_or_else(|| slug.clone()),
                    slug,
                }
            }
            NavTarget::WebView => {
                let Some(url) = params.url else {
                    tracing::warn!("Web view navigation without a URL ignored");
                    return;
                };
                Screen::WebView {
                    title: params.title.unwrap_or_else(|| url.clone()),
                    url,
                }
            }
            NavTarget::Home => Screen::Home,
            NavTarget::SubMenu(kind) => Screen::SubMenu(kind),
            NavTarget::Login => Screen::Login,
            NavTarget::Settings => Screen::Settings,
            NavTarget::Account => Screen::Account,
            NavTarget::Health => Screen::Health,
        };

        if matches!(target, NavTarget::Blog | NavTarget::Page | NavTarget::WebView) {
            let current = std::mem::take(&mut self.screen);
            self.push_return(current);
        } else {
            self.returns.clear();
        }
        tracing::debug!(from = ?from, to = ?next.id(), depth = self.returns.len(), "Navigate");
        self.screen = next;
    }

    pub fn select_post(&mut self, post: Arc<Post>) {
        tracing::debug!(post_id = post.id, "Post selected");
        self.screen = Screen::PostDetail { post };
    }

    /// Open the item's page. Back returns to `from`; when `from` is the
    /// current screen its payload is kept.
    pub fn select_sub_menu_item(&mut self, item: &SubMenuItem, from: ScreenId) {
        let back = if from == self.screen.id() {
            std::mem::take(&mut self.screen)
        } else {
            from.restore().unwrap_or_default()
        };
        self.push_return(back);
        self.screen = Screen::PageDetail {
            slug: item.slug.to_string(),
            title: item.title.to_string(),
        };
    }

    pub fn go_back(&mut self) {
        let next = match &self.screen {
            Screen::PostDetail { .. } => Screen::Blog,
            Screen::PageDetail { .. } | Screen::WebView { .. } => {
                self.returns.pop().unwrap_or_default()
            }
            Screen::Blog => match self.returns.pop() {
                Some(Screen::Account) => Screen::Account,
                _ => Screen::Home,
            },
            Screen::Health => Screen::Account,
            _ => Screen::Home,
        };
        if matches!(next, Screen::Home | Screen::Account) {
            self.returns.clear();
        }
        tracing::debug!(from = ?self.screen.id(), to = ?next.id(), "Back");
        self.screen = next;
    }

    fn push_return(&mut self, screen: Screen) {
        if self.returns.len() == MAX_RETURN_DEPTH {
            self.returns.remove(0);
        }
        self.returns.push(screen);
    }

    pub fn login_success(&mut self) {
        self.logged_in = true;
        self.returns.clear();
        self.screen = Screen::Account;
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.returns.clear();
        self.screen = Screen::Home;
    }
}
