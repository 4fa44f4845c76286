//! Screen and navigation target types.
//!
//! - [`Screen`] - what is on screen, with the payload that screen needs
//! - [`ScreenId`] - payload-free discriminant, used as a return target
//! - [`NavTarget`] / [`NavParams`] - arguments of `Navigator::navigate`
//! - [`TileAction`] - parsed tile action string

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::models::{Post, SubMenuKind};

/// The screen currently displayed.
///
/// Selection payloads live inside the variant that shows them, so a post
/// can only be selected while the post detail screen is up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Home,
    Blog,
    PostDetail {
        post: Arc<Post>,
    },
    PageDetail {
        slug: String,
        title: String,
    },
    SubMenu(SubMenuKind),
    Login,
    Settings,
    Account,
    Health,
    WebView {
        url: String,
        title: String,
    },
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Home => ScreenId::Home,
            Screen::Blog => ScreenId::Blog,
            Screen::PostDetail { .. } => ScreenId::PostDetail,
            Screen::PageDetail { .. } => ScreenId::PageDetail,
            Screen::SubMenu(kind) => ScreenId::SubMenu(*kind),
            Screen::Login => ScreenId::Login,
            Screen::Settings => ScreenId::Settings,
            Screen::Account => ScreenId::Account,
            Screen::Health => ScreenId::Health,
            Screen::WebView { .. } => ScreenId::WebView,
        }
    }

    /// Header title.
    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Egészség Konyhanyelven".to_string(),
            Screen::Blog => "Blog".to_string(),
            Screen::PostDetail { post } => post.title_text(),
            Screen::PageDetail { title, .. } | Screen::WebView { title, .. } => title.clone(),
            Screen::SubMenu(kind) => kind.title().to_string(),
            Screen::Login => "Belépés".to_string(),
            Screen::Settings => "Beállítások".to_string(),
            Screen::Account => "Fiókom".to_string(),
            Screen::Health => "Egészség Adataim".to_string(),
        }
    }
}

/// Payload-free screen identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Home,
    Blog,
    PostDetail,
    PageDetail,
    SubMenu(SubMenuKind),
    Login,
    Settings,
    Account,
    Health,
    WebView,
}

impl ScreenId {
    /// The screen for this id, if it carries no payload.
    pub fn restore(self) -> Option<Screen> {
        match self {
            ScreenId::Home => Some(Screen::Home),
            ScreenId::Blog => Some(Screen::Blog),
            ScreenId::SubMenu(kind) => Some(Screen::SubMenu(kind)),
            ScreenId::Login => Some(Screen::Login),
            ScreenId::Settings => Some(Screen::Settings),
            ScreenId::Account => Some(Screen::Account),
            ScreenId::Health => Some(Screen::Health),
            ScreenId::PostDetail | ScreenId::PageDetail | ScreenId::WebView => None,
        }
    }
}

/// Where `Navigator::navigate` should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Blog,
    /// Needs `slug`
    Page,
    SubMenu(SubMenuKind),
    Login,
    Settings,
    Account,
    Health,
    /// Needs `url`
    WebView,
}

/// An action string that names no known target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTarget(pub String);

impl fmt::Display for UnknownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown navigation target '{}'", self.0)
    }
}

impl std::error::Error for UnknownTarget {}

impl FromStr for NavTarget {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(NavTarget::Home),
            "blog" => Ok(NavTarget::Blog),
            "page" => Ok(NavTarget::Page),
            "gift" => Ok(NavTarget::SubMenu(SubMenuKind::Gift)),
            "services" => Ok(NavTarget::SubMenu(SubMenuKind::Services)),
            "courses" => Ok(NavTarget::SubMenu(SubMenuKind::Courses)),
            "login" => Ok(NavTarget::Login),
            "settings" => Ok(NavTarget::Settings),
            "account" => Ok(NavTarget::Account),
            "health" => Ok(NavTarget::Health),
            "webview" => Ok(NavTarget::WebView),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}

/// Optional payload for [`NavTarget::Page`] and [`NavTarget::WebView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl NavParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn page(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            title: Some(title.into()),
            url: None,
        }
    }

    pub fn web(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: None,
            title: Some(title.into()),
            url: Some(url.into()),
        }
    }
}

/// What activating a tile does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Navigate(NavTarget),
    /// Shows a "Hamarosan" notice
    ComingSoon,
    /// Asks for confirmation, then logs out
    Logout,
}

impl FromStr for TileAction {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coming_soon" => Ok(TileAction::ComingSoon),
            "logout" => Ok(TileAction::Logout),
            other => other.parse().map(TileAction::Navigate),
        }
    }
}
