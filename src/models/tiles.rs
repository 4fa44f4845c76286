//! Static menu tables: home tiles, submenu items and account sections.
//!
//! Tile actions are plain strings, parsed into navigation targets when the
//! tile is activated. A tile whose action does not parse does nothing.

use std::fmt;

/// Visual weight of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStyle {
    #[default]
    Light,
    /// Red accent, used for the health tile
    Accent,
    /// Destructive action (logout)
    Danger,
}

/// One entry of a tile grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub icon: &'static str,
    /// Action string, see `app::TileAction`
    pub action: &'static str,
    /// Page slug for `page` actions
    pub slug: Option<&'static str>,
    /// Site path for `webview` actions, turned into `{base}/{path}/?app=1`
    pub path: Option<&'static str>,
    /// Title shown on the opened page, defaults to `title`
    pub page_title: Option<&'static str>,
    pub style: TileStyle,
}

impl Tile {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        icon: &'static str,
        action: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            subtitle: None,
            icon,
            action,
            slug: None,
            path: None,
            page_title: None,
            style: TileStyle::Light,
        }
    }

    pub const fn subtitle(self, subtitle: &'static str) -> Self {
        Self {
            subtitle: Some(subtitle),
            ..self
        }
    }

    pub const fn slug(self, slug: &'static str) -> Self {
        Self {
            slug: Some(slug),
            ..self
        }
    }

    pub const fn path(self, path: &'static str) -> Self {
        Self {
            path: Some(path),
            ..self
        }
    }

    pub const fn page_title(self, title: &'static str) -> Self {
        Self {
            page_title: Some(title),
            ..self
        }
    }

    pub const fn style(self, style: TileStyle) -> Self {
        Self { style, ..self }
    }

    /// Title of the page this tile opens.
    pub fn target_title(&self) -> &'static str {
        self.page_title.unwrap_or(self.title)
    }

    /// Absolute URL for a `webview` tile.
    pub fn web_url(&self, base_url: &str) -> Option<String> {
        self.path.map(|path| app_page_url(base_url, path))
    }
}

/// `{base}/{path}/?app=1`, or `{base}/?app=1` for an empty path.
pub fn app_page_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("{}/?app=1", base)
    } else {
        format!("{}/{}/?app=1", base, path)
    }
}

/// Tile ids whose title depends on the login state.
pub const LOGIN_TILE_ID: &str = "login";

pub const HOME_TILES: &[Tile] = &[
    Tile::new("home", "Főoldal", "🏠", "page").slug("home"),
    Tile::new("services", "Szolgáltatások", "💎", "services"),
    Tile::new("courses", "Tanfolyamok", "🎓", "courses"),
    Tile::new("blog", "Blog", "📝", "blog"),
    Tile::new("gift", "Ajándék", "🎁", "gift"),
    Tile::new(LOGIN_TILE_ID, "Belépés", "🔐", "login"),
    Tile::new("settings", "Beállítások", "⚙", "settings"),
];

/// Home tile title, accounting for the login tile's logged-in label.
pub fn home_tile_title(tile: &Tile, logged_in: bool) -> &'static str {
    if tile.id == LOGIN_TILE_ID && logged_in {
        "Fiókom"
    } else {
        tile.title
    }
}

/// The three submenus reachable from the home grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMenuKind {
    Gift,
    Services,
    Courses,
}

impl SubMenuKind {
    pub const ALL: [SubMenuKind; 3] = [SubMenuKind::Gift, SubMenuKind::Services, SubMenuKind::Courses];

    pub fn title(self) -> &'static str {
        match self {
            SubMenuKind::Gift => "Ajándék",
            SubMenuKind::Services => "Szolgáltatások",
            SubMenuKind::Courses => "Tanfolyamok",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubMenuKind::Gift => "gift",
            SubMenuKind::Services => "services",
            SubMenuKind::Courses => "courses",
        }
    }

    pub fn items(self) -> &'static [SubMenuItem] {
        match self {
            SubMenuKind::Gift => GIFT_ITEMS,
            SubMenuKind::Services => SERVICE_ITEMS,
            SubMenuKind::Courses => COURSE_ITEMS,
        }
    }
}

impl fmt::Display for SubMenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of a submenu; selecting it opens the page with `slug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub slug: &'static str,
}

const fn item(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    slug: &'static str,
) -> SubMenuItem {
    SubMenuItem {
        id,
        title,
        icon,
        slug,
    }
}

const GIFT_ITEMS: &[SubMenuItem] = &[
    item("free-ebook", "Ingyenes e-könyv", "📘", "ajandek-e-konyv"),
    item("recipes", "Ajándék receptek", "🍳", "ajandek-receptek"),
    item("voucher", "Ajándékutalvány", "🎟", "ajandekutalvany"),
];

const SERVICE_ITEMS: &[SubMenuItem] = &[
    item("consultation", "Táplálkozási tanácsadás", "🥗", "taplalkozasi-tanacsadas"),
    item("coaching", "Egyéni konzultáció", "💬", "egyeni-konzultacio"),
    item("meal-plan", "Étrend összeállítás", "📋", "etrend-osszeallitas"),
    item("all-services", "Összes szolgáltatás", "💎", "szolgaltatasok"),
];

const COURSE_ITEMS: &[SubMenuItem] = &[
    item("weight-loss", "Tartós Fogyás Tanfolyam", "⚖", "tartos-fogyas-tanfolyam"),
    item("stress", "Stresszkezelés", "🧘", "stresszkezeles"),
    item("all-courses", "Összes tanfolyam", "🎓", "tanfolyamok"),
];

/// A titled group of account tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSection {
    pub title: &'static str,
    pub tiles: &'static [Tile],
}

pub const ACCOUNT_SECTIONS: &[AccountSection] = &[
    AccountSection {
        title: "Saját tartalmak",
        tiles: &[
            Tile::new("health", "Egészség Adataim", "❤", "health")
                .subtitle("Lépések, súly, víz, alvás")
                .style(TileStyle::Accent),
            Tile::new("courses", "Kurzusaim", "📚", "webview")
                .subtitle("Saját hozzáférhető kurzusaim")
                .path("tagoknak"),
            Tile::new("progress", "Haladásom", "📊", "webview")
                .subtitle("Haladás áttekintés")
                .path("haladas"),
            Tile::new("profile", "Profilom", "👤", "webview")
                .subtitle("Profil szerkesztés")
                .path("profil"),
            Tile::new("favorites", "Kedvencek", "⭐", "coming_soon").subtitle("Mentett tartalmak"),
        ],
    },
    AccountSection {
        title: "Útmutatók",
        tiles: &[
            Tile::new("stress-guide", "Stresszkezelés Útmutató", "📗", "webview")
                .path("stresszkezelesi-utmutato"),
            Tile::new("health-guide", "Egészség Útmutató", "📘", "webview")
                .path("egeszseg-utmutato"),
            Tile::new("dictionary", "Szótár", "📖", "webview").path("szotar"),
            Tile::new("recipes", "Receptkönyv", "🍳", "webview").path("receptkonyv"),
        ],
    },
    AccountSection {
        title: "Tartós Fogyás Tanfolyam",
        tiles: &[
            Tile::new("weight-loss-videos", "Tartós Fogyás Tanfolyam videók", "🎬", "webview")
                .path("kurzusok/tartos-fogyas-tanfolyam"),
            Tile::new("bonuses", "Bónuszok", "🎁", "webview")
                .path("tartos-fogyas-tanfolyam-bonuszok"),
        ],
    },
    AccountSection {
        title: "Egyéb",
        tiles: &[
            Tile::new("services", "Szolgáltatások", "💎", "webview").path("szolgaltatasok"),
            Tile::new("available-courses", "Megvásárolható tanfolyamok", "🎓", "webview")
                .path("tanfolyamok"),
            Tile::new("blog", "Blog", "📝", "blog"),
            Tile::new("logout", "Kijelentkezés", "🚪", "logout").style(TileStyle::Danger),
        ],
    },
];

/// Account tiles in display order, flattened across sections.
pub fn account_tiles() -> impl Iterator<Item = &'static Tile> {
    ACCOUNT_SECTIONS.iter().flat_map(|section| section.tiles.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_page_url() {
        assert_eq!(
            app_page_url("https://example.org/", "tagoknak"),
            "https://example.org/tagoknak/?app=1"
        );
        assert_eq!(
            app_page_url("https://example.org", "/kurzusok/x/"),
            "https://example.org/kurzusok/x/?app=1"
        );
        assert_eq!(app_page_url("https://example.org", ""), "https://example.org/?app=1");
    }

    #[test]
    fn test_login_tile_title_follows_session() {
        let tile = HOME_TILES.iter().find(|t| t.id == LOGIN_TILE_ID).unwrap();
        assert_eq!(home_tile_title(tile, false), "Belépés");
        assert_eq!(home_tile_title(tile, true), "Fiókom");
    }

    #[test]
    fn test_every_webview_tile_has_a_path() {
        for tile in account_tiles().filter(|t| t.action == "webview") {
            assert!(tile.path.is_some(), "{} has no path", tile.id);
        }
    }

    #[test]
    fn test_submenus_are_populated() {
        for kind in SubMenuKind::ALL {
            assert!(!kind.items().is_empty(), "{} is empty", kind);
            for item in kind.items() {
                assert!(!item.slug.is_empty());
            }
        }
    }

    #[test]
    fn test_tile_target_title_defaults() {
        let tile = Tile::new("x", "Cím", "•", "webview").path("x");
        assert_eq!(tile.target_title(), "Cím");
        assert_eq!(tile.page_title("Más").target_title(), "Más");
    }
}
