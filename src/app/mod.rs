//! Application state and the operations behind every key binding.
//!
//! `App` owns the [`Navigator`] plus one view-state struct per screen. Every
//! screen change goes through [`App::transition`], which runs the entry work
//! for the new screen (fetches, store reads) once the navigator has moved.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::Navigator;
pub use handlers::{PAGE_SCROLL_LINES, SETTINGS_ROWS};
pub use types::{NavParams, NavTarget, Screen, ScreenId, TileAction, UnknownTarget};

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tokio::sync::mpsc;

use crate::auth::{AuthSession, LinkPolicy, LinkRoute};
use crate::content::ContentClient;
use crate::error::AppError;
use crate::health::HealthStore;
use crate::models::tiles::{self, Tile};
use crate::models::{SubMenuItem, SubMenuKind};
use crate::notifications;
use crate::settings::{ReminderPreferences, ReminderSchedule};
use crate::traits::{HttpClient, KeyValueStore, UrlOpener};
use crate::view_state::{
    BlogView, Document, DocumentView, HealthField, HealthView, LoadFailure, LoadState, LoginView,
    MenuCursor, StatusKind, StatusLine,
};

/// Source of the current local time.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Ticks between reminder checks (about one second).
const REMINDER_CHECK_TICKS: u64 = 60;

/// Columns of the home tile grid.
pub const HOME_COLUMNS: usize = 2;

pub const COMING_SOON_TEXT: &str = "Hamarosan: ez a funkció hamarosan elérhető lesz!";

/// External collaborators the app talks to.
#[derive(Clone)]
pub struct AppServices {
    pub http: Arc<dyn HttpClient>,
    pub store: Arc<dyn KeyValueStore>,
    pub opener: Arc<dyn UrlOpener>,
    pub base_url: String,
}

pub struct App {
    pub nav: Navigator,
    pub content: ContentClient,
    pub health: HealthStore,
    pub auth: AuthSession,
    pub reminders: ReminderPreferences,
    pub schedule: ReminderSchedule,
    pub opener: Arc<dyn UrlOpener>,
    pub links: LinkPolicy,
    pub clock: Clock,

    pub home: MenuCursor,
    pub submenu: MenuCursor,
    pub account: MenuCursor,
    pub settings_cursor: MenuCursor,
    pub blog: BlogView,
    pub post: DocumentView,
    pub page: DocumentView,
    pub web: DocumentView,
    pub health_view: HealthView,
    pub login: LoginView,
    /// Logout confirmation prompt is showing
    pub confirm_logout: bool,
    /// App-wide transient message
    pub status: Option<StatusLine>,

    /// Receiver for async results; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async results (clone into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub tick_count: u64,
    /// Set on state changes, cleared after each draw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(services: AppServices) -> Self {
        Self::with_clock(services, local_now)
    }

    pub fn with_clock(services: AppServices, clock: Clock) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let auth = AuthSession::new(
            services.store.clone(),
            services.opener.clone(),
            services.base_url.clone(),
        );
        let reminders = ReminderPreferences::load(services.store.clone());
        let schedule = ReminderSchedule::starting_at(clock(), &reminders.settings());
        let logged_in = auth.restore();
        tracing::info!(logged_in, base_url = %services.base_url, "App created");

        Self {
            nav: Navigator::with_login(logged_in),
            content: ContentClient::new(services.http, services.base_url),
            health: HealthStore::new(services.store),
            auth,
            reminders,
            schedule,
            opener: services.opener,
            links: LinkPolicy,
            clock,
            home: MenuCursor::default(),
            submenu: MenuCursor::default(),
            account: MenuCursor::default(),
            settings_cursor: MenuCursor::default(),
            blog: BlogView::default(),
            post: DocumentView::default(),
            page: DocumentView::default(),
            web: DocumentView::default(),
            health_view: HealthView::default(),
            login: LoginView::default(),
            confirm_logout: false,
            status: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)().date()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Apply a navigator operation and run entry work if the screen changed.
    pub fn transition(&mut self, op: impl FnOnce(&mut Navigator)) {
        let before = self.nav.screen().clone();
        op(&mut self.nav);
        if *self.nav.screen() != before {
            self.confirm_logout = false;
            self.on_screen_entered();
        }
        self.mark_dirty();
    }

    /// Navigate, unless the target is a checkout URL. Those open in the
    /// system browser and the screen stays put.
    pub fn navigate(&mut self, target: NavTarget, params: NavParams) {
        if target == NavTarget::WebView {
            if let Some(url) = params.url.as_deref() {
                if self.links.route(url) == LinkRoute::External {
                    let url = url.to_string();
                    self.open_external(&url);
                    return;
                }
            }
        }
        self.transition(|nav| nav.navigate(target, params));
    }

    pub fn go_back(&mut self) {
        self.transition(Navigator::go_back);
    }

    pub fn select_post(&mut self, post: Arc<crate::models::Post>) {
        self.transition(|nav| nav.select_post(post));
    }

    pub fn select_sub_menu_item(&mut self, item: &SubMenuItem) {
        let from = self.nav.screen_id();
        self.transition(|nav| nav.select_sub_menu_item(item, from));
    }

    /// Run a tile's action string. Unknown actions are logged and ignored.
    pub fn activate_tile(&mut self, tile: &Tile) {
        let action: TileAction = match tile.action.parse() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(tile = tile.id, error = %err, "Tile ignored");
                return;
            }
        };

        match action {
            TileAction::ComingSoon => self.set_status(COMING_SOON_TEXT, StatusKind::Info),
            TileAction::Logout => {
                self.confirm_logout = true;
                self.mark_dirty();
            }
            TileAction::Navigate(NavTarget::Login) if self.nav.is_logged_in() => {
                self.navigate(NavTarget::Account, NavParams::none());
            }
            TileAction::Navigate(target) => {
                let params = NavParams {
                    slug: tile.slug.map(str::to_string),
                    title: Some(tile.target_title().to_string()),
                    url: tile.web_url(self.content.base_url()),
                };
                self.navigate(target, params);
            }
        }
    }

    pub fn submenu_items(&self) -> &'static [SubMenuItem] {
        match self.nav.screen() {
            Screen::SubMenu(kind) => kind.items(),
            _ => &[],
        }
    }

    pub fn account_tile_count(&self) -> usize {
        tiles::account_tiles().count()
    }

    pub fn selected_account_tile(&self) -> Option<&'static Tile> {
        tiles::account_tiles().nth(self.account.index)
    }

    // ------------------------------------------------------------------
    // Screen entry
    // ------------------------------------------------------------------

    fn on_screen_entered(&mut self) {
        let screen = self.nav.screen().clone();
        tracing::debug!(screen = ?screen.id(), "Entered screen");
        match screen {
            Screen::Blog => self.load_posts(),
            Screen::PostDetail { post } => {
                self.post.show(post.id.to_string(), Document::from_post(&post));
            }
            Screen::PageDetail { slug, .. } => self.load_page(slug),
            Screen::WebView { url, .. } => self.load_web_page(url),
            Screen::Health => {
                self.health_view.input = None;
                self.reload_health();
            }
            Screen::Login => self.login = LoginView::default(),
            Screen::SubMenu(kind) => self.submenu.clamp(kind.items().len()),
            Screen::Home | Screen::Settings | Screen::Account => {}
        }
    }

    /// Fetch the blog list. Not deduplicated: a second call while one is in
    /// flight issues another request and the last reply wins.
    pub fn load_posts(&mut self) {
        self.blog.begin_load();
        let client = self.content.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_posts().await;
            let _ = tx.send(AppMessage::PostsLoaded(result));
        });
    }

    fn load_page(&mut self, slug: String) {
        self.page.begin(slug.clone());
        let client = self.content.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_page_by_slug(&slug).await;
            let _ = tx.send(AppMessage::PageLoaded { slug, result });
        });
    }

    /// Web view content is only fetched for pages on the content site.
    fn load_web_page(&mut self, url: String) {
        let Some(slug) = self.content.slug_for_url(&url) else {
            self.web.clear(url);
            return;
        };
        self.web.begin(url.clone());
        let client = self.content.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_page_by_slug(&slug).await;
            let _ = tx.send(AppMessage::WebPageLoaded { url, result });
        });
    }

    /// Retry the failed fetch of the current screen.
    pub fn retry(&mut self) {
        match self.nav.screen().clone() {
            Screen::Blog => self.load_posts(),
            Screen::PageDetail { slug, .. } => self.load_page(slug),
            Screen::WebView { url, .. } => self.load_web_page(url),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Apply a background result.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PostsLoaded(Ok(posts)) => {
                self.blog.posts = posts.into_iter().map(Arc::new).collect();
                self.blog.loading = false;
                self.blog.error = None;
                self.blog.cursor.clamp(self.blog.posts.len());
            }
            AppMessage::PostsLoaded(Err(err)) => {
                let err = AppError::from(err);
                tracing::warn!(code = err.error_code(), error = %err, "Blog load failed");
                self.blog.posts.clear();
                self.blog.loading = false;
                self.blog.error = Some(LoadFailure::from_error(&err));
            }
            AppMessage::PageLoaded { slug, result } => {
                if self.page.key != slug {
                    tracing::debug!(slug, "Dropping page result for a screen no longer shown");
                    return;
                }
                self.page.state = LoadState::from_result(result.map(|p| Document::from_page(&p)));
            }
            AppMessage::WebPageLoaded { url, result } => {
                if self.web.key != url {
                    tracing::debug!(url, "Dropping web page result for a screen no longer shown");
                    return;
                }
                self.web.state = LoadState::from_result(result.map(|p| Document::from_page(&p)));
            }
        }
    }

    // ------------------------------------------------------------------
    // Links
    // ------------------------------------------------------------------

    pub fn open_external(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => self.set_status("Megnyitva a böngészőben.", StatusKind::Info),
            Err(err) => {
                tracing::warn!(url, error = %err, "Could not open browser");
                self.set_status("Nem sikerült megnyitni a böngészőt.", StatusKind::Error);
            }
        }
    }

    fn current_document(&self) -> Option<&Document> {
        match self.nav.screen() {
            Screen::PostDetail { .. } => self.post.document(),
            Screen::PageDetail { .. } => self.page.document(),
            Screen::WebView { .. } => self.web.document(),
            _ => None,
        }
    }

    /// Follow the `[number]` link of the open document.
    pub fn follow_link(&mut self, number: usize) {
        let Some(link) = self.current_document().and_then(|d| d.body.link(number)).cloned() else {
            return;
        };
        let title = if link.text.is_empty() {
            link.href.clone()
        } else {
            link.text
        };
        self.navigate(NavTarget::WebView, NavParams::web(link.href, title));
    }

    /// Open the current post, page or web view in the system browser.
    pub fn open_current_in_browser(&mut self) {
        let url = match self.nav.screen() {
            Screen::PostDetail { post } => post.link.clone(),
            Screen::PageDetail { slug, .. } => self.content.page_web_url(slug),
            Screen::WebView { url, .. } => url.clone(),
            _ => return,
        };
        if url.is_empty() {
            return;
        }
        self.open_external(&url);
    }

    // ------------------------------------------------------------------
    // Login
    // ------------------------------------------------------------------

    pub fn open_login_page(&mut self) {
        match self.auth.open_login_page() {
            Ok(()) => {
                self.login.browser_opened = true;
                self.login.message = Some(StatusLine::new(
                    "A bejelentkezés a böngészőben folytatódik.",
                    StatusKind::Info,
                    self.tick_count,
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not open login page");
                self.login.message = Some(StatusLine::new(
                    format!("Nyisd meg kézzel: {}", self.auth.login_url()),
                    StatusKind::Error,
                    self.tick_count,
                ));
            }
        }
        self.mark_dirty();
    }

    /// Treat `url` as a page the login browser landed on.
    pub fn submit_landed_url(&mut self, url: &str) {
        match self.auth.observe_url(url) {
            Ok(true) => {
                self.login = LoginView::default();
                self.transition(Navigator::login_success);
            }
            Ok(false) => {
                self.login.message = Some(StatusLine::new(
                    "Ez a cím még nem a tagoknak szóló oldal. Jelentkezz be, majd másold be újra.",
                    StatusKind::Error,
                    self.tick_count,
                ));
            }
            Err(err) => {
                let err = AppError::from(err);
                tracing::error!(code = err.error_code(), error = %err, "Could not persist login");
                self.login.message = Some(StatusLine::new(
                    err.user_message(),
                    StatusKind::Error,
                    self.tick_count,
                ));
            }
        }
        self.mark_dirty();
    }

    pub fn logout(&mut self) {
        self.confirm_logout = false;
        self.auth.logout();
        self.transition(Navigator::logout);
    }

    // ------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------

    pub fn reload_health(&mut self) {
        match self.health.load(self.today()) {
            Ok(record) => self.health_view.record = record,
            Err(err) => {
                let err = AppError::from(err);
                tracing::warn!(code = err.error_code(), error = %err, "Health load failed");
                self.set_health_message(err.user_message(), StatusKind::Error);
            }
        }
    }

    pub fn add_water(&mut self) {
        match self.health.add_water(self.today()) {
            Ok(total) => {
                self.health_view.record.water_liters = total;
                self.set_health_message(format!("Vízbevitel: {:.2} L", total), StatusKind::Success);
            }
            Err(err) => {
                let err = AppError::from(err);
                tracing::warn!(code = err.error_code(), error = %err, "Water save failed");
                self.set_health_message(err.user_message(), StatusKind::Error);
            }
        }
    }

    /// Save the text typed for the selected field. A rejected value keeps
    /// the input open.
    pub fn save_health_input(&mut self) {
        let Some(input) = self.health_view.input.clone() else {
            return;
        };
        let today = self.today();
        let result = match self.health_view.field {
            HealthField::Weight => self.health.save_weight(&input).map(|_| ()),
            HealthField::Sleep => self.health.save_sleep(&input, today).map(|_| ()),
            HealthField::Steps => self.health.save_manual_steps(&input, today).map(|_| ()),
            HealthField::Water => Ok(()),
        };
        match result {
            Ok(()) => {
                self.health_view.input = None;
                self.reload_health();
                self.set_health_message("Mentve.", StatusKind::Success);
            }
            Err(err) => {
                tracing::info!(code = err.error_code(), error = %err, "Health input rejected");
                if !matches!(err, AppError::Validation(_)) {
                    self.health_view.input = None;
                }
                self.set_health_message(err.user_message(), StatusKind::Error);
            }
        }
    }

    fn set_health_message(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.health_view.message = Some(StatusLine::new(text, kind, self.tick_count));
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn toggle_reminder(&mut self) {
        match self.reminders.toggle() {
            Ok(true) => self.set_status(
                format!(
                    "Napi emlékeztető bekapcsolva ({}).",
                    self.reminders.settings().time_label()
                ),
                StatusKind::Success,
            ),
            Ok(false) => self.set_status("Napi emlékeztető kikapcsolva.", StatusKind::Success),
            Err(err) => {
                let err = AppError::from(err);
                self.set_status(err.user_message(), StatusKind::Error);
            }
        }
        self.schedule = ReminderSchedule::starting_at((self.clock)(), &self.reminders.settings());
    }

    pub fn shift_reminder_time(&mut self, minutes: i64) {
        if let Err(err) = self.reminders.shift_time(minutes) {
            let err = AppError::from(err);
            self.set_status(err.user_message(), StatusKind::Error);
        }
        self.schedule = ReminderSchedule::starting_at((self.clock)(), &self.reminders.settings());
        self.mark_dirty();
    }

    /// Whether the daily reminder should fire now. Records the firing.
    pub fn check_reminder(&mut self) -> bool {
        let settings = self.reminders.settings();
        self.schedule.poll(&settings, (self.clock)())
    }

    // ------------------------------------------------------------------
    // Status and ticks
    // ------------------------------------------------------------------

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusLine::new(text, kind, self.tick_count));
        self.mark_dirty();
    }

    /// Advance animations, expire messages, poll the reminder.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let tick = self.tick_count;

        for slot in [
            &mut self.status,
            &mut self.health_view.message,
            &mut self.login.message,
        ] {
            if slot.as_ref().is_some_and(|s| s.is_expired(tick)) {
                *slot = None;
                self.needs_redraw = true;
            }
        }

        if self.is_loading() {
            self.needs_redraw = true;
        }

        if tick % REMINDER_CHECK_TICKS == 0 && self.check_reminder() {
            notifications::notify_daily_reminder();
        }
    }

    /// A fetch for the current screen is outstanding.
    pub fn is_loading(&self) -> bool {
        match self.nav.screen() {
            Screen::Blog => self.blog.loading,
            Screen::PageDetail { .. } => self.page.state.is_loading(),
            Screen::WebView { .. } => self.web.state.is_loading(),
            _ => false,
        }
    }

    /// Title of the open submenu, if any.
    pub fn submenu_kind(&self) -> Option<SubMenuKind> {
        match self.nav.screen() {
            Screen::SubMenu(kind) => Some(*kind),
            _ => None,
        }
    }
}
