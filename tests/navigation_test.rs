//! Navigator transitions driven through every short operation sequence.

use std::sync::Arc;

use konyhanyelv::app::{NavParams, NavTarget, Navigator, Screen, ScreenId};
use konyhanyelv::models::{Post, Rendered, SubMenuKind};

fn post(id: u64) -> Arc<Post> {
    Arc::new(Post {
        id,
        date: "2024-01-05T09:30:00".to_string(),
        link: String::new(),
        title: Rendered::new(format!("Post {}", id)),
        excerpt: Rendered::default(),
        content: Rendered::default(),
    })
}

#[derive(Debug, Clone)]
enum Op {
    Navigate(NavTarget, NavParams),
    SelectPost,
    SelectGiftItem,
    Back,
    LoginSuccess,
    Logout,
}

fn ops() -> Vec<Op> {
    vec![
        Op::Navigate(NavTarget::Home, NavParams::none()),
        Op::Navigate(NavTarget::Blog, NavParams::none()),
        Op::Navigate(NavTarget::Page, NavParams::page("rolunk", "Rólunk")),
        Op::Navigate(NavTarget::Page, NavParams::none()),
        Op::Navigate(NavTarget::SubMenu(SubMenuKind::Gift), NavParams::none()),
        Op::Navigate(NavTarget::Account, NavParams::none()),
        Op::Navigate(NavTarget::Health, NavParams::none()),
        Op::Navigate(
            NavTarget::WebView,
            NavParams::web("https://example.org/profil/?app=1", "Profil"),
        ),
        Op::Navigate(NavTarget::WebView, NavParams::none()),
        Op::SelectPost,
        Op::SelectGiftItem,
        Op::Back,
        Op::LoginSuccess,
        Op::Logout,
    ]
}

fn apply(nav: &mut Navigator, op: &Op) {
    match op {
        Op::Navigate(target, params) => nav.navigate(*target, params.clone()),
        Op::SelectPost => nav.select_post(post(1)),
        Op::SelectGiftItem => {
            let from = nav.screen_id();
            nav.select_sub_menu_item(&SubMenuKind::Gift.items()[0], from);
        }
        Op::Back => nav.go_back(),
        Op::LoginSuccess => nav.login_success(),
        Op::Logout => nav.logout(),
    }
}

fn assert_selection_invariant(nav: &Navigator, history: &[Op]) {
    let screen = nav.screen();
    assert_eq!(
        nav.selected_post().is_some(),
        matches!(screen, Screen::PostDetail { .. }),
        "post selection out of step after {:?}",
        history
    );
    assert_eq!(
        nav.selected_page().is_some(),
        matches!(screen, Screen::PageDetail { .. }),
        "page selection out of step after {:?}",
        history
    );
    assert_eq!(
        nav.web_view_target().is_some(),
        matches!(screen, Screen::WebView { .. }),
        "web view target out of step after {:?}",
        history
    );
}

#[test]
fn test_selection_invariant_over_all_sequences_of_three() {
    let ops = ops();
    for a in &ops {
        for b in &ops {
            for c in &ops {
                let mut nav = Navigator::new();
                let history = [a.clone(), b.clone(), c.clone()];
                for (i, op) in history.iter().enumerate() {
                    apply(&mut nav, op);
                    assert_selection_invariant(&nav, &history[..=i]);
                }
            }
        }
    }
}

#[test]
fn test_back_never_lands_on_payload_screen_without_payload() {
    let ops = ops();
    for a in &ops {
        for b in &ops {
            let mut nav = Navigator::new();
            apply(&mut nav, a);
            apply(&mut nav, b);
            nav.go_back();
            nav.go_back();
            assert_selection_invariant(&nav, &[a.clone(), b.clone(), Op::Back, Op::Back]);
        }
    }
}

#[test]
fn test_back_from_post_detail_goes_to_blog() {
    let mut nav = Navigator::new();
    nav.navigate(NavTarget::Blog, NavParams::none());
    nav.select_post(post(3));
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Blog);
    assert!(nav.selected_post().is_none());
}

#[test]
fn test_page_detail_returns_to_submenu_it_came_from() {
    let mut nav = Navigator::new();
    nav.navigate(NavTarget::SubMenu(SubMenuKind::Services), NavParams::none());
    let item = SubMenuKind::Services.items()[1];
    nav.select_sub_menu_item(&item, nav.screen_id());
    assert_eq!(nav.selected_page(), Some((item.slug, item.title)));
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::SubMenu(SubMenuKind::Services));
}

#[test]
fn test_blog_from_account_returns_to_account_once() {
    let mut nav = Navigator::with_login(true);
    nav.navigate(NavTarget::Account, NavParams::none());
    nav.navigate(NavTarget::Blog, NavParams::none());
    nav.select_post(post(9));
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Blog);
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Account);
    assert_eq!(nav.previous(), ScreenId::Home);

    // A later plain visit to Blog goes back home.
    nav.go_back();
    nav.navigate(NavTarget::Blog, NavParams::none());
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Home);
}

#[test]
fn test_web_view_from_post_detail_returns_to_post() {
    let mut nav = Navigator::new();
    nav.navigate(NavTarget::Blog, NavParams::none());
    nav.select_post(post(1));
    nav.navigate(
        NavTarget::WebView,
        NavParams::web("https://example.org/x/", "X"),
    );
    nav.go_back();
    assert_eq!(nav.selected_post().map(|p| p.id), Some(1));
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Blog);
}

#[test]
fn test_page_links_unwind_in_order() {
    let mut nav = Navigator::with_login(true);
    nav.navigate(NavTarget::Account, NavParams::none());
    nav.navigate(NavTarget::Page, NavParams::page("rolunk", "Rólunk"));
    nav.navigate(NavTarget::Page, NavParams::page("kapcsolat", "Kapcsolat"));
    nav.navigate(
        NavTarget::WebView,
        NavParams::web("https://other.org/", "Other"),
    );

    nav.go_back();
    assert_eq!(nav.selected_page(), Some(("kapcsolat", "Kapcsolat")));
    nav.go_back();
    assert_eq!(nav.selected_page(), Some(("rolunk", "Rólunk")));
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Account);
    assert_eq!(nav.previous(), ScreenId::Home);
}

#[test]
fn test_login_and_logout() {
    let mut nav = Navigator::new();
    nav.navigate(NavTarget::Login, NavParams::none());
    nav.login_success();
    assert!(nav.is_logged_in());
    assert_eq!(nav.screen(), &Screen::Account);
    nav.navigate(NavTarget::Health, NavParams::none());
    nav.go_back();
    assert_eq!(nav.screen(), &Screen::Account);
    nav.logout();
    assert!(!nav.is_logged_in());
    assert_eq!(nav.screen(), &Screen::Home);
}
