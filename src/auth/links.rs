//! Where a URL should open.
//!
//! Shop pages (cart, checkout) must never render inside the app; they go
//! straight to the system browser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Path fragments that mark a checkout flow.
pub const CHECKOUT_KEYWORDS: [&str; 4] = ["kosar", "cart", "checkout", "penztar"];

static CHECKOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", CHECKOUT_KEYWORDS.join("|")))
        .expect("Invalid checkout regex pattern")
});

/// Routing decision for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRoute {
    /// Show on the in-app web view screen
    InApp,
    /// Hand to the system browser and stay on the current screen
    External,
}

/// Whether `url` belongs to the shop checkout flow.
pub fn is_checkout_url(url: &str) -> bool {
    CHECKOUT_REGEX.is_match(url)
}

/// Decides how URLs leave the current screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkPolicy;

impl LinkPolicy {
    pub fn route(&self, url: &str) -> LinkRoute {
        if is_checkout_url(url) {
            tracing::debug!(url, "Checkout link routed to system browser");
            LinkRoute::External
        } else {
            LinkRoute::InApp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_urls_are_external() {
        let policy = LinkPolicy;
        for url in [
            "https://example.org/kosar/",
            "https://example.org/CART",
            "https://example.org/checkout/?app=1",
            "https://example.org/Penztar/order",
        ] {
            assert_eq!(policy.route(url), LinkRoute::External, "{}", url);
        }
    }

    #[test]
    fn test_content_urls_stay_in_app() {
        let policy = LinkPolicy;
        assert_eq!(
            policy.route("https://example.org/tagoknak/?app=1"),
            LinkRoute::InApp
        );
        assert!(!is_checkout_url("https://example.org/receptkonyv/"));
    }
}
