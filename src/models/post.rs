//! WordPress REST API payloads.
//!
//! Only the fields the client reads are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};

use crate::content::html;

/// A `{ "rendered": "<html>" }` wrapper as returned by the WP REST API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
        }
    }

    /// Rendered HTML as plain text.
    pub fn plain(&self) -> String {
        html::to_plain_text(&self.rendered)
    }
}

/// A blog post from `/wp-json/wp/v2/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Site-local timestamp without zone, e.g. `2024-01-05T09:30:00`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
}

impl Post {
    pub fn title_text(&self) -> String {
        self.title.plain()
    }

    pub fn excerpt_text(&self) -> String {
        self.excerpt.plain()
    }

    /// Publication date in Hungarian long form.
    pub fn display_date(&self) -> String {
        html::format_hu_date(&self.date)
    }
}

/// A static page from `/wp-json/wp/v2/pages?slug=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
}

impl Page {
    pub fn title_text(&self) -> String {
        self.title.plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_wordpress_shape() {
        let json = r#"{
            "id": 42,
            "date": "2024-01-05T09:30:00",
            "date_gmt": "2024-01-05T08:30:00",
            "link": "https://example.org/recept/",
            "title": {"rendered": "Kal&aacute;cs &amp; kaka&oacute;"},
            "excerpt": {"rendered": "<p>R&ouml;vid le&iacute;r&aacute;s [&hellip;]</p>\n", "protected": false},
            "content": {"rendered": "<p>Teljes sz&ouml;veg</p>", "protected": false},
            "author": 1
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.title_text(), "Kalács & kakaó");
        assert_eq!(post.excerpt_text(), "Rövid leírás ...");
        assert_eq!(post.display_date(), "2024. január 5.");
    }

    #[test]
    fn test_page_missing_fields_default() {
        let page: Page = serde_json::from_str(r#"{"id": 7, "slug": "rolam"}"#).unwrap();
        assert_eq!(page.slug, "rolam");
        assert_eq!(page.title_text(), "");
        assert!(page.content.rendered.is_empty());
    }
}
