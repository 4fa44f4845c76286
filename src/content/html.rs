//! HTML normalization for WordPress `rendered` fields.
//!
//! - [`decode_entities`] - numeric and named character references
//! - [`strip_tags`] / [`to_plain_text`] - one-line text for titles and excerpts
//! - [`render_blocks`] - block list for the post and page detail views
//! - [`format_hu_date`] - `2024. január 5.`

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("Invalid entity regex pattern")
});

/// Content that never renders as text.
static HIDDEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("Invalid hidden-content regex pattern")
});

/// Tags that end a line of text; replaced by a space when stripping.
static BLOCK_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(p|div|br|li|ul|ol|h[1-6]|blockquote|tr|td|th|figure|figcaption|section|article|hr)\b[^>]*>")
        .expect("Invalid block tag regex pattern")
});

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid tag regex pattern"));

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

/// Opening or closing tag with its name and raw attributes.
static ELEMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").expect("Invalid element regex pattern")
});

static HREF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid href regex pattern")
});

static ALT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\balt\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid alt regex pattern")
});

fn named_entity(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "nbsp" => "\u{a0}",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "hellip" => "...",
        "ndash" => "–",
        "mdash" => "—",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "bdquo" => "„",
        "laquo" => "«",
        "raquo" => "»",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "euro" => "€",
        "pound" => "£",
        "yen" => "¥",
        "cent" => "¢",
        "deg" => "°",
        "plusmn" => "±",
        "times" => "×",
        "divide" => "÷",
        "frac12" => "½",
        "frac14" => "¼",
        "frac34" => "¾",
        "aacute" => "á",
        "Aacute" => "Á",
        "eacute" => "é",
        "Eacute" => "É",
        "iacute" => "í",
        "Iacute" => "Í",
        "oacute" => "ó",
        "Oacute" => "Ó",
        "ouml" => "ö",
        "Ouml" => "Ö",
        "odblac" => "ő",
        "Odblac" => "Ő",
        "uacute" => "ú",
        "Uacute" => "Ú",
        "uuml" => "ü",
        "Uuml" => "Ü",
        "udblac" => "ű",
        "Udblac" => "Ű",
        _ => return None,
    };
    Some(decoded)
}

fn decode_reference(body: &str) -> Option<String> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    named_entity(body).map(str::to_string)
}

/// Decode HTML character references in a single pass.
///
/// Unknown names and invalid code points are left as written, so
/// `&amp;lt;` becomes `&lt;` and not `<`.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    ENTITY_REGEX
        .replace_all(input, |caps: &Captures| {
            decode_reference(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Remove tags, comments, scripts and styles. Block-level tags leave a space
/// behind so adjacent paragraphs don't run together.
pub fn strip_tags(html: &str) -> String {
    let visible = HIDDEN_REGEX.replace_all(html, "");
    let spaced = BLOCK_TAG_REGEX.replace_all(&visible, " ");
    TAG_REGEX.replace_all(&spaced, "").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

/// Single-line plain text: strip, decode, shorten the WordPress "read more"
/// marker to `...`, collapse whitespace and trim.
///
/// Tags are stripped again after decoding, so escaped markup never reaches
/// the screen.
pub fn to_plain_text(html: &str) -> String {
    let decoded = strip_tags(&decode_entities(&strip_tags(html)));
    let shortened = decoded.replace("[…]", "...").replace("[...]", "...");
    collapse_whitespace(&shortened)
}

/// A displayable chunk of a rendered page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// `marker` is `•` for unordered lists and `1.`, `2.`... for ordered ones
    ListItem { marker: String, text: String },
    Quote(String),
    Image { alt: String },
    Rule,
}

/// A hyperlink found in the content. `number` matches the `[n]` marker left
/// in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub number: usize,
    pub text: String,
    pub href: String,
}

/// Result of [`render_blocks`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedHtml {
    pub blocks: Vec<Block>,
    pub links: Vec<Link>,
}

impl RenderedHtml {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn link(&self, number: usize) -> Option<&Link> {
        self.links.iter().find(|link| link.number == number)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum BlockKind {
    Paragraph,
    Heading(u8),
    ListItem(String),
}

#[derive(Debug)]
struct BlockBuilder {
    out: RenderedHtml,
    text: String,
    kind: BlockKind,
    quote_depth: usize,
    /// One entry per open list; `Some(n)` for ordered lists
    lists: Vec<Option<usize>>,
    open_link: Option<(String, usize)>,
}

impl BlockBuilder {
    fn new() -> Self {
        Self {
            out: RenderedHtml::default(),
            text: String::new(),
            kind: BlockKind::Paragraph,
            quote_depth: 0,
            lists: Vec::new(),
            open_link: None,
        }
    }

    fn push_text(&mut self, raw: &str) {
        self.text.push_str(raw);
    }

    fn flush(&mut self) {
        let text = collapse_whitespace(&decode_entities(&self.text));
        self.text.clear();
        if let Some((_, start)) = self.open_link.as_mut() {
            *start = 0;
        }
        if text.is_empty() {
            return;
        }
        let block = match &self.kind {
            BlockKind::Heading(level) => Block::Heading {
                level: *level,
                text,
            },
            BlockKind::ListItem(marker) => Block::ListItem {
                marker: marker.clone(),
                text,
            },
            BlockKind::Paragraph if self.quote_depth > 0 => Block::Quote(text),
            BlockKind::Paragraph => Block::Paragraph(text),
        };
        self.out.blocks.push(block);
    }

    fn end_block(&mut self) {
        self.flush();
        self.kind = BlockKind::Paragraph;
    }

    fn tag(&mut self, name: &str, closing: bool, attrs: &str) {
        match name {
            "p" | "div" | "section" | "article" | "figure" | "figcaption" | "tr" | "table"
            | "pre" => self.end_block(),
            "br" => self.text.push('\n'),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.end_block();
                if !closing {
                    let level = name[1..].parse().unwrap_or(1);
                    self.kind = BlockKind::Heading(level);
                }
            }
            "ul" | "ol" => {
                self.end_block();
                if closing {
                    self.lists.pop();
                } else {
                    self.lists.push((name == "ol").then_some(0));
                }
            }
            "li" => {
                self.end_block();
                if !closing {
                    let marker = match self.lists.last_mut() {
                        Some(Some(counter)) => {
                            *counter += 1;
                            format!("{}.", counter)
                        }
                        _ => "•".to_string(),
                    };
                    self.kind = BlockKind::ListItem(marker);
                }
            }
            "blockquote" => {
                self.end_block();
                if closing {
                    self.quote_depth = self.quote_depth.saturating_sub(1);
                } else {
                    self.quote_depth += 1;
                }
            }
            "a" if !closing => {
                self.open_link = capture_attr(&HREF_REGEX, attrs).map(|href| (href, self.text.len()));
            }
            "a" => self.close_link(),
            "img" => {
                self.flush();
                let alt = capture_attr(&ALT_REGEX, attrs)
                    .map(|alt| collapse_whitespace(&decode_entities(&alt)))
                    .unwrap_or_default();
                self.out.blocks.push(Block::Image { alt });
            }
            "hr" => {
                self.end_block();
                self.out.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn close_link(&mut self) {
        let Some((href, start)) = self.open_link.take() else {
            return;
        };
        let href = decode_entities(href.trim());
        if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
            return;
        }
        let start = start.min(self.text.len());
        let text = collapse_whitespace(&decode_entities(&self.text[start..]));
        let number = self.out.links.len() + 1;
        self.out.links.push(Link { number, text, href });
        self.text.push_str(&format!(" [{}]", number));
    }

    fn finish(mut self) -> RenderedHtml {
        self.end_block();
        self.out
    }
}

fn capture_attr(regex: &Regex, attrs: &str) -> Option<String> {
    let caps = regex.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Split rich HTML into display blocks and collect its links.
///
/// Each link's text is followed by a `[n]` marker matching [`Link::number`].
pub fn render_blocks(html: &str) -> RenderedHtml {
    let visible = HIDDEN_REGEX.replace_all(html, "");
    let mut builder = BlockBuilder::new();
    let mut last = 0;

    for caps in ELEMENT_REGEX.captures_iter(&visible) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        builder.push_text(&visible[last..whole.start()]);
        last = whole.end();

        let closing = &caps[1] == "/";
        let name = caps[2].to_ascii_lowercase();
        builder.tag(&name, closing, &caps[3]);
    }
    builder.push_text(&visible[last..]);
    builder.finish()
}

const HU_MONTHS: [&str; 12] = [
    "január",
    "február",
    "március",
    "április",
    "május",
    "június",
    "július",
    "augusztus",
    "szeptember",
    "október",
    "november",
    "december",
];

/// Format a WordPress timestamp (`2024-01-05T09:30:00`) as `2024. január 5.`.
///
/// Anything that does not start with a `YYYY-MM-DD` date is returned as-is.
pub fn format_hu_date(timestamp: &str) -> String {
    let parsed = timestamp
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok());
    match parsed {
        Some(date) => format!(
            "{}. {} {}.",
            date.year(),
            HU_MONTHS[date.month0() as usize],
            date.day()
        ),
        None => timestamp.to_string(),
    }
}
