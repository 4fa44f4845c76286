//! Remote content: the WordPress API client and HTML helpers.

pub mod client;
pub mod html;

pub use client::ContentClient;
pub use html::{decode_entities, render_blocks, strip_tags, to_plain_text, Block, Link, RenderedHtml};
