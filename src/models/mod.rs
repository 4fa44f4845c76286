//! Data types shared across the app.

mod post;
pub mod tiles;

pub use post::{Page, Post, Rendered};
pub use tiles::{AccountSection, SubMenuItem, SubMenuKind, Tile, TileStyle};
