//! Home screen: greeting and the two-column tile grid.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, HOME_COLUMNS};
use crate::models::tiles::{home_tile_title, HOME_TILES};
use crate::models::{Tile, TileStyle};

use super::helpers::{inner_rect, truncate_string};
use super::theme::{
    selected_style, title_style, COLOR_ACCENT_RED, COLOR_BORDER, COLOR_MUTED, COLOR_PRIMARY,
    COLOR_SECONDARY,
};

const TILE_HEIGHT: u16 = 4;
const GREETING_HEIGHT: u16 = 3;

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);

    let greeting = vec![
        Line::from(Span::styled("Üdvözöllek!", title_style())),
        Line::from(Span::styled(
            "Válassz az alábbi lehetőségek közül",
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(greeting).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, GREETING_HEIGHT.min(inner.height)),
    );

    let grid = Rect::new(
        inner.x,
        inner.y + GREETING_HEIGHT,
        inner.width,
        inner.height.saturating_sub(GREETING_HEIGHT),
    );
    let column_width = grid.width / HOME_COLUMNS as u16;
    let logged_in = app.nav.is_logged_in();

    for (i, tile) in HOME_TILES.iter().enumerate() {
        let row = (i / HOME_COLUMNS) as u16;
        let col = (i % HOME_COLUMNS) as u16;
        let y = grid.y + row * TILE_HEIGHT;
        if y + TILE_HEIGHT > grid.y + grid.height {
            break;
        }
        let rect = Rect::new(grid.x + col * column_width, y, column_width, TILE_HEIGHT);
        let title = home_tile_title(tile, logged_in);
        render_tile(frame, rect, tile, title, app.home.index == i);
    }
}

/// One bordered tile: icon and title, subtitle below.
pub fn render_tile(frame: &mut Frame, area: Rect, tile: &Tile, title: &str, selected: bool) {
    let border_color = match tile.style {
        TileStyle::Light => COLOR_BORDER,
        TileStyle::Accent | TileStyle::Danger => COLOR_ACCENT_RED,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if selected { COLOR_PRIMARY } else { border_color }));

    let room = area.width.saturating_sub(6) as usize;
    let title_line = Line::from(vec![
        Span::raw(format!("{} ", tile.icon)),
        Span::raw(truncate_string(title, room)),
    ]);
    let mut lines = vec![title_line];
    if let Some(subtitle) = tile.subtitle {
        lines.push(Line::from(Span::styled(
            truncate_string(subtitle, room),
            Style::default().fg(COLOR_SECONDARY),
        )));
    }

    let style = if selected {
        selected_style()
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(lines).style(style).block(block), area);
}
