//! Submenus and the account screen.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::tiles::ACCOUNT_SECTIONS;
use crate::models::{SubMenuKind, TileStyle};

use super::helpers::inner_rect;
use super::theme::{selected_style, title_style, COLOR_ACCENT_RED, COLOR_MUTED, COLOR_SECONDARY};

pub fn render_submenu(frame: &mut Frame, area: Rect, app: &App, kind: SubMenuKind) {
    let inner = inner_rect(area, 1);
    let lines: Vec<Line> = kind
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!(" {}  {} ", item.icon, item.title);
            if i == app.submenu.index {
                Line::from(Span::styled(format!("›{}", text), selected_style()))
            } else {
                Line::from(format!(" {}", text))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Section headings with their tiles; the cursor runs over tiles only.
pub fn render_account(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut index = 0usize;

    for section in ACCOUNT_SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(section.title, title_style())));
        for tile in section.tiles {
            let selected = index == app.account.index;
            if selected {
                selected_line = lines.len();
            }
            let title_style = match (selected, tile.style) {
                (true, _) => selected_style(),
                (false, TileStyle::Accent | TileStyle::Danger) => {
                    Style::default().fg(COLOR_ACCENT_RED)
                }
                (false, TileStyle::Light) => Style::default(),
            };
            let mut spans = vec![
                Span::raw(if selected { "› " } else { "  " }),
                Span::styled(format!("{} {}", tile.icon, tile.title), title_style),
            ];
            if let Some(subtitle) = tile.subtitle {
                spans.push(Span::styled(
                    format!("  {}", subtitle),
                    Style::default().fg(COLOR_SECONDARY),
                ));
            }
            lines.push(Line::from(spans));
            index += 1;
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nincs elérhető tartalom",
            Style::default().fg(COLOR_MUTED),
        )));
    }

    let height = inner.height as usize;
    let offset = selected_line.saturating_sub(height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), inner);
}
