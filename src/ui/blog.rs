//! Blog list.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

use super::helpers::{inner_rect, render_failure, render_loading, truncate_string};
use super::theme::{selected_style, COLOR_MUTED, COLOR_SECONDARY};

pub const LOADING_TEXT: &str = "Bejegyzések betöltése...";
pub const ERROR_HEADLINE: &str = "Hiba a bejegyzések betöltésekor";
pub const EMPTY_TEXT: &str = "Nincsenek bejegyzések";

/// Rows per post card: title, date, excerpt, spacer.
const CARD_HEIGHT: usize = 4;

pub fn render_blog(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);
    let blog = &app.blog;

    if blog.loading && blog.posts.is_empty() {
        render_loading(frame, inner, LOADING_TEXT, app.tick_count);
        return;
    }
    if let Some(failure) = &blog.error {
        render_failure(frame, inner, ERROR_HEADLINE, failure);
        return;
    }
    if blog.posts.is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_TEXT)
                .style(Style::default().fg(COLOR_MUTED))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(blog.posts.len() * CARD_HEIGHT);
    for (i, post) in blog.posts.iter().enumerate() {
        let selected = i == blog.cursor.index;
        let marker = if selected { "› " } else { "  " };
        let title_style = if selected {
            selected_style()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(truncate_string(&post.title_text(), width), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", post.display_date()),
            Style::default().fg(COLOR_SECONDARY),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_string(&post.excerpt_text(), width.saturating_sub(2))),
            Style::default().fg(COLOR_MUTED),
        )));
        lines.push(Line::from(""));
    }

    let height = inner.height as usize;
    let selected_bottom = (blog.cursor.index + 1) * CARD_HEIGHT;
    let offset = selected_bottom.saturating_sub(height);
    frame.render_widget(
        Paragraph::new(lines).scroll((offset as u16, 0)),
        inner,
    );
}
