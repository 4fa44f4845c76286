//! Post detail, page detail and web view: a scrollable rendered document.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::content::Block as ContentBlock;
use crate::view_state::{Document, DocumentView, LoadState};

use super::helpers::{
    estimate_wrapped_line_count, inner_rect, render_failure, render_loading,
};
use super::theme::{title_style, COLOR_DIM, COLOR_LINK, COLOR_MUTED, COLOR_SECONDARY};

pub const OPEN_ORIGINAL_TEXT: &str = "Megnyitás az eredeti oldalon";
pub const PAGE_ERROR_HEADLINE: &str = "Hiba az oldal betöltésekor";

/// What a document view shows before (or instead of) fetched content.
pub struct Placeholder<'a> {
    pub title: &'a str,
    /// Shown under the title, e.g. the web view URL
    pub subtitle: Option<&'a str>,
}

pub fn render_document_view(
    frame: &mut Frame,
    area: Rect,
    view: &mut DocumentView,
    placeholder: Placeholder<'_>,
    tick: u64,
) {
    let inner = inner_rect(area, 1);
    match &view.state {
        LoadState::Loading => {
            render_loading(frame, inner, "Betöltés...", tick);
        }
        LoadState::Failed(failure) => {
            render_failure(frame, inner, PAGE_ERROR_HEADLINE, failure);
        }
        LoadState::Idle => {
            let lines = placeholder_lines(&placeholder);
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
        LoadState::Loaded(document) => {
            let mut lines = document_lines(document, inner.width as usize);
            if let Some(subtitle) = placeholder.subtitle {
                lines.insert(
                    1,
                    Line::from(Span::styled(
                        subtitle.to_string(),
                        Style::default().fg(COLOR_DIM),
                    )),
                );
            }
            let total = estimate_wrapped_line_count(&lines, inner.width as usize);
            let max = total.saturating_sub(inner.height as usize);
            view.scroll.set_max(max.min(u16::MAX as usize) as u16);
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((view.scroll.offset, 0)),
                inner,
            );
        }
    }
}

fn placeholder_lines(placeholder: &Placeholder<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        placeholder.title.to_string(),
        title_style(),
    ))];
    if let Some(subtitle) = placeholder.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(COLOR_LINK),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ez az oldal a böngészőben jeleníthető meg.",
        Style::default().fg(COLOR_MUTED),
    )));
    lines.push(Line::from(vec![
        Span::styled("[o] ", Style::default().fg(Color::White)),
        Span::styled("Megnyitás böngészőben", Style::default().fg(COLOR_SECONDARY)),
    ]));
    lines
}

/// Lines for a loaded document, before wrapping.
pub fn document_lines(document: &Document, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        document.title.clone(),
        title_style(),
    ))];
    if let Some(meta) = &document.meta {
        lines.push(Line::from(Span::styled(
            meta.clone(),
            Style::default().fg(COLOR_SECONDARY),
        )));
    }
    lines.push(Line::from(""));

    for block in &document.body.blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                let style = if *level <= 2 {
                    title_style()
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(text.clone(), style)));
                lines.push(Line::from(""));
            }
            ContentBlock::Paragraph(text) => {
                lines.push(Line::from(text.clone()));
                lines.push(Line::from(""));
            }
            ContentBlock::ListItem { marker, text } => {
                lines.push(Line::from(format!("  {} {}", marker, text)));
            }
            ContentBlock::Quote(text) => {
                lines.push(Line::from(Span::styled(
                    format!("│ {}", text),
                    Style::default()
                        .fg(COLOR_MUTED)
                        .add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(""));
            }
            ContentBlock::Image { alt } => {
                let label = if alt.is_empty() {
                    "[kép]".to_string()
                } else {
                    format!("[kép: {}]", alt)
                };
                lines.push(Line::from(Span::styled(label, Style::default().fg(COLOR_DIM))));
            }
            ContentBlock::Rule => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(width.min(60)),
                    Style::default().fg(COLOR_DIM),
                )));
            }
        }
    }

    if !document.body.links.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Hivatkozások", title_style())));
        for link in &document.body.links {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", link.number), Style::default().fg(COLOR_LINK)),
                Span::raw(link.text.clone()),
                Span::styled(format!("  {}", link.href), Style::default().fg(COLOR_DIM)),
            ]));
        }
    }

    if !document.link.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[o] ", Style::default().fg(Color::White)),
            Span::styled(OPEN_ORIGINAL_TEXT, Style::default().fg(COLOR_SECONDARY)),
        ]));
    }
    lines
}
