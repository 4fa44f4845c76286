//! Helper functions and shared widgets for UI rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::view_state::{LoadFailure, StatusKind, StatusLine};

use super::theme::{
    header_style, COLOR_ACCENT_RED, COLOR_BORDER, COLOR_DIM, COLOR_MUTED, COLOR_SECONDARY,
    COLOR_WHITE,
};

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const BACK_LABEL: &str = "← Vissza";

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to `max_width` display columns, adding "..." if truncated.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Rows `lines` occupy once wrapped to `viewport_width`.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }

    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            if width == 0 {
                1
            } else {
                width.div_ceil(viewport_width)
            }
        })
        .sum()
}

/// Split the frame into header, body and footer.
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status / keybinds
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Header bar: back label on the left (except on home), title centered.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, show_back: bool) {
    frame.render_widget(Block::default().style(header_style()), area);

    let back_width = if show_back {
        BACK_LABEL.width() as u16 + 2
    } else {
        0
    };
    if show_back {
        frame.render_widget(
            Paragraph::new(format!(" {}", BACK_LABEL)).style(header_style()),
            Rect::new(area.x, area.y, back_width.min(area.width), 1),
        );
    }

    let room = area.width.saturating_sub(back_width * 2) as usize;
    let title = truncate_string(title, room);
    frame.render_widget(
        Paragraph::new(title)
            .style(header_style())
            .alignment(Alignment::Center),
        Rect::new(
            area.x + back_width,
            area.y,
            area.width.saturating_sub(back_width * 2),
            1,
        ),
    );
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => COLOR_WHITE,
        StatusKind::Success => COLOR_SECONDARY,
        StatusKind::Error => COLOR_ACCENT_RED,
    }
}

/// Footer: a live status message if there is one, otherwise key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, status: Option<&StatusLine>, hints: &[(&str, &str)]) {
    let line = match status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(status_color(status.kind)),
        )),
        None => hint_line(hints),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// `[key] action` pairs.
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(COLOR_WHITE),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

/// One-line inline message.
pub fn status_paragraph(status: &StatusLine) -> Paragraph<'static> {
    Paragraph::new(status.text.clone())
        .style(Style::default().fg(status_color(status.kind)))
        .wrap(Wrap { trim: true })
}

/// Centered loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, text: &str, tick: u64) {
    let para = Paragraph::new(format!("{} {}", spinner(tick), text))
        .style(Style::default().fg(COLOR_MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(para, centered_rect(area.width, 1, area));
}

/// Centered error box with an optional retry hint.
pub fn render_failure(frame: &mut Frame, area: Rect, headline: &str, failure: &LoadFailure) {
    let mut lines = vec![
        Line::from(Span::styled(
            headline.to_string(),
            Style::default()
                .fg(COLOR_ACCENT_RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            failure.message.clone(),
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    if failure.retryable {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[r] ", Style::default().fg(COLOR_WHITE)),
            Span::styled("Újrapróbálás", Style::default().fg(COLOR_SECONDARY)),
        ]));
    }
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, centered_rect(area.width.min(70), 6, area));
}

/// Modal yes/no box drawn over everything else.
pub fn render_confirm_dialog(frame: &mut Frame, question: &str) {
    let area = centered_rect(48, 5, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Kijelentkezés ");
    let body = vec![
        Line::from(question.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[i] ", Style::default().fg(COLOR_WHITE)),
            Span::styled("Igen   ", Style::default().fg(COLOR_ACCENT_RED)),
            Span::styled("[n] ", Style::default().fg(COLOR_WHITE)),
            Span::styled("Mégse", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
