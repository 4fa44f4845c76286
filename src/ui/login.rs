use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;

use super::helpers::{inner_rect, status_paragraph};
use super::theme::{title_style, COLOR_BORDER, COLOR_LINK, COLOR_MUTED, COLOR_PRIMARY};

pub fn render_login_screen(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Instructions
            Constraint::Length(3), // URL input
            Constraint::Length(3), // Message
            Constraint::Min(0),
        ])
        .split(inner);

    let login_url = app.auth.login_url();
    let instructions = vec![
        Line::from(Span::styled("Bejelentkezés", title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "1. Nyomj Entert: a belépési oldal megnyílik a böngészőben.",
            Style::default().fg(COLOR_MUTED),
        )),
        Line::from(Span::styled(
            "2. Belépés után másold be ide a böngésző címsorát, majd Enter.",
            Style::default().fg(COLOR_MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(login_url, Style::default().fg(COLOR_LINK))),
    ];
    frame.render_widget(
        Paragraph::new(instructions).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.login.input.is_empty() {
            COLOR_BORDER
        } else {
            COLOR_PRIMARY
        }))
        .title(" Cím ");
    let input_text = if app.login.input.is_empty() {
        Line::from(Span::styled(
            "https://...",
            Style::default().fg(COLOR_MUTED),
        ))
    } else {
        Line::from(format!("{}▏", app.login.input))
    };
    frame.render_widget(Paragraph::new(input_text).block(input_block), chunks[1]);

    if let Some(message) = &app.login.message {
        frame.render_widget(status_paragraph(message), chunks[2]);
    }
}
