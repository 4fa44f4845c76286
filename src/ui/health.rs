//! Health panel: today's steps, weight, water and sleep.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::view_state::HealthField;

use super::helpers::{inner_rect, status_paragraph};
use super::theme::{
    selected_style, COLOR_ACCENT_RED, COLOR_BORDER, COLOR_MUTED, COLOR_PRIMARY,
};

const CARD_HEIGHT: u16 = 3;

pub fn render_health(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);
    let view = &app.health_view;
    let record = &view.record;

    for (i, field) in HealthField::ALL.iter().enumerate() {
        let y = inner.y + i as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            return;
        }
        let rect = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let selected = *field == view.field;

        let value = match field {
            HealthField::Steps => record.step_count.to_string(),
            HealthField::Weight => record.weight_display(),
            HealthField::Water => record.water_display(),
            HealthField::Sleep => record.sleep_display(),
        };
        let value = match (&view.input, selected) {
            (Some(input), true) => format!("{}▏", input),
            _ => value,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if selected {
                COLOR_PRIMARY
            } else {
                COLOR_BORDER
            }))
            .title(format!(" {} ", field.title()));
        let mut spans = vec![Span::styled(
            value,
            if selected {
                selected_style()
            } else {
                Style::default().fg(COLOR_ACCENT_RED)
            },
        )];
        if selected {
            spans.push(Span::styled(
                format!("   {}", field.hint()),
                Style::default().fg(COLOR_MUTED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }

    let message_y = inner.y + HealthField::ALL.len() as u16 * CARD_HEIGHT;
    if let Some(message) = &view.message {
        if message_y < inner.y + inner.height {
            frame.render_widget(
                status_paragraph(message),
                Rect::new(inner.x, message_y, inner.width, 1),
            );
        }
    }
}
