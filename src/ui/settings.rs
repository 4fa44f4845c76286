//! Settings: daily reminder toggle and time.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::cli::VERSION;

use super::helpers::inner_rect;
use super::theme::{selected_style, title_style, COLOR_MUTED, COLOR_SECONDARY};

pub fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let inner = inner_rect(area, 1);
    let settings = app.reminders.settings();
    let row = |index: usize, label: &str, value: String| {
        let selected = app.settings_cursor.index == index;
        let style = if selected {
            selected_style()
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(if selected { "› " } else { "  " }),
            Span::styled(format!("{:<20}", label), style),
            Span::styled(value, Style::default().fg(COLOR_SECONDARY)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Értesítések", title_style())),
        Line::from(""),
        row(
            0,
            "Napi emlékeztető",
            if settings.enabled { "Be" } else { "Ki" }.to_string(),
        ),
        row(1, "Időpont", format!("◂ {} ▸", settings.time_label())),
        Line::from(""),
        Line::from(Span::styled(
            "Szóköz: be/ki   ←/→: 15 perccel korábban/később",
            Style::default().fg(COLOR_MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled("Névjegy", title_style())),
        Line::from(Span::styled(
            format!("Egészség Konyhanyelven v{}", VERSION),
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
