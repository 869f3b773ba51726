//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Page};
use crate::view::theme::Styles;

/// Renders the status bar: key hints on the left, status message on the right.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.ships.loading {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Yellow)));
    } else if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// Key hints for the current page.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Esc/Enter", "Close"));
        return hints;
    }

    match app.current_page {
        Page::Ships => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Details"));
        }
        Page::ShipDetail { .. } => {
            hints.push(("Esc", "Back"));
        }
    }

    hints.push(("r", "Refresh"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
