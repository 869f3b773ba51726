//! Starship list page view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// Renders the starship list page.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.ships.ships.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let message = if app.ships.loading {
        "  Loading starships..."
    } else {
        "  No starships loaded."
    };
    let content = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press r to refresh.",
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .ships
        .ships
        .iter()
        .enumerate()
        .map(|(i, ship)| {
            let is_selected = i == app.ships.selected;

            // Keep long model names from pushing the cost off screen
            let max_model_len = 40;
            let model = if ship.model.chars().count() > max_model_len {
                let truncated: String = ship.model.chars().take(max_model_len).collect();
                format!("{truncated}...")
            } else {
                ship.model.clone()
            };

            let name_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let model_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let cost_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:24}", ship.name), name_style),
                Span::raw(" "),
                Span::styled(model, model_style),
                Span::raw("  "),
                Span::styled(format!("Cost: {}", ship.cost_in_credits), cost_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.ships.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
