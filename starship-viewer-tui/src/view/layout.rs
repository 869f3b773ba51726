//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// Renders the whole frame: title bar, content area, status bar, modal.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal goes on top of everything
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Starship Viewer v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let page_title = match app.current_page {
        Page::Ships => " Starships ".to_string(),
        Page::ShipDetail { index } => app
            .ships
            .ships
            .get(index)
            .map_or_else(|| " Starship ".to_string(), |s| format!(" {} ", s.name)),
    };

    let block = Block::default()
        .title(page_title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Ships => pages::ships::render(app, frame, inner_area),
        Page::ShipDetail { index } => pages::detail::render(app, frame, inner_area, index),
    }
}
