//! Starship detail page view

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use starship_viewer_api::Starship;

use crate::model::App;
use crate::view::theme::colors;

/// Renders the detail page for the starship at `index`.
///
/// Pure read of fields already in memory; no fetching happens here.
pub fn render(app: &App, frame: &mut Frame, area: Rect, index: usize) {
    let c = colors();

    let Some(ship) = app.ships.ships.get(index) else {
        let paragraph = Paragraph::new(Line::styled(
            "  Starship no longer available. Press Esc to go back.",
            Style::default().fg(c.muted),
        ));
        frame.render_widget(paragraph, area);
        return;
    };

    let label_style = Style::default().fg(c.muted);
    let value_style = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    for (label, value) in fields(ship) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{label:24}"), label_style),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Press Esc to go back.",
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Label/value rows for one starship, fields rendered verbatim.
///
/// Optional fields absent from the payload are skipped rather than filled
/// with placeholders.
fn fields(ship: &Starship) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Name", ship.name.clone()),
        ("Model", ship.model.clone()),
        ("Manufacturer", ship.manufacturer.clone()),
        ("Cost in credits", ship.cost_in_credits.clone()),
    ];

    let optional = [
        ("Length", &ship.length),
        ("Crew", &ship.crew),
        ("Passengers", &ship.passengers),
        ("Max atmosphering speed", &ship.max_atmosphering_speed),
        ("Cargo capacity", &ship.cargo_capacity),
        ("Consumables", &ship.consumables),
        ("Hyperdrive rating", &ship.hyperdrive_rating),
        ("Starship class", &ship.starship_class),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            rows.push((label, value.clone()));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_render_record_verbatim() {
        let ship: Starship = serde_json::from_str(
            r#"{
                "name": "Millennium Falcon",
                "model": "YT-1300 light freighter",
                "manufacturer": "Corellian Engineering Corporation",
                "cost_in_credits": "100000",
                "crew": "4"
            }"#,
        )
        .unwrap();

        let rows = fields(&ship);
        assert_eq!(rows[0], ("Name", "Millennium Falcon".to_string()));
        assert_eq!(rows[1], ("Model", "YT-1300 light freighter".to_string()));
        assert_eq!(rows[3], ("Cost in credits", "100000".to_string()));
        assert!(rows.contains(&("Crew", "4".to_string())));
        // Absent optionals are skipped
        assert!(!rows.iter().any(|(label, _)| *label == "Passengers"));
    }

    #[test]
    fn fields_keep_sentinel_values_as_text() {
        let ship: Starship = serde_json::from_str(
            r#"{
                "name": "Death Star",
                "model": "DS-1",
                "manufacturer": "Imperial DoMR",
                "cost_in_credits": "unknown",
                "max_atmosphering_speed": "n/a"
            }"#,
        )
        .unwrap();

        let rows = fields(&ship);
        assert!(rows.contains(&("Cost in credits", "unknown".to_string())));
        assert!(rows.contains(&("Max atmosphering speed", "n/a".to_string())));
    }
}
