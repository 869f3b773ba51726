//! Content-area update logic

use crate::message::ContentMessage;
use crate::model::{App, Page};

/// Handles content-area messages on the list page.
pub fn update(app: &mut App, msg: ContentMessage) {
    // Content messages only make sense while the list is showing
    if app.current_page != Page::Ships {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => {
            app.ships.select_previous();
        }
        ContentMessage::SelectNext => {
            app.ships.select_next();
        }
        ContentMessage::SelectFirst => {
            app.ships.select_first();
        }
        ContentMessage::SelectLast => {
            app.ships.select_last();
        }
        ContentMessage::Confirm => {
            // Hand the selected record to the detail page
            if app.ships.selected_ship().is_some() {
                app.current_page = Page::ShipDetail {
                    index: app.ships.selected,
                };
                app.clear_status();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starship_viewer_api::Starship;

    fn ship(name: &str) -> Starship {
        serde_json::from_str(&format!(
            r#"{{"name": "{name}", "model": "m", "manufacturer": "mf", "cost_in_credits": "1"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn confirm_opens_detail_for_selected_index() {
        let mut app = App::new();
        app.ships.set_ships(vec![ship("a"), ship("b"), ship("c")]);
        app.ships.selected = 2;

        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::ShipDetail { index: 2 });
    }

    #[test]
    fn confirm_on_empty_list_stays_on_list_page() {
        let mut app = App::new();
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::Ships);
    }

    #[test]
    fn navigation_ignored_while_detail_is_open() {
        let mut app = App::new();
        app.ships.set_ships(vec![ship("a"), ship("b")]);
        app.current_page = Page::ShipDetail { index: 0 };

        update(&mut app, ContentMessage::SelectNext);
        assert_eq!(app.ships.selected, 0);
    }
}
