//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage};
use crate::model::{App, Page};

/// Polls for an input event, waiting up to `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates an input event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws on the next frame
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release and Repeat cause double-handling on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal swallows input first
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // Global shortcuts
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    match app.current_page {
        Page::Ships => handle_list_keys(key),
        Page::ShipDetail { .. } => handle_detail_keys(key),
    }
}

/// List page keys.
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: open the detail page for the selected row
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// Detail page keys; anything that means "back" returns to the list.
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Backspace => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

/// Modal keys: error and help dialogs only respond to a close.
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => AppMessage::CloseModal,
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Event {
        let mut event = KeyEvent::new(code, KeyModifiers::NONE);
        event.kind = KeyEventKind::Press;
        Event::Key(event)
    }

    #[test]
    fn quit_key_maps_to_quit() {
        let app = App::new();
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }

    #[test]
    fn refresh_key_maps_to_refresh() {
        let app = App::new();
        assert_eq!(handle_event(press(KeyCode::Char('r')), &app), AppMessage::Refresh);
    }

    #[test]
    fn list_navigation_keys() {
        let app = App::new();
        assert_eq!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('k')), &app),
            AppMessage::Content(ContentMessage::SelectPrevious)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        );
    }

    #[test]
    fn open_modal_swallows_navigation() {
        let mut app = App::new();
        app.modal.show_error("Fetch failed", "boom");

        assert_eq!(handle_event(press(KeyCode::Down), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::CloseModal);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::CloseModal);
    }

    #[test]
    fn detail_page_enter_goes_back() {
        let mut app = App::new();
        app.current_page = Page::ShipDetail { index: 0 };
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::GoBack);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack);
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(event), &app), AppMessage::Noop);
    }
}
