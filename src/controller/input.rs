//! Key event handling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ViewKind;
use super::AppController;

impl AppController {
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key).await,
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "Terminal resized");
                self.model.set_viewport(width, height);
            }
            _ => {}
        }
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Quit works everywhere, even over the error notification
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
            tracing::info!("Quit requested");
            self.model.set_should_quit();
            return;
        }

        // Error notification blocks all other interactions
        if self.model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.clear_error();
            }
            return;
        }

        if ctrl && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
            self.model.reset_input();
            return;
        }

        match self.model.view_kind() {
            ViewKind::Search => self.handle_search_key(key),
            ViewKind::CategorySelect => self.handle_category_key(key).await,
            ViewKind::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.model.submit_query();
            }
            KeyCode::Backspace => self.model.backspace_input(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.model.append_to_input(c);
            }
            _ => {}
        }
    }

    async fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.model.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.move_selection_down(),
            KeyCode::Enter => self.perform_search().await,
            KeyCode::Backspace => self.navigate_back(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.model.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.move_selection_down(),
            KeyCode::PageUp => self.model.page_up(),
            KeyCode::PageDown => self.model.page_down(),
            KeyCode::Home => self.model.select_first(),
            KeyCode::End => self.model.select_last(),
            KeyCode::Enter => self.open_selected_link(),
            KeyCode::Backspace => self.navigate_back(),
            _ => {}
        }
    }
}
