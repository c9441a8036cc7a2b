//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `theme`: Styles shared by every renderer
//! - `utils`: Shared utility functions (popup placement, truncation)
//! - `layout`: Screen frame and help line
//! - `content`: Search input, category list and results table
//! - `overlays`: Error notification

mod theme;
mod utils;
mod layout;
mod content;
mod overlays;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    Frame,
};

use crate::model::{AppModel, Screen};

#[derive(Default)]
pub struct AppView {
    theme: Theme,
}

impl AppView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame, model: &AppModel) {
        let area = frame.area().inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Active screen
                Constraint::Length(1), // Help line
            ])
            .split(area);

        match model.screen() {
            Screen::Search => content::render_search_input(frame, chunks[0], model, &self.theme),
            Screen::CategorySelect { query } => {
                content::render_category_list(frame, chunks[0], query, model, &self.theme)
            }
            Screen::Results { query, results } => content::render_results_table(
                frame,
                chunks[0],
                query,
                results,
                model.result_selected(),
                &self.theme,
            ),
        }

        layout::render_help_line(frame, chunks[1], model.view_kind(), &self.theme);

        if let Some(message) = model.error_message() {
            overlays::render_error_notification(frame, message, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{Category, SearchResults};

    fn rendered(model: &AppModel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| AppView::default().render(frame, model))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn type_query(model: &mut AppModel, text: &str) {
        for c in text.chars() {
            model.append_to_input(c);
        }
    }

    #[test]
    fn search_screen_shows_placeholder_and_help() {
        let model = AppModel::new();
        let screen = rendered(&model, 80, 12);
        assert!(screen.contains("Search..."));
        assert!(screen.contains("ctrl+r"));
        assert!(screen.contains("ctrl+c"));
        assert!(screen.contains("submit"));
    }

    #[test]
    fn category_screen_lists_four_categories() {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        model.submit_query();
        let screen = rendered(&model, 80, 20);
        for title in ["Artist", "Album", "Playlist", "Track"] {
            assert!(screen.contains(title), "missing {title}");
        }
        assert!(screen.contains("Queen"));
        assert!(screen.contains("back"));
    }

    #[test]
    fn results_screen_renders_rows_and_headers() {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        model.submit_query();
        let body = r#"{"artists":{"items":[{"name":"Queen","popularity":84,"genres":["rock"],
            "external_urls":{"spotify":"https://open.spotify.com/artist/q"}}],"total":1}}"#;
        model.show_results(SearchResults::from_json(Category::Artist, body).unwrap());

        let screen = rendered(&model, 120, 16);
        assert!(screen.contains("Popularity"));
        assert!(screen.contains("Genres"));
        assert!(screen.contains("Queen"));
        assert!(screen.contains("84"));
        assert!(screen.contains("https://open.spotify.com/artist/q"));
        assert!(screen.contains("1 of 1"));
    }

    #[test]
    fn empty_results_say_so() {
        let mut model = AppModel::new();
        type_query(&mut model, "zzzz");
        model.submit_query();
        let body = r#"{"tracks":{"items":[],"total":0}}"#;
        model.show_results(SearchResults::from_json(Category::Track, body).unwrap());

        let screen = rendered(&model, 160, 14);
        assert!(screen.contains("Duration"));
        assert!(screen.contains("No results"));
    }

    #[test]
    fn error_notification_is_drawn_over_the_screen() {
        let mut model = AppModel::new();
        model.set_error("Could not reach Spotify");
        let screen = rendered(&model, 80, 20);
        assert!(screen.contains("Could not reach Spotify"));
        assert!(screen.contains("Esc to dismiss"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut model = AppModel::new();
        model.set_error("a long error message that needs wrapping across lines");
        rendered(&model, 6, 3);
        rendered(&model, 1, 1);
    }
}
