//! Main application model with state management

use std::time::{Duration, Instant};

use super::content::SearchResults;
use super::types::{derive_view, Category, ViewKind, Viewport};

/// Longest query the input accepts, in characters.
pub const INPUT_CHAR_LIMIT: usize = 255;

const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Rows around the results table that are not data rows: outer margins,
/// help line, block borders, header and its bottom margin.
const RESULTS_CHROME_ROWS: u16 = 7;

/// The active screen, carrying only the state that screen needs
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Screen {
    #[default]
    Search,
    CategorySelect {
        query: String,
    },
    Results {
        query: String,
        results: SearchResults,
    },
}

impl Screen {
    pub fn kind(&self) -> ViewKind {
        match self {
            Screen::Search => ViewKind::Search,
            Screen::CategorySelect { .. } => ViewKind::CategorySelect,
            Screen::Results { .. } => ViewKind::Results,
        }
    }

    /// Committed query, empty while still in [`Screen::Search`].
    pub fn query(&self) -> &str {
        match self {
            Screen::Search => "",
            Screen::CategorySelect { query } | Screen::Results { query, .. } => query,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Screen::Results { results, .. } => Some(results.category()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct ErrorNotice {
    message: String,
    raised_at: Instant,
}

/// Main application model containing all state
#[derive(Debug, Default)]
pub struct AppModel {
    screen: Screen,
    input: String,
    category_selected: usize,
    result_selected: usize,
    error: Option<ErrorNotice>,
    viewport: Viewport,
    should_quit: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn view_kind(&self) -> ViewKind {
        derive_view(self.screen.query(), self.screen.category())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Input buffer
    // ========================================================================

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn append_to_input(&mut self, c: char) {
        if self.input.chars().count() < INPUT_CHAR_LIMIT {
            self.input.push(c);
        }
    }

    pub fn backspace_input(&mut self) {
        self.input.pop();
    }

    pub fn reset_input(&mut self) {
        self.input.clear();
    }

    // ========================================================================
    // Screen transitions
    // ========================================================================

    /// Commit the input buffer as the query. Returns whether the screen changed.
    pub fn submit_query(&mut self) -> bool {
        if self.screen != Screen::Search || self.input.is_empty() {
            return false;
        }
        tracing::debug!(query = %self.input, "Query submitted");
        self.screen = Screen::CategorySelect {
            query: self.input.clone(),
        };
        true
    }

    /// Query and highlighted category to search with, if choosing a category.
    pub fn pending_search(&self) -> Option<(String, Category)> {
        match &self.screen {
            Screen::CategorySelect { query } => Some((query.clone(), self.selected_category())),
            _ => None,
        }
    }

    /// Enter the results screen. Only valid while choosing a category.
    pub fn show_results(&mut self, results: SearchResults) -> bool {
        let Screen::CategorySelect { query } = &mut self.screen else {
            tracing::warn!("Dropping search results that arrived outside category selection");
            return false;
        };
        let query = std::mem::take(query);
        self.screen = Screen::Results { query, results };
        self.result_selected = 0;
        true
    }

    /// Step back one screen. A no-op on the search screen.
    pub fn navigate_back(&mut self) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Search | Screen::CategorySelect { .. } => Screen::Search,
            Screen::Results { query, .. } => {
                self.result_selected = 0;
                Screen::CategorySelect { query }
            }
        };
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn category_selected(&self) -> usize {
        self.category_selected
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.category_selected % Category::ALL.len()]
    }

    pub fn result_selected(&self) -> usize {
        self.result_selected
    }

    pub fn results(&self) -> Option<&SearchResults> {
        match &self.screen {
            Screen::Results { results, .. } => Some(results),
            _ => None,
        }
    }

    /// External link of the highlighted result row.
    pub fn selected_link(&self) -> Option<&str> {
        self.results()?.link(self.result_selected)
    }

    pub fn move_selection_up(&mut self) {
        match self.screen.kind() {
            ViewKind::Search => {}
            ViewKind::CategorySelect => {
                let len = Category::ALL.len();
                self.category_selected = (self.category_selected + len - 1) % len;
            }
            ViewKind::Results => self.move_result_cursor(|current, _| current.saturating_sub(1)),
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.screen.kind() {
            ViewKind::Search => {}
            ViewKind::CategorySelect => {
                self.category_selected = (self.category_selected + 1) % Category::ALL.len();
            }
            ViewKind::Results => self.move_result_cursor(|current, last| (current + 1).min(last)),
        }
    }

    pub fn page_up(&mut self) {
        let page = self.results_page_size();
        self.move_result_cursor(|current, _| current.saturating_sub(page));
    }

    pub fn page_down(&mut self) {
        let page = self.results_page_size();
        self.move_result_cursor(|current, last| current.saturating_add(page).min(last));
    }

    pub fn select_first(&mut self) {
        self.move_result_cursor(|_, _| 0);
    }

    pub fn select_last(&mut self) {
        self.move_result_cursor(|_, last| last);
    }

    fn move_result_cursor(&mut self, step: impl FnOnce(usize, usize) -> usize) {
        let Some(len) = self.results().map(SearchResults::len) else {
            return;
        };
        if len == 0 {
            self.result_selected = 0;
            return;
        }
        self.result_selected = step(self.result_selected, len - 1);
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    /// Data rows visible in the results table at the current viewport size.
    pub fn results_page_size(&self) -> usize {
        self.viewport.height.saturating_sub(RESULTS_CHROME_ROWS).max(1) as usize
    }

    // ========================================================================
    // Error notification
    // ========================================================================

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(ErrorNotice {
            message: message.into(),
            raised_at: Instant::now(),
        });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Drop the error notification once it has been shown long enough.
    pub fn auto_clear_old_errors(&mut self) {
        self.clear_errors_older_than(Instant::now());
    }

    fn clear_errors_older_than(&mut self, now: Instant) {
        if let Some(notice) = &self.error
            && now.saturating_duration_since(notice.raised_at) >= ERROR_DISPLAY_DURATION
        {
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ARTISTS: &str = r#"{"artists":{"items":[
        {"name":"Queen","external_urls":{"spotify":"https://open.spotify.com/artist/q"}},
        {"name":"Queens of the Stone Age","external_urls":{"spotify":"https://open.spotify.com/artist/qotsa"}}
    ],"total":2}}"#;

    fn type_query(model: &mut AppModel, text: &str) {
        for c in text.chars() {
            model.append_to_input(c);
        }
    }

    fn model_with_results() -> AppModel {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        assert!(model.submit_query());
        let results = SearchResults::from_json(Category::Artist, TWO_ARTISTS).unwrap();
        assert!(model.show_results(results));
        model
    }

    #[test]
    fn screen_kind_agrees_with_derive_view() {
        let results = SearchResults::from_json(Category::Artist, TWO_ARTISTS).unwrap();
        let screens = [
            Screen::Search,
            Screen::CategorySelect { query: "Queen".into() },
            Screen::Results { query: "Queen".into(), results },
        ];
        for screen in screens {
            assert_eq!(screen.kind(), derive_view(screen.query(), screen.category()));
        }
    }

    #[test]
    fn empty_submit_stays_on_search() {
        let mut model = AppModel::new();
        assert!(!model.submit_query());
        assert_eq!(model.view_kind(), ViewKind::Search);
        assert_eq!(model.screen(), &Screen::Search);
    }

    #[test]
    fn submit_commits_the_input_verbatim() {
        let mut model = AppModel::new();
        type_query(&mut model, "  Queen ");
        assert!(model.submit_query());
        assert_eq!(model.view_kind(), ViewKind::CategorySelect);
        assert_eq!(model.screen().query(), "  Queen ");
    }

    #[test]
    fn back_from_search_is_idempotent() {
        let mut model = AppModel::new();
        type_query(&mut model, "abc");
        model.navigate_back();
        model.navigate_back();
        assert_eq!(model.screen(), &Screen::Search);
        assert_eq!(model.input(), "abc");
    }

    #[test]
    fn back_from_results_keeps_query_and_drops_category() {
        let mut model = model_with_results();
        assert_eq!(model.view_kind(), ViewKind::Results);
        assert_eq!(model.screen().category(), Some(Category::Artist));

        model.navigate_back();
        assert_eq!(model.view_kind(), ViewKind::CategorySelect);
        assert_eq!(model.screen().query(), "Queen");
        assert_eq!(model.screen().category(), None);
        assert!(model.results().is_none());
        assert_eq!(model.selected_category(), Category::Artist);
    }

    #[test]
    fn back_from_category_select_returns_to_search_with_input_kept() {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        model.submit_query();
        model.navigate_back();
        assert_eq!(model.view_kind(), ViewKind::Search);
        assert_eq!(model.input(), "Queen");
    }

    #[test]
    fn reset_clears_only_the_input() {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        model.submit_query();
        model.reset_input();
        assert_eq!(model.input(), "");
        assert_eq!(model.screen().query(), "Queen");
    }

    #[test]
    fn input_is_capped() {
        let mut model = AppModel::new();
        type_query(&mut model, &"x".repeat(INPUT_CHAR_LIMIT + 20));
        assert_eq!(model.input().chars().count(), INPUT_CHAR_LIMIT);
    }

    #[test]
    fn results_only_land_in_category_select() {
        let mut model = AppModel::new();
        let results = SearchResults::from_json(Category::Artist, TWO_ARTISTS).unwrap();
        assert!(!model.show_results(results));
        assert_eq!(model.view_kind(), ViewKind::Search);
    }

    #[test]
    fn category_highlight_wraps() {
        let mut model = AppModel::new();
        type_query(&mut model, "Queen");
        model.submit_query();

        model.move_selection_up();
        assert_eq!(model.selected_category(), Category::Track);
        model.move_selection_down();
        model.move_selection_down();
        assert_eq!(model.selected_category(), Category::Album);
        assert_eq!(
            model.pending_search(),
            Some(("Queen".to_string(), Category::Album))
        );
    }

    #[test]
    fn result_cursor_is_clamped() {
        let mut model = model_with_results();
        model.move_selection_up();
        assert_eq!(model.result_selected(), 0);
        model.move_selection_down();
        model.move_selection_down();
        assert_eq!(model.result_selected(), 1);
        assert_eq!(model.selected_link(), Some("https://open.spotify.com/artist/qotsa"));

        model.select_first();
        assert_eq!(model.result_selected(), 0);
        model.page_down();
        assert_eq!(model.result_selected(), 1);
        model.page_up();
        assert_eq!(model.result_selected(), 0);
    }

    #[test]
    fn page_size_follows_the_viewport() {
        let mut model = AppModel::new();
        assert_eq!(model.results_page_size(), 1);
        model.set_viewport(120, 40);
        assert_eq!(model.viewport(), Viewport { width: 120, height: 40 });
        assert_eq!(model.results_page_size(), 33);
    }

    #[test]
    fn errors_clear_after_display_duration() {
        let mut model = AppModel::new();
        model.set_error("boom");
        model.auto_clear_old_errors();
        assert_eq!(model.error_message(), Some("boom"));

        model.clear_errors_older_than(Instant::now() + Duration::from_secs(6));
        assert!(!model.has_error());
    }
}
