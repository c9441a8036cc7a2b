//! Screen transitions with side effects: searching, opening links, going back

use super::AppController;

impl AppController {
    /// Search with the committed query and highlighted category. On failure
    /// the category screen stays up with an error notification.
    pub async fn perform_search(&mut self) {
        let Some((query, category)) = self.model.pending_search() else {
            return;
        };
        tracing::debug!(query = %query, category = %category, "Performing search");

        match self.spotify.search(&query, category, &self.token).await {
            Ok(results) => {
                tracing::info!(
                    query = %query,
                    category = %category,
                    returned = results.len(),
                    total = results.total,
                    "Search completed successfully"
                );
                self.model.show_results(results);
            }
            Err(e) => {
                tracing::error!(query = %query, category = %category, error = %e, "Search failed");
                let error_msg = Self::format_error(&e);
                self.model.set_error(error_msg);
            }
        }
    }

    /// Hand the highlighted result's link to the OS. Failures are only logged.
    pub fn open_selected_link(&self) {
        let Some(link) = self.model.selected_link() else {
            return;
        };
        match self.opener.open(link) {
            Ok(()) => tracing::info!(link, "Opened result link"),
            Err(e) => tracing::warn!(link, error = %e, "Could not open result link"),
        }
    }

    pub fn navigate_back(&mut self) {
        let from = self.model.view_kind();
        self.model.navigate_back();
        tracing::debug!(?from, to = ?self.model.view_kind(), "Navigated back");
    }
}
