//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! drives the screen state machine and performs its side effects.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and resize event handling
//! - `navigation`: Search submission, link opening and back navigation

mod input;
mod navigation;

use crate::auth::AccessToken;
use crate::model::{AppModel, SearchError, SpotifyClient};
use crate::opener::LinkOpener;

/// Owns the model and everything needed to act on it. Events are handled
/// one at a time on the loop that owns the controller.
pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) spotify: SpotifyClient,
    pub(crate) token: AccessToken,
    pub(crate) opener: Box<dyn LinkOpener>,
}

impl AppController {
    pub fn new(spotify: SpotifyClient, token: AccessToken, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            model: AppModel::new(),
            spotify,
            token,
            opener,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }

    /// Housekeeping run once per loop iteration, before drawing.
    pub fn tick(&mut self) {
        self.model.auto_clear_old_errors();
    }

    pub(crate) fn format_error(error: &SearchError) -> String {
        match error {
            SearchError::Status { status: 401, .. } => {
                "Access token rejected or expired. Restart to fetch a new one.".to_string()
            }
            SearchError::Status { status: 429, .. } => {
                "Rate limited by Spotify. Please wait a moment.".to_string()
            }
            SearchError::Status { status, message } => {
                format!("Spotify returned {}: {}", status, message)
            }
            SearchError::Transport(e) if e.is_timeout() => {
                "Search timed out. Check your connection and try again.".to_string()
            }
            SearchError::Transport(_) => {
                "Could not reach Spotify. Check your connection and try again.".to_string()
            }
            SearchError::Decode(_) => "Spotify sent a response that could not be read.".to_string(),
        }
    }
}
