//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (categories, view kinds, viewport)
//! - `content`: Search result records and their table projection
//! - `spotify_client`: Spotify search API client
//! - `app_model`: Screen state machine and UI state

mod types;
mod content;
mod spotify_client;
mod app_model;

pub use types::{derive_view, Category, ViewKind, Viewport};

pub use content::{
    format_duration, AlbumRecord, ArtistRecord, ArtistRef, ColumnSpec, ExternalUrls,
    PlaylistOwner, PlaylistRecord, ResultItems, SearchResults, TrackRecord, TrackTotal,
};

pub use spotify_client::{SearchError, SpotifyClient};

pub use app_model::{AppModel, Screen, INPUT_CHAR_LIMIT};
