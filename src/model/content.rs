//! Search result records and their projection into table rows.

use serde::Deserialize;

use super::types::Category;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// Artist reference nested in album and track records
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub name: String,
}

/// An artist from search results
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub genres: Vec<String>,
    pub external_urls: ExternalUrls,
}

/// An album from search results, also nested in tracks
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlbumRecord {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub album_type: String,
    pub artists: Vec<ArtistRef>,
    pub external_urls: ExternalUrls,
}

/// A track from search results
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub album: AlbumRecord,
    pub artists: Vec<ArtistRef>,
    pub duration_ms: u64,
    pub popularity: u32,
    pub external_urls: ExternalUrls,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackTotal {
    pub total: u32,
}

/// A playlist from search results
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaylistRecord {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
    pub tracks: TrackTotal,
    pub external_urls: ExternalUrls,
}

/// Paging object inside the envelope. The API occasionally returns `null`
/// entries in `items`.
#[derive(Deserialize)]
struct Page<T> {
    #[serde(default)]
    items: Vec<Option<T>>,
    #[serde(default)]
    total: u32,
}

impl<T> Page<T> {
    fn into_parts(self) -> (Vec<T>, u32) {
        (self.items.into_iter().flatten().collect(), self.total)
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    artists: Option<Page<ArtistRecord>>,
    albums: Option<Page<AlbumRecord>>,
    tracks: Option<Page<TrackRecord>>,
    playlists: Option<Page<PlaylistRecord>>,
}

/// Records of a single category
#[derive(Clone, Debug, PartialEq)]
pub enum ResultItems {
    Artists(Vec<ArtistRecord>),
    Albums(Vec<AlbumRecord>),
    Tracks(Vec<TrackRecord>),
    Playlists(Vec<PlaylistRecord>),
}

/// Column header and width. `None` fills the remaining space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub width: Option<u16>,
}

const fn column(title: &'static str, width: u16) -> ColumnSpec {
    ColumnSpec { title, width: Some(width) }
}

const LINK_COLUMN: ColumnSpec = ColumnSpec { title: "Link", width: None };

const ARTIST_COLUMNS: [ColumnSpec; 4] = [
    column("Name", 24),
    column("Popularity", 10),
    column("Genres", 30),
    LINK_COLUMN,
];

const ALBUM_COLUMNS: [ColumnSpec; 6] = [
    column("Name", 28),
    column("Artists", 22),
    column("Released", 10),
    column("Tracks", 6),
    column("Type", 11),
    LINK_COLUMN,
];

const TRACK_COLUMNS: [ColumnSpec; 6] = [
    column("Name", 28),
    column("Artists", 22),
    column("Album", 24),
    column("Duration", 8),
    column("Popularity", 10),
    LINK_COLUMN,
];

const PLAYLIST_COLUMNS: [ColumnSpec; 4] = [
    column("Name", 32),
    column("Owner", 20),
    column("Tracks", 6),
    LINK_COLUMN,
];

/// Result set of one search, replaced wholesale by the next one
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResults {
    pub items: ResultItems,
    /// Number of matches upstream, not just the fetched page
    pub total: u32,
}

impl SearchResults {
    /// Decode a search response body for the given category.
    pub fn from_json(category: Category, body: &str) -> serde_json::Result<Self> {
        let envelope: SearchEnvelope = serde_json::from_str(body)?;
        let missing = || <serde_json::Error as serde::de::Error>::missing_field(category.plural());

        let (items, total) = match category {
            Category::Artist => {
                let (items, total) = envelope.artists.ok_or_else(missing)?.into_parts();
                (ResultItems::Artists(items), total)
            }
            Category::Album => {
                let (items, total) = envelope.albums.ok_or_else(missing)?.into_parts();
                (ResultItems::Albums(items), total)
            }
            Category::Track => {
                let (items, total) = envelope.tracks.ok_or_else(missing)?.into_parts();
                (ResultItems::Tracks(items), total)
            }
            Category::Playlist => {
                let (items, total) = envelope.playlists.ok_or_else(missing)?.into_parts();
                (ResultItems::Playlists(items), total)
            }
        };

        Ok(Self { items, total })
    }

    pub fn category(&self) -> Category {
        match self.items {
            ResultItems::Artists(_) => Category::Artist,
            ResultItems::Albums(_) => Category::Album,
            ResultItems::Tracks(_) => Category::Track,
            ResultItems::Playlists(_) => Category::Playlist,
        }
    }

    pub fn len(&self) -> usize {
        match &self.items {
            ResultItems::Artists(items) => items.len(),
            ResultItems::Albums(items) => items.len(),
            ResultItems::Tracks(items) => items.len(),
            ResultItems::Playlists(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &'static [ColumnSpec] {
        match self.items {
            ResultItems::Artists(_) => &ARTIST_COLUMNS,
            ResultItems::Albums(_) => &ALBUM_COLUMNS,
            ResultItems::Tracks(_) => &TRACK_COLUMNS,
            ResultItems::Playlists(_) => &PLAYLIST_COLUMNS,
        }
    }

    /// One display row per record, cells in [`Self::columns`] order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match &self.items {
            ResultItems::Artists(items) => items
                .iter()
                .map(|a| {
                    vec![
                        a.name.clone(),
                        a.popularity.to_string(),
                        a.genres.join(", "),
                        a.external_urls.spotify.clone(),
                    ]
                })
                .collect(),
            ResultItems::Albums(items) => items
                .iter()
                .map(|a| {
                    vec![
                        a.name.clone(),
                        join_artists(&a.artists),
                        a.release_date.clone(),
                        a.total_tracks.to_string(),
                        a.album_type.clone(),
                        a.external_urls.spotify.clone(),
                    ]
                })
                .collect(),
            ResultItems::Tracks(items) => items
                .iter()
                .map(|t| {
                    vec![
                        t.name.clone(),
                        join_artists(&t.artists),
                        t.album.name.clone(),
                        format_duration(t.duration_ms),
                        t.popularity.to_string(),
                        t.external_urls.spotify.clone(),
                    ]
                })
                .collect(),
            ResultItems::Playlists(items) => items
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.owner.display_name.clone().unwrap_or_else(|| p.owner.id.clone()),
                        p.tracks.total.to_string(),
                        p.external_urls.spotify.clone(),
                    ]
                })
                .collect(),
        }
    }

    /// External link of the record at `index`.
    pub fn link(&self, index: usize) -> Option<&str> {
        let urls = match &self.items {
            ResultItems::Artists(items) => items.get(index).map(|a| &a.external_urls),
            ResultItems::Albums(items) => items.get(index).map(|a| &a.external_urls),
            ResultItems::Tracks(items) => items.get(index).map(|t| &t.external_urls),
            ResultItems::Playlists(items) => items.get(index).map(|p| &p.external_urls),
        };
        urls.map(|u| u.spotify.as_str())
    }
}

fn join_artists(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
