//! Core type definitions for the application

use std::fmt;

/// Entity kind a search is restricted to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Artist,
    Album,
    Track,
    Playlist,
}

impl Category {
    /// Order in which the categories are offered to the user.
    pub const ALL: [Category; 4] = [
        Category::Artist,
        Category::Album,
        Category::Playlist,
        Category::Track,
    ];

    /// Value of the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
            Self::Playlist => "playlist",
        }
    }

    /// Key of the response envelope holding this category's results.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Artist => "artists",
            Self::Album => "albums",
            Self::Track => "tracks",
            Self::Playlist => "playlists",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Track => "Track",
            Self::Playlist => "Playlist",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Artist => "Performers with their genres and popularity",
            Self::Album => "Albums, singles and compilations",
            Self::Track => "Individual songs with their album",
            Self::Playlist => "Public playlists and their owners",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the three screens is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// Collecting the query text
    Search,
    /// Choosing the entity category
    CategorySelect,
    /// Browsing the result table
    Results,
}

/// Active view as a function of the committed query and category.
pub fn derive_view(query: &str, category: Option<Category>) -> ViewKind {
    match (query.is_empty(), category) {
        (true, _) => ViewKind::Search,
        (false, None) => ViewKind::CategorySelect,
        (false, Some(_)) => ViewKind::Results,
    }
}

/// Last known terminal size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_view_truth_table() {
        assert_eq!(derive_view("", None), ViewKind::Search);
        for category in Category::ALL {
            assert_eq!(derive_view("", Some(category)), ViewKind::Search);
            assert_eq!(derive_view("Queen", Some(category)), ViewKind::Results);
        }
        assert_eq!(derive_view("Queen", None), ViewKind::CategorySelect);
        assert_eq!(derive_view(" ", None), ViewKind::CategorySelect);
    }

    #[test]
    fn category_wire_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["artist", "album", "playlist", "track"]);
        let plurals: Vec<_> = Category::ALL.iter().map(|c| c.plural()).collect();
        assert_eq!(plurals, ["artists", "albums", "playlists", "tracks"]);
        assert_eq!(Category::Track.to_string(), "track");
    }
}
