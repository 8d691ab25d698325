use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    /// Audio file, already resolved against the tracks directory.
    pub location: PathBuf,
}

/// An album cover and the size it is drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub path: PathBuf,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub artwork: Artwork,
    /// Tracks in catalog file order.
    pub tracks: Vec<Track>,
}

impl Album {
    /// Text shown under the artwork.
    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }
}

/// Albums in catalog file order. Never empty once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub(crate) fn new(albums: Vec<Album>) -> Self {
        debug_assert!(!albums.is_empty(), "catalog must hold at least one album");
        Self { albums }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Look up a track by album and track index.
    pub fn track(&self, album: usize, track: usize) -> Option<&Track> {
        self.albums.get(album).and_then(|a| a.tracks.get(track))
    }
}
