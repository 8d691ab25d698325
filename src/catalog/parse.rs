use std::fs;
use std::path::Path;
use std::str::Lines;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::LoadError;

use super::model::{Album, Artwork, Catalog, Track};

/// Read and parse the catalog at `path`.
pub fn load(path: &Path, settings: &Settings) -> Result<Catalog, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse(&text, settings)?;
    debug!(path = %path.display(), albums = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog text.
///
/// Layout, one value per line:
///
/// ```text
/// <album count>
/// <title>        \
/// <artist>        |
/// <artwork file>  | repeated per album
/// <track count>   |
/// <track title>   | \ repeated per track
/// <track file>   /  /
/// ```
///
/// Values are trimmed. Blank lines are values too, so an empty title is valid.
/// Artwork and track file names are joined onto the configured directories.
pub fn parse(text: &str, settings: &Settings) -> Result<Catalog, LoadError> {
    let mut reader = LineReader::new(text);
    let lib = &settings.library;
    let layout = &settings.layout;

    let album_count = reader.count("album count")?;
    if album_count == 0 {
        return Err(LoadError::Empty);
    }

    let mut albums = Vec::new();
    for _ in 0..album_count {
        let title = reader.value("album title")?.to_string();
        let artist = reader.value("album artist")?.to_string();
        let artwork = Artwork {
            path: lib.images_dir.join(reader.value("artwork file")?),
            width: layout.artwork_width,
            height: layout.artwork_height,
        };

        let track_count = reader.count("track count")?;
        let mut tracks = Vec::new();
        for _ in 0..track_count {
            let title = reader.value("track title")?.to_string();
            let location = lib.tracks_dir.join(reader.value("track file")?);
            tracks.push(Track { title, location });
        }

        albums.push(Album {
            title,
            artist,
            artwork,
            tracks,
        });
    }

    if let Some(line) = reader.next_non_blank() {
        warn!(line, "ignoring trailing lines after the last album");
    }

    Ok(Catalog::new(albums))
}

/// Trimmed line cursor that remembers 1-based line numbers for errors.
struct LineReader<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn value(&mut self, expected: &'static str) -> Result<&'a str, LoadError> {
        self.line += 1;
        self.lines
            .next()
            .map(str::trim)
            .ok_or(LoadError::UnexpectedEof {
                line: self.line,
                expected,
            })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, LoadError> {
        let raw = self.value(expected)?;
        raw.parse::<usize>().map_err(|_| LoadError::InvalidCount {
            line: self.line,
            value: raw.to_string(),
        })
    }

    /// Line number of the next non-blank line, if any.
    fn next_non_blank(&mut self) -> Option<usize> {
        for l in self.lines.by_ref() {
            self.line += 1;
            if !l.trim().is_empty() {
                return Some(self.line);
            }
        }
        None
    }
}
