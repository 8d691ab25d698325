//! Library catalog: the static list of albums and tracks read at startup.
//!
//! The catalog is a line-oriented text file; see [`parse`] for the format.

mod model;
mod parse;

pub use model::*;
pub use parse::{load, parse};


/// Build a catalog with one album per entry of `track_counts`.
#[cfg(test)]
pub(crate) fn sample(track_counts: &[usize]) -> Catalog {
    use std::path::PathBuf;

    let albums = track_counts
        .iter()
        .enumerate()
        .map(|(a, &count)| Album {
            title: format!("Album {a}"),
            artist: format!("Artist {a}"),
            artwork: Artwork {
                path: PathBuf::from(format!("images/cover{a}.png")),
                width: 100.0,
                height: 100.0,
            },
            tracks: (0..count)
                .map(|t| Track {
                    title: format!("Track {a}.{t}"),
                    location: PathBuf::from(format!("tracks/{a}-{t}.mp3")),
                })
                .collect(),
        })
        .collect();
    Catalog::new(albums)
}
