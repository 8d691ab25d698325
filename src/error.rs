//! Error types for the catalog, audio and artwork domains.
//!
//! Catalog errors are fatal at startup. Audio and artwork errors come from
//! the media collaborators at play/draw time and are reported, not retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse the album catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file ended before a line the counts promised.
    #[error("catalog ended early at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("invalid count on line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },
    #[error("catalog declares no albums")]
    Empty,
}

/// Failure in the audio output collaborator.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    OutputUnavailable(#[from] rodio::StreamError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Failure to load an artwork or button image.
#[derive(Error, Debug)]
pub enum ArtworkError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
