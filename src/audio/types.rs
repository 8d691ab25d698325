//! The audio collaborator seen by the playback controller.
//!
//! The controller only ever holds one [`AudioHandle`]; the backend opens a new
//! one per track. Keeping both behind traits lets the controller run against a
//! recording fake in tests.

use std::path::Path;
use std::time::Duration;

use crate::error::AudioError;

/// One loaded sound resource.
pub trait AudioHandle {
    /// Start or resume output.
    fn play(&mut self);
    fn pause(&mut self);
    /// Stop output for good; the handle is dropped right after.
    fn stop(&mut self);
    /// Playback position within the track.
    fn position(&self) -> Duration;
    /// Total length, when the file reports one.
    fn duration(&self) -> Option<Duration>;
    /// True once the whole track has been played out.
    fn finished(&self) -> bool;
}

/// Opens audio handles for files on disk.
pub trait AudioBackend {
    type Handle: AudioHandle;

    /// Open `path` and return a paused handle.
    fn open(&mut self, path: &Path) -> Result<Self::Handle, AudioError>;
}
